//! The lexer error family
//!
//! Every failure the tokenizer can raise, each annotated with the
//! best-known source line. The lexer never recovers locally: the first
//! error aborts the current file and is surfaced to the driver.

use thiserror::Error;

/// Errors raised while tokenizing a single source file
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    /// A character matches no classifier predicate
    #[error("illegal character '{ch}' at line {line}")]
    IllegalCharacter { ch: char, line: u32 },

    /// Underscore not strictly between two digits
    #[error("digit separator '_' must appear between digits in '{run}' at line {line}")]
    InvalidDigitSeparator { run: String, line: u32 },

    /// Suffix/base mismatch, empty digit run, or octal reinterpretation failure
    #[error("invalid number literal '{text}' at line {line}")]
    InvalidNumberLiteral { text: String, line: u32 },

    /// A backslash followed by an unknown escape marker
    #[error("invalid escape sequence '\\{ch}' at line {line}")]
    InvalidEscapeSequence { ch: char, line: u32 },

    /// A character literal that is not exactly one logical character
    #[error("invalid character literal at line {line}")]
    InvalidCharacterLiteral { line: u32 },

    /// Missing closing delimiter for a string or text block
    #[error("unterminated string or text block starting at line {line}")]
    UnterminatedStringOrTextBlock { line: u32 },

    /// Text block opened without a following line terminator
    #[error("text block must begin with a line terminator at line {line}")]
    InvalidTextBlock { line: u32 },

    /// Malformed or truncated `\u` escape during normalization
    #[error("invalid unicode escape at line {line}")]
    InvalidUnicodeEscape { line: u32 },

    /// A read past the end of input (malformed token at end of file)
    #[error("unexpected end of input at line {line}")]
    BufferExhausted { line: u32 },

    /// Contextual-merge rollback past the first issued reference
    #[error("reference rollback of {requested} exceeds the {issued} issued positions")]
    RollbackOverflow { requested: u32, issued: u32 },
}

impl LexError {
    /// The source line the error was raised at, where known
    pub fn line(&self) -> Option<u32> {
        match self {
            LexError::IllegalCharacter { line, .. }
            | LexError::InvalidDigitSeparator { line, .. }
            | LexError::InvalidNumberLiteral { line, .. }
            | LexError::InvalidEscapeSequence { line, .. }
            | LexError::InvalidCharacterLiteral { line }
            | LexError::UnterminatedStringOrTextBlock { line }
            | LexError::InvalidTextBlock { line }
            | LexError::InvalidUnicodeEscape { line }
            | LexError::BufferExhausted { line } => Some(*line),
            LexError::RollbackOverflow { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_carries_line() {
        let err = LexError::IllegalCharacter { ch: '#', line: 7 };
        assert_eq!(err.line(), Some(7));
        assert!(err.to_string().contains("'#'"));
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn test_rollback_overflow_has_no_line() {
        let err = LexError::RollbackOverflow {
            requested: 3,
            issued: 1,
        };
        assert_eq!(err.line(), None);
    }
}
