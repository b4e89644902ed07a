//! Diagnostic - Rust-style error message rendering
//!
//! Converts a raised lexer error into a detailed report with:
//! - Error code (EL001, EL002, etc.)
//! - File, line and the offending source snippet
//! - Fix suggestions

use crate::error::LexError;
use std::fmt;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Fatal error - prevents compilation
    Error,
    /// Warning - does not prevent compilation
    Warning,
    /// Note - additional information
    Note,
    /// Help - fix suggestion
    Help,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
            Level::Help => "help",
        }
    }

    /// Returns the ANSI code for coloring (if terminal supports it)
    pub fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "\x1b[1;31m",   // Bold Red
            Level::Warning => "\x1b[1;33m", // Bold Yellow
            Level::Note => "\x1b[1;36m",    // Bold Cyan
            Level::Help => "\x1b[1;32m",    // Bold Green
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured error code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCode {
    /// Category (L = Lexer)
    pub category: char,
    /// Error number
    pub number: u16,
}

impl ErrorCode {
    pub const fn new(category: char, number: u16) -> Self {
        Self { category, number }
    }

    pub const ILLEGAL_CHARACTER: Self = Self::new('L', 1);
    pub const INVALID_DIGIT_SEPARATOR: Self = Self::new('L', 2);
    pub const INVALID_NUMBER_LITERAL: Self = Self::new('L', 3);
    pub const INVALID_ESCAPE_SEQUENCE: Self = Self::new('L', 4);
    pub const INVALID_CHARACTER_LITERAL: Self = Self::new('L', 5);
    pub const UNTERMINATED_STRING: Self = Self::new('L', 6);
    pub const INVALID_TEXT_BLOCK: Self = Self::new('L', 7);
    pub const INVALID_UNICODE_ESCAPE: Self = Self::new('L', 8);
    pub const BUFFER_EXHAUSTED: Self = Self::new('L', 9);
    pub const ROLLBACK_OVERFLOW: Self = Self::new('L', 10);
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}{:03}", self.category, self.number)
    }
}

/// A label pointing at one source line
#[derive(Debug, Clone)]
pub struct Label {
    /// Line (1-indexed)
    pub line: u32,
    /// Label message
    pub message: String,
}

/// A complete diagnostic
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level
    pub level: Level,
    /// Error code (optional)
    pub code: Option<ErrorCode>,
    /// Main message
    pub message: String,
    /// Labels pointing to the code
    pub labels: Vec<Label>,
    /// Fix suggestions
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Creates a new error
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Sets the error code
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Adds a label pointing at a line
    pub fn with_label(mut self, line: u32, message: impl Into<String>) -> Self {
        self.labels.push(Label {
            line,
            message: message.into(),
        });
        self
    }

    /// Adds a fix suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Builds the user-facing diagnostic for a raised lexer error
    pub fn from_lex_error(error: &LexError) -> Self {
        let (code, help) = match error {
            LexError::IllegalCharacter { .. } => (ErrorCode::ILLEGAL_CHARACTER, None),
            LexError::InvalidDigitSeparator { .. } => (
                ErrorCode::INVALID_DIGIT_SEPARATOR,
                Some("place '_' between two digits, as in 1_000"),
            ),
            LexError::InvalidNumberLiteral { .. } => (ErrorCode::INVALID_NUMBER_LITERAL, None),
            LexError::InvalidEscapeSequence { .. } => (
                ErrorCode::INVALID_ESCAPE_SEQUENCE,
                Some("valid escapes are \\b \\s \\t \\n \\f \\r \\\" \\' \\\\ and octal digits"),
            ),
            LexError::InvalidCharacterLiteral { .. } => (
                ErrorCode::INVALID_CHARACTER_LITERAL,
                Some("a character literal holds exactly one character, as in 'a'"),
            ),
            LexError::UnterminatedStringOrTextBlock { .. } => (
                ErrorCode::UNTERMINATED_STRING,
                Some("add the closing delimiter before the end of the line or file"),
            ),
            LexError::InvalidTextBlock { .. } => (
                ErrorCode::INVALID_TEXT_BLOCK,
                Some("the opening \"\"\" must be followed by a line terminator"),
            ),
            LexError::InvalidUnicodeEscape { .. } => (
                ErrorCode::INVALID_UNICODE_ESCAPE,
                Some("a unicode escape is '\\u' followed by exactly 4 hex digits"),
            ),
            LexError::BufferExhausted { .. } => (ErrorCode::BUFFER_EXHAUSTED, None),
            LexError::RollbackOverflow { .. } => (ErrorCode::ROLLBACK_OVERFLOW, None),
        };

        let mut diagnostic = Diagnostic::error(error.to_string()).with_code(code);
        if let Some(line) = error.line() {
            diagnostic = diagnostic.with_label(line, "tokenization failed here");
        }
        if let Some(help) = help {
            diagnostic = diagnostic.with_help(help);
        }
        diagnostic
    }
}

/// A named source file prepared for line lookup during rendering
#[derive(Debug)]
pub struct SourceFile {
    pub name: String,
    pub source: String,
    /// Offset of each line (for fast lookup)
    line_starts: Vec<usize>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            name: name.into(),
            source,
            line_starts,
        }
    }

    /// Returns the line of code (line is 1-indexed)
    pub fn get_line(&self, line: u32) -> Option<&str> {
        let line_idx = line.checked_sub(1)? as usize;
        let start = *self.line_starts.get(line_idx)?;
        let end = self
            .line_starts
            .get(line_idx + 1)
            .map(|&e| e.saturating_sub(1))
            .unwrap_or(self.source.len());

        Some(self.source[start..end].trim_end_matches('\r'))
    }
}

/// Renders a diagnostic for display
pub struct DiagnosticRenderer<'a> {
    file: &'a SourceFile,
    use_colors: bool,
}

impl<'a> DiagnosticRenderer<'a> {
    pub fn new(file: &'a SourceFile) -> Self {
        Self {
            file,
            use_colors: true,
        }
    }

    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Renders the diagnostic as a string
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let mut output = String::new();

        let reset = if self.use_colors { "\x1b[0m" } else { "" };
        let color = if self.use_colors {
            diagnostic.level.color_code()
        } else {
            ""
        };
        let bold = if self.use_colors { "\x1b[1m" } else { "" };
        let blue = if self.use_colors { "\x1b[1;34m" } else { "" };

        // Line 1: error[EL001]: message
        output.push_str(color);
        output.push_str(diagnostic.level.as_str());

        if let Some(code) = &diagnostic.code {
            output.push('[');
            output.push_str(&code.to_string());
            output.push(']');
        }

        output.push_str(reset);
        output.push_str(bold);
        output.push_str(": ");
        output.push_str(&diagnostic.message);
        output.push_str(reset);
        output.push('\n');

        // Labels with code snippets
        for label in &diagnostic.labels {
            output.push_str(&format!(
                " {}-->{} {}:{}\n",
                blue, reset, self.file.name, label.line
            ));

            if let Some(line_content) = self.file.get_line(label.line) {
                let line_num_width = label.line.to_string().len();
                let padding = " ".repeat(line_num_width);

                output.push_str(&format!(" {} {}|{}\n", padding, blue, reset));
                output.push_str(&format!(
                    " {}{}{} {}|{} {}\n",
                    blue, label.line, reset, blue, reset, line_content
                ));

                let underline = "^".repeat(line_content.len().max(1));
                output.push_str(&format!(
                    " {} {}|{} {}{}{} {}\n",
                    padding, blue, reset, color, underline, reset, label.message
                ));
            }
        }

        // Suggestions
        for help in &diagnostic.helps {
            let green = if self.use_colors { "\x1b[1;32m" } else { "" };
            output.push_str(&format!("   = {}help{}: {}\n", green, reset, help));
        }

        output
    }
}
