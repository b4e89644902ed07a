//! Tokens for the Javali language
//!
//! Defines the closed set of token kinds the lexer can produce. Every
//! token keeps the raw lexeme it was built from, so concatenating the
//! text of all tokens in stream order reproduces the normalized source
//! exactly.

use javali_error::Reference;
use std::fmt;
use unicode_xid::UnicodeXID;

/// Numeric base assigned to an integer or floating-point literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    /// The base as a number (2, 8, 10 or 16)
    pub fn value(&self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }
}

/// All token kinds for the Javali language
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Maximal run of spaces, tabs, form feeds and line terminators
    WhiteSpace,
    /// Line comment (`// ...`) or block comment (`/* ... */`)
    Comment,
    /// Name that is not reserved: `foo`, `userName`, `$tmp`
    Identifier,
    /// Reserved word: `class`, `int`, `while`, ...
    Keyword,
    /// `true` or `false`
    BooleanLiteral,
    /// `null`
    NullLiteral,
    /// Single-quoted literal: `'a'`, `'\n'`, `'\101'`
    CharacterLiteral,
    /// Double-quoted literal: `"hello"`
    StringLiteral,
    /// Triple-quoted multi-line literal
    TextBlock {
        /// Spaces/tabs/form feeds between the opening `"""` and the
        /// line terminator
        indent: String,
        /// The line terminator that follows the opening delimiter
        terminator: String,
        /// Raw body, up to but excluding the closing `"""`
        body: String,
    },
    /// Integer literal: `42`, `0x1F`, `0b101`, `0777`, `10L`
    IntegerLiteral { radix: Radix },
    /// Floating-point literal: `3.14`, `1e10`, `0x1p3`, `2f`
    FloatingPointLiteral { radix: Radix },
    /// Punctuation: `( ) { } [ ] ; : , ... @`
    Separator,
    /// Operator: `+`, `>>>=`, `::`, `instanceof`, ...
    Operator,
    /// End of file
    Eof,
}

impl TokenKind {
    /// Returns true for kinds the parser skips over
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::WhiteSpace | TokenKind::Comment)
    }

    /// Returns true if the token is a literal
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::BooleanLiteral
                | TokenKind::NullLiteral
                | TokenKind::CharacterLiteral
                | TokenKind::StringLiteral
                | TokenKind::TextBlock { .. }
                | TokenKind::IntegerLiteral { .. }
                | TokenKind::FloatingPointLiteral { .. }
        )
    }
}

/// The reserved words of the language
///
/// `true`, `false` and `null` are literals rather than keywords, and
/// `instanceof` lexes as an operator; contextual words (`var`, `yield`,
/// `sealed`, `permits`, `record`) stay plain identifiers.
pub fn is_reserved(word: &str) -> bool {
    matches!(
        word,
        "abstract"
            | "assert"
            | "boolean"
            | "break"
            | "byte"
            | "case"
            | "catch"
            | "char"
            | "class"
            | "const"
            | "continue"
            | "default"
            | "do"
            | "double"
            | "else"
            | "enum"
            | "extends"
            | "final"
            | "finally"
            | "float"
            | "for"
            | "goto"
            | "if"
            | "implements"
            | "import"
            | "int"
            | "interface"
            | "long"
            | "native"
            | "new"
            | "package"
            | "private"
            | "protected"
            | "public"
            | "return"
            | "short"
            | "static"
            | "strictfp"
            | "super"
            | "switch"
            | "synchronized"
            | "this"
            | "throw"
            | "throws"
            | "transient"
            | "try"
            | "void"
            | "volatile"
            | "while"
    )
}

/// Classifies a scanned word into its token kind
pub fn classify_word(word: &str) -> TokenKind {
    match word {
        "true" | "false" => TokenKind::BooleanLiteral,
        "null" => TokenKind::NullLiteral,
        "instanceof" => TokenKind::Operator,
        _ if is_reserved(word) => TokenKind::Keyword,
        _ => TokenKind::Identifier,
    }
}

/// Returns true if `ch` may start an identifier
pub fn is_identifier_start(ch: char) -> bool {
    ch == '_' || ch == '$' || UnicodeXID::is_xid_start(ch)
}

/// Returns true if `ch` may continue an identifier
pub fn is_identifier_part(ch: char) -> bool {
    ch == '$' || UnicodeXID::is_xid_continue(ch)
}

/// A classified, positioned unit of lexical text
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token kind
    pub kind: TokenKind,
    /// Raw lexeme as it appeared in the normalized source
    pub text: String,
    /// Where the token began
    pub reference: Reference,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, reference: Reference) -> Self {
        Self {
            kind,
            text: text.into(),
            reference,
        }
    }

    /// Checks if it is end of file
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// True for an identifier with exactly this text
    pub fn is_identifier(&self, text: &str) -> bool {
        self.kind == TokenKind::Identifier && self.text == text
    }

    /// True for an operator with exactly this text
    pub fn is_operator(&self, text: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::WhiteSpace => write!(f, "{:?}", self.text),
            _ => write!(f, "{}", self.text),
        }
    }
}
