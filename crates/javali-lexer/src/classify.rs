//! Terminal classifier dispatch table
//!
//! A closed sum type over classifier kinds. The main loop peeks one
//! character, finds the first (and by construction only) terminal whose
//! predicate matches, and runs that terminal's builder. Mutual
//! exclusivity of the predicates is an invariant checked in tests.

use crate::token::is_identifier_start;
use javali_error::{LexError, Result};

/// One classifier kind per token-start character class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    /// Spaces, tabs, form feeds and line terminators
    WhiteSpace,
    /// `/` - comment or division operator
    Slash,
    /// Identifier-start character
    Word,
    /// Digits 1-9
    Digit,
    /// `0` - may open a hexadecimal or binary prefix
    Zero,
    /// `.` - fraction, ellipsis or lone operator
    Period,
    /// `:` - method reference operator or separator
    Colon,
    /// `'` - character literal
    SingleQuote,
    /// `"` - string literal or text block
    DoubleQuote,
    /// Unambiguous separator-introducer characters
    Separator,
    /// Operator-introducer characters
    Operator,
}

impl Terminal {
    /// All terminals, in dispatch order
    pub const ALL: [Terminal; 11] = [
        Terminal::WhiteSpace,
        Terminal::Slash,
        Terminal::Word,
        Terminal::Digit,
        Terminal::Zero,
        Terminal::Period,
        Terminal::Colon,
        Terminal::SingleQuote,
        Terminal::DoubleQuote,
        Terminal::Separator,
        Terminal::Operator,
    ];

    /// The predicate guarding this terminal
    pub fn matches(self, ch: char) -> bool {
        match self {
            Terminal::WhiteSpace => is_whitespace(ch),
            Terminal::Slash => ch == '/',
            Terminal::Word => is_identifier_start(ch),
            Terminal::Digit => ('1'..='9').contains(&ch),
            Terminal::Zero => ch == '0',
            Terminal::Period => ch == '.',
            Terminal::Colon => ch == ':',
            Terminal::SingleQuote => ch == '\'',
            Terminal::DoubleQuote => ch == '"',
            Terminal::Separator => is_separator_start(ch),
            Terminal::Operator => is_operator_start(ch),
        }
    }

    /// Selects the terminal for the next character
    pub fn classify(ch: char, line: u32) -> Result<Terminal> {
        Terminal::ALL
            .iter()
            .copied()
            .find(|terminal| terminal.matches(ch))
            .ok_or(LexError::IllegalCharacter { ch, line })
    }
}

/// Whitespace and line-terminator characters
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\u{0c}' | '\n' | '\r')
}

/// Separators whose first character belongs to no other classifier
pub fn is_separator_start(ch: char) -> bool {
    matches!(ch, '(' | ')' | '{' | '}' | '[' | ']' | ';' | ',' | '@')
}

/// Operators whose first character belongs to no other classifier
pub fn is_operator_start(ch: char) -> bool {
    matches!(
        ch,
        '=' | '>' | '<' | '!' | '~' | '?' | '&' | '|' | '+' | '-' | '*' | '^' | '%'
    )
}

/// Separator vocabulary (closed set)
pub const SEPARATORS: [&str; 13] = [
    "(", ")", "{", "}", "[", "]", ";", ":", ",", ".", "...", "@", "::",
];

/// Operator vocabulary (closed set), excluding the word operator
/// `instanceof`. Colon and period forms appear for completeness but are
/// reached through their dedicated classifiers.
pub const OPERATORS: [&str; 38] = [
    "=", "==", "+", "+=", ">", ">=", "-", "-=", "<", "<=", "*", "*=", "!", "!=", "/", "/=", "~",
    "&&", "&", "&=", "?", "||", "|", "|=", ":", "++", "^", "^=", "->", "--", "%", "%=", "<<",
    "<<=", ">>", ">>=", ">>>", ">>>=",
];
