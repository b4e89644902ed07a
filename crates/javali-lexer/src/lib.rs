//! javali-lexer - Lexical analysis for the Javali language
//!
//! Turns raw source text into a lossless [`TokenList`]: concatenating
//! the text of every token reproduces the normalized source exactly.
//! Tokenization happens in two passes, a Unicode-escape normalization
//! rewrite followed by a single forward scan driven by a classifier
//! dispatch table.
//!
//! # Example
//!
//! ```rust
//! use javali_lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("int x = 0x1F;").unwrap();
//! let hex = tokens
//!     .iter()
//!     .find(|t| matches!(t.kind, TokenKind::IntegerLiteral { .. }))
//!     .unwrap();
//! assert_eq!(hex.text, "0x1F");
//! ```

pub mod classify;
pub mod lexer;
pub mod list;
pub mod normalize;
mod number;
pub mod stream;
pub mod token;

pub use classify::Terminal;
pub use lexer::{tokenize, Lexer};
pub use list::{TokenList, TokenTest};
pub use normalize::normalize_source;
pub use stream::CharStream;
pub use token::{Radix, Token, TokenKind};
