//! javali-error - Diagnostics system for the Javali language
//!
//! This crate provides the lexer error family, the `Reference` position
//! type stamped on tokens, and a renderer that reports failures in the
//! Rust compiler style.
//!
//! # Example
//!
//! ```rust
//! use javali_error::{Diagnostic, DiagnosticRenderer, LexError, SourceFile};
//!
//! let file = SourceFile::new("example.jv", "int x = 1_;");
//! let error = LexError::InvalidDigitSeparator {
//!     run: "1_".to_string(),
//!     line: 1,
//! };
//!
//! let renderer = DiagnosticRenderer::new(&file).without_colors();
//! println!("{}", renderer.render(&Diagnostic::from_lex_error(&error)));
//! ```

pub mod diagnostic;
pub mod error;
pub mod reference;

pub use diagnostic::{Diagnostic, DiagnosticRenderer, ErrorCode, Label, Level, SourceFile};
pub use error::LexError;
pub use reference::{Reference, ReferenceFactory};

/// Default Result type for operations that may fail during tokenization
pub type Result<T> = std::result::Result<T, LexError>;
