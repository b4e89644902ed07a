//! Reference - source position of a token
//!
//! A Reference is the `(line, sequence)` pair stamped on every token when
//! it is created, used to report errors with precision and to rewind the
//! position counter during the contextual-keyword merge.

use crate::error::LexError;
use std::fmt;

/// Identifies where a token began in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reference {
    /// Line (1-indexed)
    pub line: u32,
    /// Position of the token within its line (0-indexed)
    pub sequence: u32,
}

impl Reference {
    pub fn new(line: u32, sequence: u32) -> Self {
        Self { line, sequence }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.sequence)
    }
}

/// Issues references in source order
///
/// The sequence counter restarts at 0 whenever the line advances and
/// otherwise grows by one per issued reference. `rollback` un-issues the
/// last `count` positions so a merged token can reuse the position of the
/// first token it replaced.
#[derive(Debug)]
pub struct ReferenceFactory {
    line: u32,
    next: u32,
}

impl ReferenceFactory {
    pub fn new() -> Self {
        Self { line: 1, next: 0 }
    }

    /// Issues the reference for a token beginning on `line`
    pub fn issue(&mut self, line: u32) -> Reference {
        if line > self.line {
            self.line = line;
            self.next = 0;
        }
        let reference = Reference::new(self.line, self.next);
        self.next += 1;
        reference
    }

    /// Un-issues the last `count` positions on the current line
    pub fn rollback(&mut self, count: u32) -> Result<(), LexError> {
        if count > self.next {
            return Err(LexError::RollbackOverflow {
                requested: count,
                issued: self.next,
            });
        }
        self.next -= count;
        Ok(())
    }
}

impl Default for ReferenceFactory {
    fn default() -> Self {
        Self::new()
    }
}
