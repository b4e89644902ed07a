//! TokenList - ordered, replayable sequence of tokens
//!
//! Appending and suffix tests exist for the lexer's contextual merge;
//! the read cursor exists for the parser, which iterates forward after
//! a `reset()`.

use crate::token::Token;
use javali_error::Reference;

/// A predicate over one token, used by [`TokenList::apply_tests`]
pub type TokenTest = fn(&Token) -> bool;

/// The token sequence produced by one tokenization run
#[derive(Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
    cursor: usize,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a token
    pub fn add(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Drops the last `count` tokens
    pub fn remove(&mut self, count: usize) {
        let keep = self.tokens.len().saturating_sub(count);
        self.tokens.truncate(keep);
    }

    /// True iff the last N tokens, read most-recent-first, each satisfy
    /// the corresponding predicate; false when fewer than N tokens exist
    pub fn apply_tests(&self, tests: &[TokenTest]) -> bool {
        if tests.len() > self.tokens.len() {
            return false;
        }
        tests
            .iter()
            .enumerate()
            .all(|(i, test)| test(&self.tokens[self.tokens.len() - 1 - i]))
    }

    /// Rewinds the read cursor to the start without altering contents
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Returns the next token and advances the read cursor
    pub fn next(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(token)
    }

    /// Reference of the most recently added token
    pub fn current_reference(&self) -> Option<Reference> {
        self.tokens.last().map(|t| t.reference)
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }
}

impl IntoIterator for TokenList {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn token(kind: TokenKind, text: &str) -> Token {
        Token::new(kind, text, Reference::new(1, 0))
    }

    #[test]
    fn test_add_and_remove() {
        let mut list = TokenList::new();
        list.add(token(TokenKind::Identifier, "a"));
        list.add(token(TokenKind::Operator, "+"));
        list.add(token(TokenKind::Identifier, "b"));
        assert_eq!(list.len(), 3);

        list.remove(2);
        assert_eq!(list.len(), 1);
        assert_eq!(list.last().map(|t| t.text.as_str()), Some("a"));
    }

    #[test]
    fn test_apply_tests_most_recent_first() {
        let mut list = TokenList::new();
        list.add(token(TokenKind::Identifier, "non"));
        list.add(token(TokenKind::Operator, "-"));
        list.add(token(TokenKind::Identifier, "sealed"));

        assert!(list.apply_tests(&[
            |t| t.is_identifier("sealed"),
            |t| t.is_operator("-"),
            |t| t.is_identifier("non"),
        ]));
        assert!(!list.apply_tests(&[
            |t| t.is_identifier("sealed"),
            |t| t.is_operator("-"),
            |t| t.is_identifier("x"),
        ]));
    }

    #[test]
    fn test_apply_tests_on_short_list() {
        let mut list = TokenList::new();
        list.add(token(TokenKind::Identifier, "sealed"));
        assert!(!list.apply_tests(&[
            |t| t.is_identifier("sealed"),
            |t| t.is_operator("-"),
            |t| t.is_identifier("non"),
        ]));
    }

    #[test]
    fn test_reset_replays_identically() {
        let mut list = TokenList::new();
        list.add(token(TokenKind::Identifier, "a"));
        list.add(token(TokenKind::Eof, ""));

        let first: Vec<String> =
            std::iter::from_fn(|| list.next().map(|t| t.text.clone())).collect();
        list.reset();
        let second: Vec<String> =
            std::iter::from_fn(|| list.next().map(|t| t.text.clone())).collect();
        assert_eq!(first, second);
    }
}
