//! Integration tests for the Javali language lexer
//!
//! This crate exercises the complete pipeline end to end:
//! Source → Normalization → CharStream → Classifier → TokenList

use javali_error::LexError;
use javali_lexer::{tokenize, Token, TokenKind, TokenList};

/// Tokenizes and panics with the rendered error on failure
pub fn lex(source: &str) -> TokenList {
    match tokenize(source) {
        Ok(tokens) => tokens,
        Err(error) => panic!("expected source to tokenize, but got: {}", error),
    }
}

/// Asserts tokenization fails, returning the error for inspection
pub fn lex_error(source: &str) -> LexError {
    match tokenize(source) {
        Ok(tokens) => panic!(
            "expected tokenization to fail, but got {} tokens",
            tokens.len()
        ),
        Err(error) => error,
    }
}

/// Concatenates every token's raw text
pub fn rebuild(tokens: &TokenList) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

/// The non-trivia tokens, EOF excluded
pub fn significant(tokens: &TokenList) -> Vec<Token> {
    tokens
        .iter()
        .filter(|t| !t.kind.is_trivia() && !t.is_eof())
        .cloned()
        .collect()
}

/// Asserts the significant token texts, in order
pub fn assert_texts(source: &str, expected: &[&str]) {
    let tokens = lex(source);
    let texts: Vec<String> = significant(&tokens)
        .iter()
        .map(|t| t.text.clone())
        .collect();
    assert_eq!(texts, expected, "token texts for {:?}", source);
}
