//! CharStream - cursor-addressable view over normalized source text
//!
//! One stream is created per file, after Unicode-escape normalization,
//! and is drained by the classifier loop. Reads are windowed in both
//! directions: forward reads consume, backward reads never move the
//! cursor (they exist for diagnostics).

use javali_error::{LexError, Result};

/// The character buffer the lexer reads from
pub struct CharStream {
    /// Source characters
    chars: Vec<char>,
    /// Current position (index in chars vector)
    pos: usize,
    /// Current line (1-indexed)
    line: u32,
}

impl CharStream {
    /// Creates a stream over already-normalized source text
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    /// True unless the cursor is at the end of the buffer
    pub fn has_next(&self) -> bool {
        self.pos < self.chars.len()
    }

    /// Current 1-based line number
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the character at the cursor without advancing
    pub fn refer(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Returns the character `offset` positions ahead of the cursor
    pub fn refer_ahead(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    /// Advances past the next character, counting line breaks
    ///
    /// A CRLF pair counts as a single break: `\r` only increments the
    /// line when it is not immediately followed by `\n`.
    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        if ch == '\n' || (ch == '\r' && self.refer() != Some('\n')) {
            self.line += 1;
        }
        Some(ch)
    }

    /// Returns the character at the cursor and advances past it
    pub fn get(&mut self) -> Result<char> {
        let line = self.line;
        self.advance().ok_or(LexError::BufferExhausted { line })
    }

    /// Consumes up to `n` characters (fewer if the stream ends first)
    pub fn read_forward(&mut self, n: usize) -> String {
        let mut out = String::new();
        for _ in 0..n {
            match self.advance() {
                Some(ch) => out.push(ch),
                None => break,
            }
        }
        out
    }

    /// Consumes characters while the predicate holds for the next one
    pub fn read_forward_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let mut out = String::new();
        while let Some(ch) = self.refer() {
            if !predicate(ch) {
                break;
            }
            out.push(ch);
            self.advance();
        }
        out
    }

    /// Consumes characters belonging to the union of the given sets
    pub fn read_forward_in(&mut self, sets: &[&[char]]) -> String {
        self.read_forward_while(|ch| sets.iter().any(|set| set.contains(&ch)))
    }

    /// Returns up to `n` characters before the cursor, in source order,
    /// without moving the cursor
    pub fn read_back(&self, n: usize) -> String {
        let start = self.pos.saturating_sub(n);
        self.chars[start..self.pos].iter().collect()
    }

    /// Returns the run of characters before the cursor that satisfy the
    /// predicate, in source order, without moving the cursor
    pub fn read_back_while(&self, predicate: impl Fn(char) -> bool) -> String {
        let mut start = self.pos;
        while start > 0 && predicate(self.chars[start - 1]) {
            start -= 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    /// Backward counterpart of [`CharStream::read_forward_in`]
    pub fn read_back_in(&self, sets: &[&[char]]) -> String {
        self.read_back_while(|ch| sets.iter().any(|set| set.contains(&ch)))
    }

    /// Rewinds the cursor to the start and the line counter to 1
    pub fn reset(&mut self) {
        self.pos = 0;
        self.line = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_get_and_refer() {
        let mut stream = CharStream::new("ab");
        assert_eq!(stream.refer(), Some('a'));
        assert_eq!(stream.get().unwrap(), 'a');
        assert_eq!(stream.get().unwrap(), 'b');
        assert!(!stream.has_next());
        assert_eq!(stream.refer(), None);
    }

    #[test]
    fn test_get_past_end_fails() {
        let mut stream = CharStream::new("");
        assert!(matches!(
            stream.get(),
            Err(LexError::BufferExhausted { line: 1 })
        ));
    }

    #[test]
    fn test_line_counting_lf() {
        let mut stream = CharStream::new("a\nb");
        stream.get().unwrap();
        assert_eq!(stream.line(), 1);
        stream.get().unwrap();
        assert_eq!(stream.line(), 2);
    }

    #[test]
    fn test_line_counting_crlf_counts_once() {
        let mut stream = CharStream::new("a\r\nb");
        stream.get().unwrap(); // a
        stream.get().unwrap(); // \r - followed by \n, no increment
        assert_eq!(stream.line(), 1);
        stream.get().unwrap(); // \n
        assert_eq!(stream.line(), 2);
    }

    #[test]
    fn test_line_counting_lone_cr() {
        let mut stream = CharStream::new("a\rb");
        stream.get().unwrap();
        stream.get().unwrap();
        assert_eq!(stream.line(), 2);
    }

    #[test]
    fn test_read_forward_windowed() {
        let mut stream = CharStream::new("hello");
        assert_eq!(stream.read_forward(3), "hel");
        assert_eq!(stream.read_forward(10), "lo");
    }

    #[test]
    fn test_read_forward_while() {
        let mut stream = CharStream::new("123abc");
        assert_eq!(stream.read_forward_while(|c| c.is_ascii_digit()), "123");
        assert_eq!(stream.refer(), Some('a'));
    }

    #[test]
    fn test_read_forward_in_sets() {
        let mut stream = CharStream::new("aabba!");
        assert_eq!(stream.read_forward_in(&[&['a'], &['b']]), "aabba");
        assert_eq!(stream.refer(), Some('!'));
    }

    #[test]
    fn test_read_back_does_not_move_cursor() {
        let mut stream = CharStream::new("abcdef");
        stream.read_forward(4);
        assert_eq!(stream.read_back(2), "cd");
        assert_eq!(stream.read_back(10), "abcd");
        assert_eq!(stream.refer(), Some('e'));
    }

    #[test]
    fn test_read_back_while() {
        let mut stream = CharStream::new("ab12cd");
        stream.read_forward(4);
        assert_eq!(stream.read_back_while(|c| c.is_ascii_digit()), "12");
        assert_eq!(stream.refer(), Some('c'));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut stream = CharStream::new("x\ny");
        let first: String = std::iter::from_fn(|| stream.get().ok()).collect();
        stream.reset();
        assert_eq!(stream.line(), 1);
        let second: String = std::iter::from_fn(|| stream.get().ok()).collect();
        assert_eq!(first, second);
    }
}
