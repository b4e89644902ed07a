//! Lexer for the Javali language
//!
//! Converts normalized source code into a [`TokenList`]. The main loop
//! peeks one character, asks the classifier for a terminal, and runs
//! that terminal's builder. Tokenization is fail-fast: the first error
//! aborts the file.

use crate::classify::{is_whitespace, Terminal, OPERATORS, SEPARATORS};
use crate::list::{TokenList, TokenTest};
use crate::normalize::normalize_source;
use crate::number;
use crate::stream::CharStream;
use crate::token::{classify_word, is_identifier_part, Token, TokenKind};
use javali_error::{LexError, Reference, ReferenceFactory, Result};

/// Suffix pattern recognizing `non` `-` `sealed`, most recent first
const NON_SEALED: [TokenTest; 3] = [
    |t| t.is_identifier("sealed"),
    |t| t.is_operator("-"),
    |t| t.is_identifier("non"),
];

/// Normalizes Unicode escapes and tokenizes the whole source
pub fn tokenize(source: &str) -> Result<TokenList> {
    let normalized = normalize_source(source)?;
    Lexer::new(&normalized).tokenize()
}

/// The Javali language lexer
pub struct Lexer {
    /// Normalized source characters
    stream: CharStream,
    /// Tokens produced so far
    tokens: TokenList,
    /// Issues the `(line, sequence)` reference of each token
    references: ReferenceFactory,
}

impl Lexer {
    /// Creates a lexer over already-normalized source text
    pub fn new(normalized: &str) -> Self {
        Self {
            stream: CharStream::new(normalized),
            tokens: TokenList::new(),
            references: ReferenceFactory::new(),
        }
    }

    /// Drains the stream into a token list ending in an EOF token
    pub fn tokenize(mut self) -> Result<TokenList> {
        while let Some(ch) = self.stream.refer() {
            let terminal = Terminal::classify(ch, self.stream.line())?;
            let reference = self.references.issue(self.stream.line());
            let token = match terminal {
                Terminal::WhiteSpace => self.scan_whitespace(reference)?,
                Terminal::Slash => self.scan_slash(reference)?,
                Terminal::Word => self.scan_word(reference)?,
                Terminal::Digit => number::scan(&mut self.stream, reference, "")?,
                Terminal::Zero => self.scan_zero(reference)?,
                Terminal::Period => self.scan_period(reference)?,
                Terminal::Colon => self.scan_colon(reference)?,
                Terminal::SingleQuote => self.scan_character(reference)?,
                Terminal::DoubleQuote => self.scan_string(reference)?,
                Terminal::Separator => {
                    self.scan_vocabulary(reference, &SEPARATORS, TokenKind::Separator)?
                }
                Terminal::Operator => {
                    self.scan_vocabulary(reference, &OPERATORS, TokenKind::Operator)?
                }
            };
            self.push(token)?;
        }

        let reference = self.references.issue(self.stream.line());
        self.tokens.add(Token::new(TokenKind::Eof, "", reference));
        self.tokens.reset();
        Ok(self.tokens)
    }

    /// Appends a token and applies contextual merges
    fn push(&mut self, token: Token) -> Result<()> {
        self.tokens.add(token);
        self.merge_contextual()
    }

    /// Collapses `non` `-` `sealed` into the single identifier `non-sealed`
    ///
    /// The pattern only fires on strictly adjacent tokens; any whitespace
    /// or comment token in between breaks it. The merged token takes the
    /// position of the first token it replaces, so the three issued
    /// references are rolled back and one is re-issued.
    fn merge_contextual(&mut self) -> Result<()> {
        if !self.tokens.apply_tests(&NON_SEALED) {
            return Ok(());
        }
        let Some(reference) = self.tokens.current_reference() else {
            return Ok(());
        };
        self.tokens.remove(3);
        self.references.rollback(3)?;
        let merged = self.references.issue(reference.line);
        self.tokens
            .add(Token::new(TokenKind::Identifier, "non-sealed", merged));
        Ok(())
    }

    /// Maximal run of whitespace characters, line terminators included
    fn scan_whitespace(&mut self, reference: Reference) -> Result<Token> {
        let text = self.stream.read_forward_while(is_whitespace);
        Ok(Token::new(TokenKind::WhiteSpace, text, reference))
    }

    /// `//`, `/*` or the division operators
    fn scan_slash(&mut self, reference: Reference) -> Result<Token> {
        match self.stream.refer_ahead(1) {
            Some('/') => self.scan_line_comment(reference),
            Some('*') => self.scan_block_comment(reference),
            _ => self.scan_vocabulary(reference, &OPERATORS, TokenKind::Operator),
        }
    }

    /// Line comment, up to but excluding the line terminator
    fn scan_line_comment(&mut self, reference: Reference) -> Result<Token> {
        let mut text = self.stream.read_forward(2);
        text.push_str(&self.stream.read_forward_while(|c| c != '\n' && c != '\r'));
        Ok(Token::new(TokenKind::Comment, text, reference))
    }

    /// Block comment, including the closing `*/`
    fn scan_block_comment(&mut self, reference: Reference) -> Result<Token> {
        let mut text = self.stream.read_forward(2);
        // prev starts outside the opener so `/*/` cannot self-close
        let mut prev = '\0';
        loop {
            let ch = self.stream.get()?;
            text.push(ch);
            if prev == '*' && ch == '/' {
                break;
            }
            prev = ch;
        }
        Ok(Token::new(TokenKind::Comment, text, reference))
    }

    /// Identifier, keyword, word operator or word literal
    fn scan_word(&mut self, reference: Reference) -> Result<Token> {
        let text = self.stream.read_forward_while(is_identifier_part);
        Ok(Token::new(classify_word(&text), text, reference))
    }

    /// `0` opens a base prefix or a bare-zero decimal/octal literal
    fn scan_zero(&mut self, reference: Reference) -> Result<Token> {
        self.stream.get()?;
        let prefix = match self.stream.refer() {
            Some(marker @ ('x' | 'X' | 'b' | 'B')) => {
                self.stream.get()?;
                format!("0{marker}")
            }
            _ => "0".to_string(),
        };
        number::scan(&mut self.stream, reference, &prefix)
    }

    /// `.` is a fraction-first float, the `...` separator, or the member
    /// access operator; `..` lexes as two consecutive operators
    fn scan_period(&mut self, reference: Reference) -> Result<Token> {
        match self.stream.refer_ahead(1) {
            Some(c) if c.is_ascii_digit() => {
                self.stream.get()?;
                number::scan(&mut self.stream, reference, ".")
            }
            Some('.') if self.stream.refer_ahead(2) == Some('.') => {
                let text = self.stream.read_forward(3);
                Ok(Token::new(TokenKind::Separator, text, reference))
            }
            _ => {
                self.stream.get()?;
                Ok(Token::new(TokenKind::Operator, ".", reference))
            }
        }
    }

    /// `::` is the method-reference operator; a lone `:` is a separator
    fn scan_colon(&mut self, reference: Reference) -> Result<Token> {
        if self.stream.refer_ahead(1) == Some(':') {
            let text = self.stream.read_forward(2);
            Ok(Token::new(TokenKind::Operator, text, reference))
        } else {
            self.stream.get()?;
            Ok(Token::new(TokenKind::Separator, ":", reference))
        }
    }

    /// Character literal: exactly one character or escape between quotes
    ///
    /// A raw line terminator, an unescaped `'`, or more than one logical
    /// character is `InvalidCharacterLiteral`; running out of input mid
    /// literal surfaces as `BufferExhausted`.
    fn scan_character(&mut self, reference: Reference) -> Result<Token> {
        let line = reference.line;
        let mut text = String::new();
        text.push(self.stream.get()?);

        match self.stream.refer() {
            Some('\'') | Some('\n') | Some('\r') => {
                return Err(LexError::InvalidCharacterLiteral { line })
            }
            Some('\\') => text.push_str(&self.scan_escape(line)?),
            _ => text.push(self.stream.get()?),
        }

        match self.stream.get()? {
            '\'' => {
                text.push('\'');
                Ok(Token::new(TokenKind::CharacterLiteral, text, reference))
            }
            _ => Err(LexError::InvalidCharacterLiteral { line }),
        }
    }

    /// Dispatches `"` to a plain string or a text block
    ///
    /// Only a third quote opens a text block, so `""` is always the
    /// empty string literal.
    fn scan_string(&mut self, reference: Reference) -> Result<Token> {
        if self.stream.refer_ahead(1) == Some('"') && self.stream.refer_ahead(2) == Some('"') {
            return self.scan_text_block(reference);
        }

        let line = reference.line;
        let mut text = String::new();
        text.push(self.stream.get()?);
        loop {
            match self.stream.refer() {
                None => return Err(LexError::UnterminatedStringOrTextBlock { line }),
                Some('"') => {
                    text.push(self.stream.get()?);
                    break;
                }
                Some('\n') | Some('\r') => {
                    return Err(LexError::UnterminatedStringOrTextBlock { line })
                }
                Some('\\') => text.push_str(&self.scan_escape(line)?),
                Some(_) => text.push(self.stream.get()?),
            }
        }
        Ok(Token::new(TokenKind::StringLiteral, text, reference))
    }

    /// Text block: `"""`, optional indent, a mandatory line terminator,
    /// then a body closed by the first unescaped `"""`
    fn scan_text_block(&mut self, reference: Reference) -> Result<Token> {
        let line = reference.line;
        let opener = self.stream.read_forward(3);
        let indent = self
            .stream
            .read_forward_while(|c| matches!(c, ' ' | '\t' | '\u{0c}'));
        let terminator = match self.stream.refer() {
            Some('\r') if self.stream.refer_ahead(1) == Some('\n') => self.stream.read_forward(2),
            Some('\n') | Some('\r') => self.stream.read_forward(1),
            _ => return Err(LexError::InvalidTextBlock { line }),
        };

        // pending holds up to three consecutive raw quotes; anything else
        // flushes it into the body. Escapes flush too, so an escaped
        // quote can never take part in the closing delimiter.
        let mut body = String::new();
        let mut pending = String::new();
        loop {
            match self.stream.refer() {
                None => return Err(LexError::UnterminatedStringOrTextBlock { line }),
                Some('"') => {
                    pending.push(self.stream.get()?);
                    if pending.len() == 3 {
                        break;
                    }
                }
                Some('\\') => {
                    body.push_str(&pending);
                    pending.clear();
                    body.push_str(&self.scan_escape(line)?);
                }
                Some(_) => {
                    body.push_str(&pending);
                    pending.clear();
                    body.push(self.stream.get()?);
                }
            }
        }

        let mut text = opener;
        text.push_str(&indent);
        text.push_str(&terminator);
        text.push_str(&body);
        text.push_str(&pending);
        Ok(Token::new(
            TokenKind::TextBlock {
                indent,
                terminator,
                body,
            },
            text,
            reference,
        ))
    }

    /// Consumes and returns one raw escape sequence, backslash included
    ///
    /// Unicode escapes no longer exist at this stage; the normalization
    /// pre-pass rewrote them. A backslash may also escape the line
    /// terminator itself (line continuation).
    fn scan_escape(&mut self, line: u32) -> Result<String> {
        let mut text = String::new();
        text.push(self.stream.get()?);
        let marker = self.stream.get()?;
        match marker {
            'b' | 't' | 'n' | 'f' | 'r' | 's' | '"' | '\'' | '\\' | '\n' => text.push(marker),
            '0'..='7' => {
                text.push(marker);
                // up to \377: a first digit above 3 takes one more digit
                let extra = if ('0'..='3').contains(&marker) { 2 } else { 1 };
                for _ in 0..extra {
                    match self.stream.refer() {
                        Some(digit @ '0'..='7') => {
                            text.push(digit);
                            self.stream.get()?;
                        }
                        _ => break,
                    }
                }
            }
            '\r' => {
                text.push(marker);
                if self.stream.refer() == Some('\n') {
                    text.push(self.stream.get()?);
                }
            }
            _ => return Err(LexError::InvalidEscapeSequence { ch: marker, line }),
        }
        Ok(text)
    }

    /// Greedy longest-match scan over a closed vocabulary
    ///
    /// Every proper prefix of a vocabulary member is itself a member, so
    /// extending while the candidate prefixes some member always ends on
    /// a member.
    fn scan_vocabulary(
        &mut self,
        reference: Reference,
        vocabulary: &[&str],
        kind: TokenKind,
    ) -> Result<Token> {
        let line = reference.line;
        let first = self.stream.get()?;
        let mut text = String::from(first);
        while let Some(next) = self.stream.refer() {
            let mut candidate = text.clone();
            candidate.push(next);
            if !vocabulary
                .iter()
                .any(|member| member.starts_with(candidate.as_str()))
            {
                break;
            }
            text.push(self.stream.get()?);
        }
        if vocabulary.contains(&text.as_str()) {
            Ok(Token::new(kind, text, reference))
        } else {
            Err(LexError::IllegalCharacter { ch: first, line })
        }
    }
}
