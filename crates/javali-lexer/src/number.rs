//! Numeric literal parsing
//!
//! The classifier hands over the already-consumed prefix (`0x`, `0b`,
//! a bare `0`, a leading `.`, or nothing for digits 1-9); everything
//! else - digit runs, separators, fraction, exponent, suffix and radix
//! resolution - happens here, driven by a per-base policy selected once
//! from that prefix.

use crate::stream::CharStream;
use crate::token::{Radix, Token, TokenKind};
use javali_error::{LexError, Reference, Result};

/// Digit set, exponent markers and base of one literal family
struct BasePolicy {
    radix: Radix,
    is_digit: fn(char) -> bool,
    /// Lower/upper exponent indicator, if the base has one
    exponent: Option<(char, char)>,
}

impl BasePolicy {
    fn from_prefix(prefix: &str) -> Self {
        match prefix {
            "0x" | "0X" => BasePolicy {
                radix: Radix::Hexadecimal,
                is_digit: |c| c.is_ascii_hexdigit(),
                exponent: Some(('p', 'P')),
            },
            "0b" | "0B" => BasePolicy {
                radix: Radix::Binary,
                is_digit: |c| c == '0' || c == '1',
                exponent: None,
            },
            _ => BasePolicy {
                radix: Radix::Decimal,
                is_digit: |c| c.is_ascii_digit(),
                exponent: Some(('e', 'E')),
            },
        }
    }
}

/// Scans the numeric literal whose prefix the classifier consumed
pub(crate) fn scan(stream: &mut CharStream, reference: Reference, prefix: &str) -> Result<Token> {
    let line = reference.line;
    let policy = BasePolicy::from_prefix(prefix);
    let mut text = String::from(prefix);
    let mut integer = true;

    if prefix == "." {
        // Fraction-first literal; the classifier saw a digit after `.`.
        integer = false;
        text.push_str(&read_digit_run(stream, &policy, line)?);
    } else {
        let run = stream.read_forward_while(|c| (policy.is_digit)(c) || c == '_');
        if matches!(prefix, "0x" | "0X" | "0b" | "0B") && run.is_empty() {
            return Err(LexError::InvalidNumberLiteral { text, line });
        }
        // A bare 0 prefix is itself the first digit of the run, so the
        // separator rule is checked against the prepended text.
        if prefix == "0" {
            validate_digit_run(&format!("0{run}"), line)?;
        } else {
            validate_digit_run(&run, line)?;
        }
        text.push_str(&run);

        if stream.refer() == Some('.') {
            if policy.radix == Radix::Binary {
                return Err(LexError::InvalidNumberLiteral { text, line });
            }
            text.push(stream.get()?);
            integer = false;
            text.push_str(&read_digit_run(stream, &policy, line)?);
        }
    }

    if let Some((lower, upper)) = policy.exponent {
        if stream.refer() == Some(lower) || stream.refer() == Some(upper) {
            text.push(stream.get()?);
            integer = false;
            if matches!(stream.refer(), Some('+') | Some('-')) {
                text.push(stream.get()?);
            }
            // The exponent is always a decimal digit run, even for hex.
            let run = stream.read_forward_while(|c| c.is_ascii_digit() || c == '_');
            validate_digit_run(&run, line)?;
            if run.is_empty() {
                return Err(LexError::InvalidNumberLiteral { text, line });
            }
            text.push_str(&run);
        }
    }

    match stream.refer() {
        Some('f') | Some('F') | Some('d') | Some('D') => {
            if policy.radix == Radix::Binary {
                return Err(LexError::InvalidNumberLiteral { text, line });
            }
            text.push(stream.get()?);
            Ok(Token::new(
                TokenKind::FloatingPointLiteral {
                    radix: policy.radix,
                },
                text,
                reference,
            ))
        }
        Some('l') | Some('L') if integer => {
            text.push(stream.get()?);
            let digit_text = &text[..text.len() - 1];
            let radix = resolve_integer_radix(prefix, digit_text, line)?;
            Ok(Token::new(
                TokenKind::IntegerLiteral { radix },
                text,
                reference,
            ))
        }
        _ if integer => {
            let radix = resolve_integer_radix(prefix, &text, line)?;
            Ok(Token::new(
                TokenKind::IntegerLiteral { radix },
                text,
                reference,
            ))
        }
        _ => Ok(Token::new(
            TokenKind::FloatingPointLiteral {
                radix: policy.radix,
            },
            text,
            reference,
        )),
    }
}

/// Final base of an integer literal
///
/// The prefix forces hexadecimal and binary. An unprefixed literal whose
/// digit text is longer than one character and starts with `0` is octal;
/// a digit outside 0-7 then fails radix resolution.
fn resolve_integer_radix(prefix: &str, digit_text: &str, line: u32) -> Result<Radix> {
    match prefix {
        "0x" | "0X" => Ok(Radix::Hexadecimal),
        "0b" | "0B" => Ok(Radix::Binary),
        _ => {
            if digit_text.len() > 1 && digit_text.starts_with('0') {
                if digit_text.chars().any(|c| c == '8' || c == '9') {
                    return Err(LexError::InvalidNumberLiteral {
                        text: digit_text.to_string(),
                        line,
                    });
                }
                Ok(Radix::Octal)
            } else {
                Ok(Radix::Decimal)
            }
        }
    }
}

/// Reads one digit run in the policy's digit set, with `_` separators
fn read_digit_run(stream: &mut CharStream, policy: &BasePolicy, line: u32) -> Result<String> {
    let run = stream.read_forward_while(|c| (policy.is_digit)(c) || c == '_');
    validate_digit_run(&run, line)?;
    Ok(run)
}

/// Underscores are permitted only strictly between digits
pub(crate) fn validate_digit_run(run: &str, line: u32) -> Result<()> {
    if run.starts_with('_') || run.ends_with('_') {
        return Err(LexError::InvalidDigitSeparator {
            run: run.to_string(),
            line,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Replays the classifier's prefix handling, then scans.
    fn lex_number(source: &str) -> Result<Token> {
        let mut stream = CharStream::new(source);
        let reference = Reference::new(1, 0);
        let prefix = match stream.refer() {
            Some('0') => {
                stream.get()?;
                match stream.refer() {
                    Some(marker @ ('x' | 'X' | 'b' | 'B')) => {
                        stream.get()?;
                        format!("0{marker}")
                    }
                    _ => "0".to_string(),
                }
            }
            Some('.') => {
                stream.get()?;
                ".".to_string()
            }
            _ => String::new(),
        };
        scan(&mut stream, reference, &prefix)
    }

    fn assert_integer(source: &str, radix: Radix) {
        let token = lex_number(source).unwrap();
        assert_eq!(token.kind, TokenKind::IntegerLiteral { radix });
        assert_eq!(token.text, source);
    }

    fn assert_float(source: &str, radix: Radix) {
        let token = lex_number(source).unwrap();
        assert_eq!(token.kind, TokenKind::FloatingPointLiteral { radix });
        assert_eq!(token.text, source);
    }

    #[test]
    fn test_radix_resolution() {
        assert_integer("0x1F", Radix::Hexadecimal);
        assert_integer("0b101", Radix::Binary);
        assert_integer("0777", Radix::Octal);
        assert_integer("0", Radix::Decimal);
        assert_integer("10", Radix::Decimal);
        assert_integer("1_0", Radix::Decimal);
    }

    #[test]
    fn test_integer_suffix() {
        assert_integer("10L", Radix::Decimal);
        assert_integer("0xFFl", Radix::Hexadecimal);
        assert_integer("0777L", Radix::Octal);
    }

    #[test]
    fn test_floats() {
        assert_float("1.0e10", Radix::Decimal);
        assert_float("1.0f", Radix::Decimal);
        assert_float("3.14", Radix::Decimal);
        assert_float("1.", Radix::Decimal);
        assert_float("1e5", Radix::Decimal);
        assert_float("1e+5", Radix::Decimal);
        assert_float("2d", Radix::Decimal);
        assert_float(".5", Radix::Decimal);
        assert_float(".5e-3f", Radix::Decimal);
        assert_float("0x1p3", Radix::Hexadecimal);
    }

    #[test]
    fn test_float_never_takes_long_suffix() {
        // `1.0L` is a float followed by a stray identifier; the scanner
        // must stop before the L.
        let token = lex_number("1.0L").unwrap();
        assert_eq!(token.text, "1.0");
        assert_eq!(
            token.kind,
            TokenKind::FloatingPointLiteral {
                radix: Radix::Decimal
            }
        );
    }

    #[test]
    fn test_digit_separator_errors() {
        assert!(matches!(
            lex_number("10_"),
            Err(LexError::InvalidDigitSeparator { .. })
        ));
        assert!(matches!(
            lex_number("0x_10"),
            Err(LexError::InvalidDigitSeparator { .. })
        ));
        assert!(matches!(
            lex_number("1._5"),
            Err(LexError::InvalidDigitSeparator { .. })
        ));
        // A leading underscore can never reach the scanner from the
        // classifier (it starts an identifier), but the run validator
        // still rejects it.
        assert!(validate_digit_run("_10", 1).is_err());
        assert!(validate_digit_run("10_", 1).is_err());
        assert!(validate_digit_run("1_0", 1).is_ok());
        assert!(validate_digit_run("1__0", 1).is_ok());
    }

    #[test]
    fn test_invalid_number_literals() {
        assert!(matches!(
            lex_number("0b1.0"),
            Err(LexError::InvalidNumberLiteral { .. })
        ));
        // Binary literals are integer-only, so float suffixes fail too.
        assert!(matches!(
            lex_number("0b1f"),
            Err(LexError::InvalidNumberLiteral { .. })
        ));
        assert!(matches!(
            lex_number("0x"),
            Err(LexError::InvalidNumberLiteral { .. })
        ));
        assert!(matches!(
            lex_number("0b"),
            Err(LexError::InvalidNumberLiteral { .. })
        ));
        // Octal reinterpretation with digits 8/9 fails.
        assert!(matches!(
            lex_number("089"),
            Err(LexError::InvalidNumberLiteral { .. })
        ));
        // Exponent marker with no digits.
        assert!(matches!(
            lex_number("1e"),
            Err(LexError::InvalidNumberLiteral { .. })
        ));
    }

    #[test]
    fn test_zero_prefix_run_includes_the_zero() {
        // 0_7 is a valid octal literal: the underscore sits between 0
        // and 7.
        assert_integer("0_7", Radix::Octal);
        assert!(matches!(
            lex_number("0_"),
            Err(LexError::InvalidDigitSeparator { .. })
        ));
    }
}
