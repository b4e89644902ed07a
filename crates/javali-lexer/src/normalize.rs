//! Unicode escape pre-pass
//!
//! Rewrites `\u`-hex4 escape sequences into literal characters in a
//! single forward pass over the raw file, before any tokenization. An
//! even run of backslashes leaves a following `u` untouched, and the
//! `u` may be repeated (`\uuu0041` decodes like `A`).

use javali_error::{LexError, Result};

#[derive(PartialEq)]
enum State {
    Default,
    BackSlash,
}

/// Rewrites all Unicode escapes in `input` into literal characters
pub fn normalize_source(input: &str) -> Result<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());

    let mut i = 0;
    let mut line = 1u32;
    let mut bscount = 0u32;
    let mut state = State::Default;

    while i < chars.len() {
        let c = chars[i];

        if c == '\\' {
            bscount += 1;
            state = State::BackSlash;
            out.push(c);
            i += 1;
            continue;
        }

        if c == 'u' && state == State::BackSlash && bscount % 2 == 1 {
            // The escape's backslash was already emitted; take it back.
            out.pop();
            i += 1;
            while chars.get(i) == Some(&'u') {
                i += 1;
            }
            out.push(decode_hex4(&chars, i, line)?);
            i += 4;
        } else {
            if c == '\n' || (c == '\r' && chars.get(i + 1) != Some(&'\n')) {
                line += 1;
            }
            out.push(c);
            i += 1;
        }

        bscount = 0;
        state = State::Default;
    }

    Ok(out)
}

/// Decodes exactly 4 hexadecimal digits starting at `chars[at]`
fn decode_hex4(chars: &[char], at: usize, line: u32) -> Result<char> {
    if at + 4 > chars.len() {
        return Err(LexError::InvalidUnicodeEscape { line });
    }
    let span: String = chars[at..at + 4].iter().collect();
    if !span.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(LexError::InvalidUnicodeEscape { line });
    }
    let code_point =
        u32::from_str_radix(&span, 16).map_err(|_| LexError::InvalidUnicodeEscape { line })?;
    char::from_u32(code_point).ok_or(LexError::InvalidUnicodeEscape { line })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(normalize_source("class A {}").unwrap(), "class A {}");
    }

    // Escapes are spelled via format! so the backslash count is explicit.
    fn escaped(backslashes: usize, tail: &str) -> String {
        format!("{}{}", "\\".repeat(backslashes), tail)
    }

    #[test]
    fn test_simple_escape() {
        assert_eq!(normalize_source(&escaped(1, "u0041")).unwrap(), "A");
        let source = format!("int x = {};", escaped(1, "u0031"));
        assert_eq!(normalize_source(&source).unwrap(), "int x = 1;");
    }

    #[test]
    fn test_repeated_u_markers() {
        assert_eq!(normalize_source(r"\uuu0041").unwrap(), "A");
    }

    #[test]
    fn test_even_backslash_run_is_not_an_escape() {
        // The first backslash escapes the second; 'u0041' is literal text.
        let even = escaped(2, "u0041");
        assert_eq!(normalize_source(&even).unwrap(), even);
        // Three backslashes: the third starts an escape.
        let odd = escaped(3, "u0041");
        assert_eq!(normalize_source(&odd).unwrap(), format!("{}A", "\\".repeat(2)));
    }

    #[test]
    fn test_truncated_escape() {
        assert!(matches!(
            normalize_source(r"\u00"),
            Err(LexError::InvalidUnicodeEscape { line: 1 })
        ));
    }

    #[test]
    fn test_non_hex_digits() {
        assert!(matches!(
            normalize_source(r"\u00zz"),
            Err(LexError::InvalidUnicodeEscape { line: 1 })
        ));
        // from_str_radix would accept a sign here; the normalizer must not.
        assert!(matches!(
            normalize_source(r"\u+123"),
            Err(LexError::InvalidUnicodeEscape { line: 1 })
        ));
    }

    #[test]
    fn test_surrogate_code_point_rejected() {
        assert!(matches!(
            normalize_source(r"\ud800"),
            Err(LexError::InvalidUnicodeEscape { line: 1 })
        ));
    }

    #[test]
    fn test_error_line_is_tracked() {
        let err = normalize_source("a\nb\n\\uXYZW").unwrap_err();
        assert_eq!(err, LexError::InvalidUnicodeEscape { line: 3 });
    }

    #[test]
    fn test_non_unicode_escapes_pass_through() {
        assert_eq!(normalize_source(r"\n").unwrap(), r"\n");
    }

    #[test]
    fn test_decoded_backslash_is_not_rescanned() {
        // u005C decodes to a backslash; the decoded character must not
        // start a new escape in the same pass.
        let input = format!("{}u0041", escaped(1, "u005C"));
        assert_eq!(normalize_source(&input).unwrap(), escaped(1, "u0041"));
    }
}
