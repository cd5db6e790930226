//! Decoding of C# string literal tokens into their runtime values.

/// Decode a regular string literal (`"..."`), resolving escape sequences.
///
/// Escapes denote UTF-16 code units, so a surrogate pair may be spelled as
/// two `\u` escapes (`"\uD83D\uDE00"`). Returns `None` for malformed
/// literals, invalid escapes and unpaired surrogates.
pub fn decode_regular(text: &str) -> Option<String> {
    let body = text.strip_prefix('"')?.strip_suffix('"')?;
    let mut units: Vec<u16> = Vec::with_capacity(body.len());
    let mut buf = [0u16; 2];
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            units.extend_from_slice(c.encode_utf16(&mut buf));
            continue;
        }
        match chars.next()? {
            'x' => {
                // \x takes one to four hex digits
                let mut digits = String::new();
                while digits.len() < 4
                    && let Some(&d) = chars.peek()
                    && d.is_ascii_hexdigit()
                {
                    digits.push(d);
                    chars.next();
                }
                units.push(hex_unit(&digits)?);
            }
            'u' => units.push(hex_unit(&take_exact(&mut chars, 4)?)?),
            'U' => {
                let code = u32::from_str_radix(&take_exact(&mut chars, 8)?, 16).ok()?;
                units.extend_from_slice(char::from_u32(code)?.encode_utf16(&mut buf));
            }
            other => units.extend_from_slice(simple_escape(other)?.encode_utf16(&mut buf)),
        }
    }

    String::from_utf16(&units).ok()
}

fn simple_escape(c: char) -> Option<char> {
    let escaped = match c {
        '\'' => '\'',
        '"' => '"',
        '\\' => '\\',
        '0' => '\0',
        'a' => '\u{07}',
        'b' => '\u{08}',
        'f' => '\u{0C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\u{0B}',
        'e' => '\u{1B}',
        _ => return None,
    };
    Some(escaped)
}

/// Decode a verbatim string literal (`@"..."`), where `""` stands for `"`.
pub fn decode_verbatim(text: &str) -> Option<String> {
    let body = text
        .strip_prefix("@\"")
        .or_else(|| text.strip_prefix("\"@"))?
        .strip_suffix('"')?;
    Some(body.replace("\"\"", "\""))
}

/// Decode a raw string literal (`"""..."""`).
///
/// Multi-line raw literals drop the newline after the opening delimiter and
/// before the closing one, and remove the closing line's indentation from
/// every content line.
pub fn decode_raw(text: &str) -> Option<String> {
    let quotes = text.chars().take_while(|&c| c == '"').count();
    if quotes < 3 || text.len() < quotes * 2 || !text.ends_with(&"\"".repeat(quotes)) {
        return None;
    }
    let inner = &text[quotes..text.len() - quotes];

    if !inner.contains('\n') {
        return Some(inner.to_string());
    }

    let lines: Vec<&str> = inner.split('\n').map(|l| l.trim_end_matches('\r')).collect();
    let (first, rest) = lines.split_first()?;
    let (last, content) = rest.split_last()?;
    if !first.trim().is_empty() || !last.trim().is_empty() {
        return None;
    }

    let indent = *last;
    let mut decoded = Vec::with_capacity(content.len());
    for line in content {
        if line.trim().is_empty() {
            decoded.push("");
        } else {
            decoded.push(line.strip_prefix(indent)?);
        }
    }

    Some(decoded.join("\n"))
}

fn take_exact(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, n: usize) -> Option<String> {
    let digits: String = chars.take(n).collect();
    (digits.len() == n && digits.chars().all(|c| c.is_ascii_hexdigit())).then_some(digits)
}

fn hex_unit(digits: &str) -> Option<u16> {
    if digits.is_empty() {
        return None;
    }
    u16::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_decode_regular_plain() {
        assert_eq!(decode_regular(r#""Hello""#).as_deref(), Some("Hello"));
        assert_eq!(decode_regular(r#""""#).as_deref(), Some(""));
    }

    #[test]
    fn test_decode_regular_escapes() {
        assert_eq!(
            decode_regular(r#""Line 1\nLine 2""#).as_deref(),
            Some("Line 1\nLine 2")
        );
        assert_eq!(
            decode_regular(r#""Say \"hi\"\t\\""#).as_deref(),
            Some("Say \"hi\"\t\\")
        );
        assert_eq!(decode_regular(r#""\u00e9t\u00e9""#).as_deref(), Some("été"));
        assert_eq!(decode_regular(r#""\x41\x0042""#).as_deref(), Some("AB"));
        assert_eq!(decode_regular(r#""\U0001F600""#).as_deref(), Some("😀"));
    }

    #[test]
    fn test_decode_regular_surrogate_pairs() {
        assert_eq!(
            decode_regular(r#""\uD83D\uDE00 Play""#).as_deref(),
            Some("\u{1F600} Play")
        );
        assert_eq!(decode_regular(r#""\xD83D\uDE00""#).as_deref(), Some("\u{1F600}"));
        // a lone surrogate has no string value
        assert_eq!(decode_regular(r#""\uD83D""#), None);
        assert_eq!(decode_regular(r#""\uDE00\uD83D""#), None);
    }

    #[test]
    fn test_decode_regular_rejects_bad_escapes() {
        assert_eq!(decode_regular(r#""\q""#), None);
        assert_eq!(decode_regular(r#""\u12""#), None);
        assert_eq!(decode_regular("unquoted"), None);
    }

    #[test]
    fn test_decode_verbatim() {
        assert_eq!(decode_verbatim(r#"@"C:\saves""#).as_deref(), Some(r"C:\saves"));
        assert_eq!(
            decode_verbatim(r#"@"Say ""hi""""#).as_deref(),
            Some("Say \"hi\"")
        );
        assert_eq!(decode_verbatim("@\"two\nlines\"").as_deref(), Some("two\nlines"));
    }

    #[test]
    fn test_decode_raw_single_line() {
        assert_eq!(
            decode_raw(r#""""He said "hi" loudly""""#).as_deref(),
            Some(r#"He said "hi" loudly"#)
        );
    }

    #[test]
    fn test_decode_raw_multi_line() {
        let text = "\"\"\"\n        First line\n          indented\n        \"\"\"";
        assert_eq!(
            decode_raw(text).as_deref(),
            Some("First line\n  indented")
        );
    }

    #[test]
    fn test_decode_raw_rejects_bad_indentation() {
        let text = "\"\"\"\n  short\n        \"\"\"";
        assert_eq!(decode_raw(text), None);
    }
}
