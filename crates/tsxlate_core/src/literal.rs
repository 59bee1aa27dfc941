//! String literal values.

/// Returns the value of a quoted string literal.
///
/// Strips the surrounding quotes (`"`, `'` or a backtick) and resolves
/// escape sequences. Unknown escapes keep the escaped character, and
/// malformed numeric escapes are kept as written.
///
/// ```rust
/// use tsxlate_core::string_value;
///
/// assert_eq!(string_value(r#""./foo""#), "./foo");
/// assert_eq!(string_value(r"'a\tb'"), "a\tb");
/// ```
pub fn string_value(raw: &str) -> String {
    let inner = strip_quotes(raw);
    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        let Some(escaped) = chars.next() else {
            value.push('\\');
            break;
        };
        match escaped {
            'n' => value.push('\n'),
            't' => value.push('\t'),
            'r' => value.push('\r'),
            'b' => value.push('\u{8}'),
            'f' => value.push('\u{c}'),
            'v' => value.push('\u{b}'),
            '0' if !chars.peek().is_some_and(char::is_ascii_digit) => value.push('\0'),
            // Line continuation
            '\n' | '\u{2028}' | '\u{2029}' => {}
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            'x' => {
                let digits: String = chars.clone().take(2).collect();
                match parse_hex(&digits, 2) {
                    Some(code) => {
                        chars.nth(1);
                        push_code_unit(&mut value, code, &mut chars);
                    }
                    None => value.push('x'),
                }
            }
            'u' => match read_unicode_escape(&mut chars) {
                Some(code) => push_code_unit(&mut value, code, &mut chars),
                None => value.push('u'),
            },
            other => value.push(other),
        }
    }

    value
}

fn strip_quotes(raw: &str) -> &str {
    let mut chars = raw.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open), Some(close)) if open == close && matches!(open, '"' | '\'' | '`') => {
            &raw[1..raw.len() - 1]
        }
        _ => raw,
    }
}

fn parse_hex(digits: &str, len: usize) -> Option<u32> {
    if digits.len() != len || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

type Chars<'s> = std::iter::Peekable<std::str::Chars<'s>>;

/// Reads the part of a `\u` escape after the `u`: `XXXX` or `{X...}`.
fn read_unicode_escape(chars: &mut Chars<'_>) -> Option<u32> {
    if chars.peek() == Some(&'{') {
        let lookahead = chars.clone().skip(1);
        let digits: String = lookahead.take_while(|c| *c != '}').collect();
        let closed = chars.clone().nth(digits.len() + 1) == Some('}');
        if !closed || digits.is_empty() || digits.len() > 6 {
            return None;
        }
        let code = parse_hex(&digits, digits.len())?;
        // `{`, the digits and `}`
        chars.nth(digits.len() + 1);
        return Some(code);
    }

    let digits: String = chars.clone().take(4).collect();
    let code = parse_hex(&digits, 4)?;
    chars.nth(3);
    Some(code)
}

/// Pushes a UTF-16 code unit or code point, joining surrogate pairs written
/// as two consecutive `\uXXXX` escapes.
fn push_code_unit(value: &mut String, code: u32, chars: &mut Chars<'_>) {
    if (0xD800..0xDC00).contains(&code) {
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            let low: String = lookahead.take(4).collect();
            if let Some(low) = parse_hex(&low, 4).filter(|c| (0xDC00..0xE000).contains(c)) {
                chars.nth(5);
                let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                value.push(char::from_u32(combined).unwrap_or(char::REPLACEMENT_CHARACTER));
                return;
            }
        }
    }
    value.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
}
