//! Token scanners for the inline markers of a todo body.
//!
//! All character classes here are ASCII, so every boundary the scanners
//! report falls on a UTF-8 character boundary of the input.

use std::ops::Range;

use crate::model::todo::Attribute;

/// `[A-Za-z0-9_]`
pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Characters allowed in an attribute value: word characters and `-`
pub fn is_value_byte(b: u8) -> bool {
    is_word_byte(b) || b == b'-'
}

/// True if `s` is a non-empty run of word characters
pub fn is_word(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(is_word_byte)
}

/// True if `s` could be the value half of an attribute token
pub fn is_attribute_value(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(is_value_byte)
}

/// End of the run of bytes satisfying `pred` that starts at `start`
fn run_end(bytes: &[u8], start: usize, pred: impl Fn(u8) -> bool) -> usize {
    let mut end = start;
    while end < bytes.len() && pred(bytes[end]) {
        end += 1;
    }
    end
}

/// Find every `<sigil><word>` marker, left to right.
/// Returns the marker names with the sigil stripped.
pub fn markers(text: &str, sigil: u8) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == sigil {
            let end = run_end(bytes, i + 1, is_word_byte);
            if end > i + 1 {
                found.push(text[i + 1..end].to_string());
                i = end;
                continue;
            }
        }
        i += 1;
    }

    found
}

/// Find every `key:value` token, left to right.
///
/// The key is the whole word run in front of the colon, the value the longest
/// run of value characters after it. Text that only half fits (`http://`,
/// `a: b`) is not a token.
pub fn attribute_tokens(text: &str) -> Vec<(Range<usize>, Attribute)> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if !is_word_byte(bytes[i]) {
            i += 1;
            continue;
        }

        let key_end = run_end(bytes, i, is_word_byte);
        if bytes.get(key_end) == Some(&b':') {
            let value_end = run_end(bytes, key_end + 1, is_value_byte);
            if value_end > key_end + 1 {
                tokens.push((
                    i..value_end,
                    Attribute::new(&text[i..key_end], &text[key_end + 1..value_end]),
                ));
                i = value_end;
                continue;
            }
        }
        i = key_end;
    }

    tokens
}
