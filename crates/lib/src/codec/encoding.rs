//! Reversible value encoding for flat-store-safe scalars.
//!
//! Flat keys travel through URLs, shell arguments, and the store's own
//! delimiter syntax, so text values containing characters from a fixed unsafe
//! set are optionally percent-encoded on flatten and decoded on unflatten.
//! Encoding is symmetric only when the caller enables it on both ends; the
//! codec never auto-detects whether flattening used encoding.
//!
//! Decoding is best-effort by design: [`looks_encoded`] is a heuristic, and a
//! wrong guess about encoding is a data-fidelity nuisance, not a correctness
//! failure. Nothing in this module returns an error.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use crate::node::Node;

/// Characters that collide with path-separator syntax, URL syntax, or the
/// target store's own delimiter rules.
const UNSAFE_CHARS: &[char] = &[
    ' ', '&', '=', '?', '#', '@', '%', '+', '"', '\'', '/', ':', ';', '<', '>', '[', ']', '{',
    '}', '|', '\\',
];

/// Returns true iff the text contains at least one character from the unsafe
/// set and would change under [`percent_encode`].
pub fn needs_encoding(text: &str) -> bool {
    text.contains(UNSAFE_CHARS)
}

/// Percent-encodes `input`, leaving unreserved characters (`A-Z a-z 0-9 - . _ ~`)
/// and any ASCII character in `safe_chars` unescaped. Non-ASCII text encodes
/// its UTF-8 bytes, uppercase hex.
///
/// The safe set is runtime data supplied by the caller, so the encoding loop
/// is written out by hand instead of going through a const `AsciiSet`.
pub fn percent_encode(input: &str, safe_chars: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &byte in input.as_bytes() {
        if is_unreserved(byte) || (byte.is_ascii() && safe_chars.contains(byte as char)) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

/// Encodes one scalar for emission into the flat collection.
///
/// Text needing encoding becomes encoded text; text that is already safe
/// passes through unchanged. Non-text scalars are stringified first (so
/// enabling encoding turns every emitted value into text) and then encoded if
/// the rendering needs it.
pub fn encode_value(value: &Node, safe_chars: &str) -> Node {
    let text = match value {
        Node::Text(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    };
    if needs_encoding(&text) {
        Node::Text(percent_encode(&text, safe_chars))
    } else {
        Node::Text(text.into_owned())
    }
}

/// Heuristic: true iff the text contains `%` followed by two hex digits.
///
/// Inherently imperfect. A literal payload that merely looks like `%2F` and
/// was never encoded will be mis-decoded; this is a known, accepted
/// approximation.
pub fn looks_encoded(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'%'
            && bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
            && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit)
    })
}

/// Percent-decodes `text`, returning the input unchanged if the decoded bytes
/// are not valid UTF-8. Truncated escapes (`"50%"`) pass through literally.
pub fn decode_text(text: &str) -> String {
    match percent_decode_str(text).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => text.to_string(),
    }
}

/// Decodes one scalar read back from the flat collection. Only text that
/// [`looks_encoded`] is touched; every other value passes through unchanged.
pub fn decode_value(value: &Node) -> Node {
    match value {
        Node::Text(s) if looks_encoded(s) => Node::Text(decode_text(s)),
        other => other.clone(),
    }
}
