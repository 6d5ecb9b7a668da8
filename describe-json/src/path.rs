//! jq-style access path construction.
//!
//! Paths are plain strings like `.a.b[0].c`, built incrementally as the
//! transform descends. They are pure string operations: no parsing, no
//! validation, no state beyond the accumulated prefix.

use std::borrow::Cow;

/// Extends `path` with an object member access for `key`.
///
/// Keys made entirely of ASCII alphanumerics are appended bare; anything else
/// is double-quoted with embedded `"` escaped, so the result stays a valid jq
/// expression.
pub(crate) fn object_member(path: &str, key: &str) -> String {
    format!("{path}.{}", encode_key(key))
}

/// Extends `path` with an array index access.
pub(crate) fn array_index(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

/// Encodes an object key for use in a jq-style path.
fn encode_key(key: &str) -> Cow<'_, str> {
    if key.chars().all(|ch| ch.is_ascii_alphanumeric()) {
        return Cow::Borrowed(key);
    }

    let mut quoted = String::with_capacity(key.len() + 2);
    quoted.push('"');
    for ch in key.chars() {
        if ch == '"' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    Cow::Owned(quoted)
}
