//! Query-string serialization.
//!
//! Each `key=value` segment is percent-encoded with URI rules: reserved
//! characters (`; , / ? : @ & = + $ #`) and the unreserved marks pass through
//! untouched. A `&` or `=` inside a key or value is therefore not escaped and
//! the output is ambiguous for such input.

use core_types::Value;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::fmt::Display;
use url::Url;

/// Characters kept as-is when encoding a whole URI.
const URI: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'#');

/// Serialize `(key, value)` pairs in iteration order as `k1=v1&k2=v2`.
///
/// An empty iterator yields an empty string.
pub fn serialize<I, K, V>(params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    let mut out = String::new();
    let mut segment = String::new();
    for (key, value) in params {
        if !out.is_empty() {
            out.push('&');
        }
        segment.clear();
        segment.push_str(key.as_ref());
        segment.push('=');
        segment.push_str(&value.to_string());
        out.extend(utf8_percent_encode(&segment, URI));
    }
    out
}

/// Serialize the own keys of an object value, or the indices of a list.
///
/// Any other value has no enumerable keys and yields an empty string.
pub fn serialize_value(value: &Value) -> String {
    match value {
        Value::Object(entries) => serialize(entries.iter().map(|(k, v)| (k.as_str(), v))),
        Value::List(_, items) => {
            serialize(items.iter().enumerate().map(|(i, v)| (i.to_string(), v)))
        }
        _ => String::new(),
    }
}

/// Replace the query of `url` with the serialized pairs. An empty mapping
/// clears the query.
pub fn apply_query<I, K, V>(url: &mut Url, params: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    let query = serialize(params);
    if query.is_empty() {
        url.set_query(None);
    } else {
        url.set_query(Some(&query));
    }
}
