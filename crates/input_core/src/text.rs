//! UTF-8 text utilities for input handling.
//!
//! Offsets are byte indices into UTF-8 strings and are always kept on
//! character boundaries.

use std::borrow::Cow;
use std::ops::Range;

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// If `index` is beyond the string length, it is clamped to `s.len()`.
/// If `index` falls in the middle of a multi-byte character, it is
/// adjusted backwards to the start of that character.
///
/// # Examples
///
/// ```
/// use input_core::clamp_to_char_boundary;
///
/// let s = "a€b"; // '€' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 2), 1); // mid '€' -> start of '€'
/// assert_eq!(clamp_to_char_boundary(s, 100), 5); // beyond end -> len
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Previous character boundary before `i` (0 at the start).
pub fn prev_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[..i].char_indices().next_back().map(|(idx, _)| idx).unwrap_or(0)
}

/// Next character boundary after `i` (`s.len()` at the end).
pub fn next_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[i..].chars().next().map(|c| i + c.len_utf8()).unwrap_or(s.len())
}

/// Remove CR and LF, for single-line inputs.
///
/// ```
/// use input_core::filter_single_line;
///
/// assert_eq!(filter_single_line("a\r\nb"), "ab");
/// ```
pub fn filter_single_line(s: &str) -> Cow<'_, str> {
    if !s.contains(['\n', '\r']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| *c != '\n' && *c != '\r').collect())
}

/// Normalize newlines (CRLF/CR → LF), as text areas store them.
///
/// ```
/// use input_core::normalize_newlines;
///
/// assert_eq!(normalize_newlines("a\r\nb\rc"), "a\nb\nc");
/// ```
pub fn normalize_newlines(s: &str) -> Cow<'_, str> {
    if !s.contains('\r') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut it = s.chars().peekable();
    while let Some(ch) = it.next() {
        match ch {
            '\r' => {
                if it.peek() == Some(&'\n') {
                    let _ = it.next();
                }
                out.push('\n');
            }
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// White space as matched by `\s` in script regular expressions: Unicode
/// `White_Space` plus the byte order mark, minus NEXT LINE (U+0085).
#[inline]
pub fn is_edge_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}'
}

/// Strip leading white space. Borrowed when there is nothing to strip.
pub fn trim_leading_whitespace(s: &str) -> Cow<'_, str> {
    let trimmed = s.trim_start_matches(is_edge_whitespace);
    if trimmed.len() == s.len() {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(trimmed.to_string())
    }
}

/// Strip trailing white space. Borrowed when there is nothing to strip.
pub fn trim_trailing_whitespace(s: &str) -> Cow<'_, str> {
    let trimmed = s.trim_end_matches(is_edge_whitespace);
    if trimmed.len() == s.len() {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(trimmed.to_string())
    }
}

/// Map an offset across a replacement of `replaced` by `inserted_len` bytes.
///
/// Offsets before the edit are unchanged, offsets after it shift by the length
/// difference, and offsets inside it are clamped into the inserted text.
pub fn remap_offset(offset: usize, replaced: Range<usize>, inserted_len: usize) -> usize {
    if offset <= replaced.start {
        offset
    } else if offset >= replaced.end {
        offset - replaced.len() + inserted_len
    } else {
        replaced.start + (offset - replaced.start).min(inserted_len)
    }
}
