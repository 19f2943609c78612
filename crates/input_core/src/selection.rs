//! Text selection representation.

use crate::text::remap_offset;
use std::ops::Range;

/// A text selection as a normalized byte range (`start <= end`).
///
/// Offsets produced by [`InputValueStore`](crate::InputValueStore) are always
/// on UTF-8 character boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRange {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl SelectionRange {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// The selection after `replaced` was swapped for `inserted_len` bytes.
    pub fn remapped(&self, replaced: Range<usize>, inserted_len: usize) -> Self {
        Self::new(
            remap_offset(self.start, replaced.clone(), inserted_len),
            remap_offset(self.end, replaced, inserted_len),
        )
    }
}
