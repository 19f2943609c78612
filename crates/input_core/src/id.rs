//! Opaque identifier for input elements.
//!
//! A plain `u64` keeps this crate independent of any DOM id type; the
//! integration layer converts at its call boundary.

/// Lightweight, copyable handle for one input field. The raw value has no
/// meaning inside this crate; it is only a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InputId(u64);

impl InputId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u32> for InputId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(raw as u64)
    }
}
