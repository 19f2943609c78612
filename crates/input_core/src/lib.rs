//! # input_core
//!
//! UI-agnostic editing state for text-like form controls:
//! - [`InputId`]: opaque identifier for an input element
//! - [`InputValueStore`]: live values, carets, selections and checked state
//! - [`InputStore`]: the trait behaviors are written against
//! - [`SelectionRange`]: a normalized byte range
//!
//! The crate depends only on `std`; integration layers map their element
//! ids onto [`InputId`].

mod id;
mod selection;
mod state;
mod store;
mod text;
mod traits;

pub use id::InputId;
pub use selection::SelectionRange;
pub use store::InputValueStore;
pub use traits::InputStore;

pub use text::{
    clamp_to_char_boundary, filter_single_line, is_edge_whitespace, next_cursor_boundary,
    normalize_newlines, prev_cursor_boundary, remap_offset, trim_leading_whitespace,
    trim_trailing_whitespace,
};
