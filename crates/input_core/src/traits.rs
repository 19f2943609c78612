//! Input store trait defining the interface for input value management.
//!
//! Behaviors that rewrite a control's value are written against this trait
//! rather than the concrete store, so alternative stores can be swapped in
//! for testing or other frontends.

use crate::id::InputId;
use crate::selection::SelectionRange;

pub trait InputStore {
    // =========================================================================
    // Initialization & Lifecycle
    // =========================================================================

    /// Ensure an input entry exists; if missing, inserts `initial`.
    fn ensure_initial(&mut self, id: InputId, initial: String);

    /// Ensure a checkbox/radio entry exists with the given initial checked state.
    fn ensure_initial_checked(&mut self, id: InputId, initial_checked: bool);

    fn focus(&mut self, id: InputId);

    fn blur(&mut self, id: InputId);

    // =========================================================================
    // Value
    // =========================================================================

    /// Returns the stored value for this input, if any.
    fn get(&self, id: InputId) -> Option<&str>;

    /// Overwrite the value; the caret moves to the end and the selection is cleared.
    fn set_value(&mut self, id: InputId, value: String);

    /// Monotonic revision counter for the input's value.
    fn value_revision(&self, id: InputId) -> u64;

    // =========================================================================
    // Editing
    // =========================================================================

    /// Insert at the caret (single-line mode, newlines stripped).
    fn insert_text(&mut self, id: InputId, s: &str);

    /// Insert at the caret (multi-line mode, newlines normalized).
    fn insert_text_multiline(&mut self, id: InputId, s: &str);

    fn backspace(&mut self, id: InputId);

    fn delete(&mut self, id: InputId);

    // =========================================================================
    // Caret & Selection
    // =========================================================================

    /// `(start, end)` of the selection, both equal to the caret when collapsed.
    fn selection_offsets(&self, id: InputId) -> Option<(usize, usize)>;

    fn set_selection_range(&mut self, id: InputId, start: usize, end: usize);

    /// The non-empty selection, if any.
    fn selection(&self, id: InputId) -> Option<SelectionRange>;

    // =========================================================================
    // Checkbox/Radio
    // =========================================================================

    fn is_checked(&self, id: InputId) -> bool;

    /// Returns `true` if the state changed.
    fn set_checked(&mut self, id: InputId, checked: bool) -> bool;
}

// =============================================================================
// Implementation for InputValueStore
// =============================================================================

impl InputStore for crate::store::InputValueStore {
    #[inline]
    fn ensure_initial(&mut self, id: InputId, initial: String) {
        crate::store::InputValueStore::ensure_initial(self, id, initial)
    }

    #[inline]
    fn ensure_initial_checked(&mut self, id: InputId, initial_checked: bool) {
        crate::store::InputValueStore::ensure_initial_checked(self, id, initial_checked)
    }

    #[inline]
    fn focus(&mut self, id: InputId) {
        crate::store::InputValueStore::focus(self, id)
    }

    #[inline]
    fn blur(&mut self, id: InputId) {
        crate::store::InputValueStore::blur(self, id)
    }

    #[inline]
    fn get(&self, id: InputId) -> Option<&str> {
        crate::store::InputValueStore::get(self, id)
    }

    #[inline]
    fn set_value(&mut self, id: InputId, value: String) {
        crate::store::InputValueStore::set(self, id, value)
    }

    #[inline]
    fn value_revision(&self, id: InputId) -> u64 {
        crate::store::InputValueStore::value_revision(self, id)
    }

    #[inline]
    fn insert_text(&mut self, id: InputId, s: &str) {
        crate::store::InputValueStore::insert_text(self, id, s)
    }

    #[inline]
    fn insert_text_multiline(&mut self, id: InputId, s: &str) {
        crate::store::InputValueStore::insert_text_multiline(self, id, s)
    }

    #[inline]
    fn backspace(&mut self, id: InputId) {
        crate::store::InputValueStore::backspace(self, id)
    }

    #[inline]
    fn delete(&mut self, id: InputId) {
        crate::store::InputValueStore::delete(self, id)
    }

    #[inline]
    fn selection_offsets(&self, id: InputId) -> Option<(usize, usize)> {
        crate::store::InputValueStore::selection_offsets(self, id)
    }

    #[inline]
    fn set_selection_range(&mut self, id: InputId, start: usize, end: usize) {
        crate::store::InputValueStore::set_selection_range(self, id, start, end)
    }

    #[inline]
    fn selection(&self, id: InputId) -> Option<SelectionRange> {
        crate::store::InputValueStore::selection(self, id)
    }

    #[inline]
    fn is_checked(&self, id: InputId) -> bool {
        crate::store::InputValueStore::is_checked(self, id)
    }

    #[inline]
    fn set_checked(&mut self, id: InputId, checked: bool) -> bool {
        crate::store::InputValueStore::set_checked(self, id, checked)
    }
}
