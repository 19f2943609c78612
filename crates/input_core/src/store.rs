//! Central store for input values, caret positions, and selections.
//!
//! This store is UI-agnostic: it owns the live value of every text-like
//! control plus its caret/selection and checked state. Integration layers
//! translate their element ids into [`InputId`] at the call boundary.

use crate::id::InputId;
use crate::selection::SelectionRange;
use crate::state::InputState;
use crate::text::{
    clamp_to_char_boundary, filter_single_line, next_cursor_boundary, normalize_newlines,
    prev_cursor_boundary,
};
use std::collections::HashMap;

/// Central store for input element state.
///
/// # Example
///
/// ```
/// use input_core::{InputId, InputValueStore};
///
/// let mut store = InputValueStore::new();
/// let id = InputId::from_raw(1);
///
/// store.ensure_initial(id, "Hello".to_string());
/// store.focus(id);
/// store.insert_text(id, " World");
///
/// assert_eq!(store.get(id), Some("Hello World"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct InputValueStore {
    values: HashMap<InputId, InputState>,
}

impl InputValueStore {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Returns `true` if an entry exists for this input.
    pub fn has(&self, id: InputId) -> bool {
        self.values.contains_key(&id)
    }

    /// Number of inputs with stored state.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the stored value for this input, if any.
    pub fn get(&self, id: InputId) -> Option<&str> {
        self.values.get(&id).map(|s| s.value.as_str())
    }

    /// Returns the current caret byte index for this input, if any.
    pub fn caret(&self, id: InputId) -> Option<usize> {
        self.values.get(&id).map(|s| s.caret)
    }

    /// The non-empty selection, if any.
    pub fn selection(&self, id: InputId) -> Option<SelectionRange> {
        let st = self.values.get(&id)?;
        selection_range(&st.value, st.selection_anchor, st.caret)
    }

    /// `(selection_start, selection_end)`; both equal the caret when nothing is selected.
    pub fn selection_offsets(&self, id: InputId) -> Option<(usize, usize)> {
        let st = self.values.get(&id)?;
        Some(match selection_range(&st.value, st.selection_anchor, st.caret) {
            Some(sel) => (sel.start, sel.end),
            None => (st.caret, st.caret),
        })
    }

    /// Monotonic revision counter for the input's value.
    pub fn value_revision(&self, id: InputId) -> u64 {
        self.values.get(&id).map(|s| s.value_rev).unwrap_or(0)
    }

    /// Returns `true` if this checkbox/radio input is checked.
    pub fn is_checked(&self, id: InputId) -> bool {
        self.values.get(&id).is_some_and(|s| s.checked)
    }

    /// Set the checked state for a checkbox/radio input.
    ///
    /// Returns `true` if the state actually changed.
    pub fn set_checked(&mut self, id: InputId, checked: bool) -> bool {
        let st = self.values.entry(id).or_default();
        let changed = st.checked != checked;
        st.checked = checked;
        changed
    }

    /// Ensure an entry exists with the initial checked state.
    ///
    /// If an entry already exists, this is a no-op.
    pub fn ensure_initial_checked(&mut self, id: InputId, initial_checked: bool) {
        self.values.entry(id).or_insert(InputState {
            checked: initial_checked,
            ..InputState::default()
        });
    }

    /// Ensure an entry exists; if missing, inserts the provided initial value
    /// with the caret at its end.
    pub fn ensure_initial(&mut self, id: InputId, initial: String) {
        self.values
            .entry(id)
            .or_insert_with(|| InputState::with_value(initial));
    }

    /// Set/overwrite the value for this input.
    ///
    /// Like assigning a control's value from script: the caret moves to the
    /// end and any selection is cleared. Checked state is kept.
    pub fn set(&mut self, id: InputId, value: String) {
        let st = self.values.entry(id).or_default();
        st.caret = value.len();
        st.value = value;
        st.selection_anchor = None;
        mark_text_dirty(st);
    }

    /// Drop all state for this input.
    pub fn remove(&mut self, id: InputId) -> bool {
        self.values.remove(&id).is_some()
    }

    /// Clear all stored input state.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Called when an input gains focus.
    ///
    /// Clamps caret to a valid UTF-8 boundary and clears selection.
    pub fn focus(&mut self, id: InputId) {
        if let Some(st) = self.values.get_mut(&id) {
            clamp_state(st);
            clear_selection(st);
        }
    }

    /// Called when an input loses focus.
    pub fn blur(&mut self, id: InputId) {
        if let Some(st) = self.values.get_mut(&id) {
            clamp_state(st);
            clear_selection(st);
        }
    }

    /// Insert text at the current caret position (single-line mode).
    ///
    /// Newlines are stripped. If there is a selection, it is replaced.
    pub fn insert_text(&mut self, id: InputId, s: &str) {
        let s = filter_single_line(s);
        self.insert_filtered(id, &s);
    }

    /// Insert text at the current caret position (multi-line mode).
    ///
    /// Newlines are normalized (CRLF/CR → LF). If there is a selection, it is replaced.
    pub fn insert_text_multiline(&mut self, id: InputId, s: &str) {
        let s = normalize_newlines(s);
        self.insert_filtered(id, &s);
    }

    fn insert_filtered(&mut self, id: InputId, s: &str) {
        let st = self.values.entry(id).or_default();
        clamp_state(st);
        if s.is_empty() {
            return;
        }

        delete_selection_if_any(st);

        let caret = clamp_to_char_boundary(&st.value, st.caret);
        st.value.insert_str(caret, s);
        st.caret = clamp_to_char_boundary(&st.value, caret + s.len());
        mark_text_dirty(st);
    }

    /// Delete the character before the caret (backspace).
    ///
    /// If there is a selection, deletes the selection instead.
    pub fn backspace(&mut self, id: InputId) {
        let Some(st) = self.values.get_mut(&id) else {
            return;
        };
        clamp_state(st);
        if delete_selection_if_any(st) {
            return;
        }

        let caret = st.caret;
        if caret == 0 {
            return;
        }

        let prev = prev_cursor_boundary(&st.value, caret);
        st.value.drain(prev..caret);
        st.caret = prev;
        mark_text_dirty(st);
    }

    /// Delete the character after the caret (delete key).
    ///
    /// If there is a selection, deletes the selection instead.
    pub fn delete(&mut self, id: InputId) {
        let Some(st) = self.values.get_mut(&id) else {
            return;
        };
        clamp_state(st);
        if delete_selection_if_any(st) {
            return;
        }

        let caret = st.caret;
        if caret >= st.value.len() {
            return;
        }

        let next = next_cursor_boundary(&st.value, caret);
        st.value.drain(caret..next);
        mark_text_dirty(st);
    }

    /// Select `start..end` with the caret at `end`.
    ///
    /// Offsets are clamped to the value; if `start > end`, `start` collapses
    /// onto `end`. Equal offsets just place the caret.
    pub fn set_selection_range(&mut self, id: InputId, start: usize, end: usize) {
        let Some(st) = self.values.get_mut(&id) else {
            return;
        };
        let end = clamp_to_char_boundary(&st.value, end);
        let start = clamp_to_char_boundary(&st.value, start).min(end);
        st.selection_anchor = Some(start);
        st.caret = end;
        normalize_selection_anchor(st);
    }
}

// --- Internal helper functions ---

fn selection_range(value: &str, anchor: Option<usize>, caret: usize) -> Option<SelectionRange> {
    let anchor = anchor?;

    let a = clamp_to_char_boundary(value, anchor);
    let c = clamp_to_char_boundary(value, caret);
    if a == c {
        return None;
    }

    Some(SelectionRange::new(a, c))
}

fn normalize_selection_anchor(st: &mut InputState) {
    let Some(anchor) = st.selection_anchor else {
        return;
    };
    let anchor = clamp_to_char_boundary(&st.value, anchor);
    st.selection_anchor = Some(anchor);

    // If selection collapsed, clear anchor to avoid "sticky" selection.
    if anchor == st.caret {
        st.selection_anchor = None;
    }
}

fn delete_selection_if_any(st: &mut InputState) -> bool {
    let Some(sel) = selection_range(&st.value, st.selection_anchor, st.caret) else {
        st.selection_anchor = None;
        return false;
    };

    st.value.drain(sel.start..sel.end);
    st.caret = sel.start;
    st.selection_anchor = None;
    mark_text_dirty(st);
    true
}

fn clamp_state(st: &mut InputState) {
    st.caret = clamp_to_char_boundary(&st.value, st.caret);
    if let Some(a) = st.selection_anchor {
        st.selection_anchor = Some(clamp_to_char_boundary(&st.value, a));
    }
}

fn clear_selection(st: &mut InputState) {
    st.selection_anchor = None;
}

fn mark_text_dirty(st: &mut InputState) {
    st.value_rev = st.value_rev.wrapping_add(1);
}
