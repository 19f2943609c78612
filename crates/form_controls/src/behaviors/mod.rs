//! Listeners attached to text widgets and the numeric keyboard hint.
//!
//! Every listener is a pure function of the widget's live state in an
//! [`InputStore`], so the same code runs against the page's store or a test
//! double.

mod case;
mod numeric;
mod whitespace;

pub use case::{uppercase_all, uppercase_first};
pub use numeric::{NUMERIC_PATTERN, apply_numeric_keyboard};
pub use whitespace::{trim_leading, trim_trailing};

use input_core::{InputId, InputStore};

/// Host notifications a listener can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The widget's value was edited by the user.
    Input,
    /// The widget lost focus.
    Blur,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Listener {
    TrimLeading,
    TrimTrailing,
    Uppercase,
    UppercaseFirst,
}

impl Listener {
    pub fn event(self) -> EventKind {
        match self {
            Listener::TrimTrailing => EventKind::Blur,
            Listener::TrimLeading | Listener::Uppercase | Listener::UppercaseFirst => {
                EventKind::Input
            }
        }
    }

    /// Run the listener. Returns `true` if it rewrote the value.
    pub fn run<S: InputStore>(self, store: &mut S, id: InputId) -> bool {
        let changed = match self {
            Listener::TrimLeading => trim_leading(store, id),
            Listener::TrimTrailing => trim_trailing(store, id),
            Listener::Uppercase => uppercase_all(store, id),
            Listener::UppercaseFirst => uppercase_first(store, id),
        };
        if changed {
            log::trace!(target: "form_controls.behaviors", "{self:?} rewrote input {}", id.as_raw());
        }
        changed
    }
}
