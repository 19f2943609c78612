use input_core::{InputId, InputStore, trim_leading_whitespace, trim_trailing_whitespace};
use std::borrow::Cow;

/// Strip leading white space; runs on every input event.
pub fn trim_leading<S: InputStore>(store: &mut S, id: InputId) -> bool {
    rewrite(store, id, trim_leading_whitespace)
}

/// Strip trailing white space; runs on blur so a typed space before the next
/// word survives.
pub fn trim_trailing<S: InputStore>(store: &mut S, id: InputId) -> bool {
    rewrite(store, id, trim_trailing_whitespace)
}

fn rewrite<S: InputStore>(store: &mut S, id: InputId, f: fn(&str) -> Cow<'_, str>) -> bool {
    let Some(value) = store.get(id) else {
        return false;
    };
    let Cow::Owned(trimmed) = f(value) else {
        return false;
    };
    store.set_value(id, trimmed);
    true
}
