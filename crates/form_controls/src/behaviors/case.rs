use input_core::{InputId, InputStore, SelectionRange};
use regex::Regex;
use std::sync::LazyLock;

/// A leading lowercase letter: ASCII or one of the accented Latin letters
/// the first-uppercase behavior recognizes.
static LEADING_LOWERCASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^[a-zàáâäãåąčćęèéêëėįìíîïłńòóôöõøùúûüųūÿýżźñçšž∂ð]")
        .expect("valid leading-lowercase regex")
});

/// Replace the whole value with its uppercase form.
pub fn uppercase_all<S: InputStore>(store: &mut S, id: InputId) -> bool {
    let Some(value) = store.get(id) else {
        return false;
    };
    let upper = value.to_uppercase();
    if upper == value {
        return false;
    }
    store.set_value(id, upper);
    true
}

/// Uppercase the first letter if it is a recognized lowercase letter, keeping
/// the selection where the user left it.
pub fn uppercase_first<S: InputStore>(store: &mut S, id: InputId) -> bool {
    let Some(value) = store.get(id) else {
        return false;
    };
    let Some(first) = LEADING_LOWERCASE.find(value) else {
        return false;
    };

    let replaced = first.range();
    let upper = first.as_str().to_uppercase();
    if upper == first.as_str() {
        // letters such as '∂' have no uppercase form
        return false;
    }

    let mut next = String::with_capacity(value.len() + upper.len());
    next.push_str(&upper);
    next.push_str(&value[replaced.end..]);

    let selection = store.selection_offsets(id);
    store.set_value(id, next);

    if let Some((start, end)) = selection {
        let restored = SelectionRange::new(start, end).remapped(replaced, upper.len());
        store.set_selection_range(id, restored.start, restored.end);
    }
    true
}
