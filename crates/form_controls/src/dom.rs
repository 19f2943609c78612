use html::{Id, Node, attr, has_attr};
use input_core::InputId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputControlType {
    /// Single-line text entry (`text`, `search`, `email`, ...).
    Text,
    Checkbox,
    Radio,
    Other,
}

pub fn input_control_type(node: &Node) -> InputControlType {
    if !node.is_element("input") {
        return InputControlType::Other;
    }

    let ty = attr(node, "type").map(str::trim).filter(|s| !s.is_empty());

    match ty {
        None => InputControlType::Text, // missing type defaults to text
        Some(t) if t.eq_ignore_ascii_case("checkbox") => InputControlType::Checkbox,
        Some(t) if t.eq_ignore_ascii_case("radio") => InputControlType::Radio,
        Some(t) if is_text_entry_type(t) => InputControlType::Text,
        Some(t) if is_known_non_text_type(t) => InputControlType::Other,
        // unknown types fall back to text
        Some(_) => InputControlType::Text,
    }
}

fn is_text_entry_type(ty: &str) -> bool {
    const TEXT_TYPES: [&str; 7] = ["text", "search", "tel", "url", "email", "password", "number"];
    TEXT_TYPES.iter().any(|t| ty.eq_ignore_ascii_case(t))
}

fn is_known_non_text_type(ty: &str) -> bool {
    const OTHER_TYPES: [&str; 13] = [
        "hidden", "submit", "reset", "button", "image", "file", "color", "range", "date",
        "datetime-local", "month", "week", "time",
    ];
    OTHER_TYPES.iter().any(|t| ty.eq_ignore_ascii_case(t))
}

pub fn is_textarea(node: &Node) -> bool {
    node.is_element("textarea")
}

pub fn is_select(node: &Node) -> bool {
    node.is_element("select")
}

/// Text-entry `<input>` or `<textarea>`: the widgets the text behaviors apply to.
pub fn is_text_entry(node: &Node) -> bool {
    is_textarea(node) || input_control_type(node) == InputControlType::Text
}

/// `<textarea>` or `<input type="text">`: the widgets trimmed without a marker.
pub fn is_plain_text_field(node: &Node) -> bool {
    is_textarea(node)
        || (node.is_element("input")
            && attr(node, "type").is_some_and(|t| t.trim().eq_ignore_ascii_case("text")))
}

pub fn is_disabled(node: &Node) -> bool {
    has_attr(node, "disabled")
}

/// Convert `html::Id` to `input_core::InputId`.
#[inline]
pub fn to_input_id(id: Id) -> InputId {
    InputId::from(id.0)
}

/// Convert `input_core::InputId` back to `html::Id`.
#[inline]
pub fn from_input_id(id: InputId) -> Id {
    Id(id.as_raw() as u32)
}

pub(crate) fn normalize_textarea_newlines(s: &str) -> String {
    // Browsers store textarea values with LF newlines.
    input_core::normalize_newlines(s).into_owned()
}
