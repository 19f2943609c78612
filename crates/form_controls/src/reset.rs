use crate::dom::{InputControlType, input_control_type, is_select, is_textarea, to_input_id};
use html::traverse::{find_node_by_id, for_each_element};
use html::{Id, Node};
use input_core::InputStore;

/// Reset every field of the form `form_id`: text inputs, selects and
/// textareas are emptied and checkboxes unchecked.
///
/// A target that is missing or not a `<form>` is left alone. Returns the
/// number of fields reset.
pub fn clean_fields<S: InputStore>(dom: &Node, store: &mut S, form_id: Id) -> usize {
    let Some(form) = find_node_by_id(dom, form_id).filter(|n| n.is_element("form")) else {
        log::trace!(target: "form_controls.reset", "#{} is not a form; nothing to reset", form_id.0);
        return 0;
    };

    let mut reset = 0;
    for_each_element(form, &mut |node| {
        let id = to_input_id(node.id());
        match input_control_type(node) {
            InputControlType::Text => store.set_value(id, String::new()),
            InputControlType::Checkbox => {
                store.set_checked(id, false);
            }
            InputControlType::Radio | InputControlType::Other => {
                if is_select(node) || is_textarea(node) {
                    store.set_value(id, String::new());
                } else {
                    return;
                }
            }
        }
        reset += 1;
    });

    log::debug!(target: "form_controls.reset", "reset {reset} fields of form #{}", form_id.0);
    reset
}
