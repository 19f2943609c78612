use crate::dom::{
    InputControlType, input_control_type, is_select, is_textarea, normalize_textarea_newlines,
    to_input_id,
};
use html::dom_utils::collect_text;
use html::{Node, attr, has_attr};
use input_core::InputValueStore;

/// Seed live widget state from the DOM's default values.
///
/// Controls that already have state keep it, so this is safe to re-run after
/// new nodes are attached. Returns the number of controls newly seeded.
pub fn seed_input_state_from_dom(store: &mut InputValueStore, dom: &Node) -> usize {
    fn walk(store: &mut InputValueStore, node: &Node, seeded: &mut usize) {
        match node {
            Node::Element { name, .. } if name.eq_ignore_ascii_case("input") => {
                let id = to_input_id(node.id());
                if store.has(id) {
                    return;
                }

                match input_control_type(node) {
                    InputControlType::Text => {
                        let initial = attr(node, "value").unwrap_or("");
                        store.ensure_initial(id, filter_value(initial));
                        *seeded += 1;
                    }
                    InputControlType::Checkbox | InputControlType::Radio => {
                        store.ensure_initial_checked(id, has_attr(node, "checked"));
                        *seeded += 1;
                    }
                    InputControlType::Other => {}
                }
            }

            Node::Element { children, .. } if is_textarea(node) => {
                let id = to_input_id(node.id());
                if store.has(id) {
                    return;
                }

                let mut initial = String::new();
                collect_text(children, &mut initial);
                let mut initial = normalize_textarea_newlines(&initial);

                // HTML textarea parsing: if the first character is a newline, strip it.
                if initial.starts_with('\n') {
                    initial.remove(0);
                }

                store.ensure_initial(id, initial);
                *seeded += 1;
            }

            Node::Element { .. } if is_select(node) => {
                let id = to_input_id(node.id());
                if store.has(id) {
                    return;
                }
                store.ensure_initial(id, selected_option_value(node).unwrap_or_default());
                *seeded += 1;
            }

            Node::Element { children, .. } | Node::Document { children, .. } => {
                for c in children {
                    walk(store, c, seeded);
                }
            }

            Node::Text { .. } | Node::Comment { .. } => {}
        }
    }

    let mut seeded = 0;
    walk(store, dom, &mut seeded);
    log::trace!(target: "form_controls.seed", "seeded {seeded} controls");
    seeded
}

fn filter_value(value: &str) -> String {
    // The value sanitization for text inputs strips line breaks.
    input_core::filter_single_line(value).into_owned()
}

/// Value of the option a `<select>` shows initially: the last option marked
/// `selected`, otherwise the first enabled option.
fn selected_option_value(select: &Node) -> Option<String> {
    fn collect_options<'a>(node: &'a Node, out: &mut Vec<&'a Node>) {
        for c in node.children() {
            if c.is_element("option") {
                out.push(c);
            } else if c.is_element("optgroup") {
                collect_options(c, out);
            }
        }
    }

    let mut options = Vec::new();
    collect_options(select, &mut options);

    let chosen = options
        .iter()
        .rev()
        .find(|o| has_attr(o, "selected"))
        .or_else(|| options.iter().find(|o| !has_attr(o, "disabled")))?;

    Some(option_value(chosen))
}

fn option_value(option: &Node) -> String {
    if let Some(v) = attr(option, "value") {
        return v.to_string();
    }
    let mut text = String::new();
    collect_text(option.children(), &mut text);
    text.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
}
