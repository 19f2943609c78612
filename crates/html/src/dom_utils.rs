use crate::{Id, Node};

pub fn attr<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    match node {
        Node::Element { attributes, .. } => attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref()),
        _ => None,
    }
}

pub fn has_attr(node: &Node, name: &str) -> bool {
    match node {
        Node::Element { attributes, .. } => {
            attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
        }
        _ => false,
    }
}

/// `true` if the whitespace-separated value of `name` contains `token`
/// (the `[name~="token"]` selector).
pub fn has_attr_token(node: &Node, name: &str, token: &str) -> bool {
    attr(node, name).is_some_and(|v| v.split_ascii_whitespace().any(|t| t == token))
}

/// Set or overwrite an attribute. No-op on non-element nodes.
pub fn set_attr(node: &mut Node, name: &str, value: &str) {
    let Node::Element { attributes, .. } = node else {
        return;
    };
    match attributes
        .iter_mut()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
    {
        Some((_, v)) => *v = Some(value.to_string()),
        None => attributes.push((name.to_ascii_lowercase(), Some(value.to_string()))),
    }
}

/// Remove an attribute. Returns `true` if it was present.
pub fn remove_attr(node: &mut Node, name: &str) -> bool {
    let Node::Element { attributes, .. } = node else {
        return false;
    };
    let before = attributes.len();
    attributes.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
    attributes.len() != before
}

pub fn collect_text(nodes: &[Node], out: &mut String) {
    for n in nodes {
        match n {
            Node::Text { text, .. } => out.push_str(text),
            Node::Element { children, .. } | Node::Document { children, .. } => {
                collect_text(children, out);
            }
            Node::Comment { .. } => {}
        }
    }
}

/// Create a detached element.
///
/// The tag name and attribute names are lowercased; for a repeated attribute
/// the first occurrence wins. Returns `None` if the tag name is empty or
/// contains whitespace, `<`, `>` or `/`. The element carries
/// [`Id::UNASSIGNED`] until it is attached to a document.
pub fn make_element<I, K, V>(tag_name: &str, attributes: I) -> Option<Node>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    if !is_valid_name(tag_name) {
        log::debug!(target: "html.dom", "rejected element name {tag_name:?}");
        return None;
    }

    let mut attrs: Vec<(String, Option<String>)> = Vec::new();
    for (k, v) in attributes {
        let k = k.as_ref();
        if !is_valid_name(k) {
            log::debug!(target: "html.dom", "skipped attribute name {k:?} on <{tag_name}>");
            continue;
        }
        let k = k.to_ascii_lowercase();
        if attrs.iter().any(|(existing, _)| *existing == k) {
            continue;
        }
        attrs.push((k, Some(v.into())));
    }

    Some(Node::Element {
        id: Id::UNASSIGNED,
        name: tag_name.to_ascii_lowercase(),
        attributes: attrs,
        children: Vec::new(),
    })
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '/' | '"' | '\'' | '='))
}

pub fn outline_from_dom(root: &Node, cap: usize) -> Vec<String> {
    fn walk(node: &Node, depth: usize, out: &mut Vec<String>, left: &mut usize) {
        if *left == 0 {
            return;
        }
        *left -= 1;
        let indent = "  ".repeat(depth);
        match node {
            Node::Document {
                doctype, children, ..
            } => {
                if let Some(dt) = doctype {
                    out.push(format!("{indent}<!DOCTYPE {dt}>"));
                } else {
                    out.push(format!("{indent}#document"));
                }
                for c in children {
                    walk(c, depth + 1, out, left);
                }
            }
            Node::Element {
                id,
                name,
                attributes,
                children,
            } => {
                let mut line = format!("{indent}<{name}");
                for (k, v) in attributes {
                    match v {
                        Some(v) => line.push_str(&format!(r#" {k}="{v}""#)),
                        None => line.push_str(&format!(" {k}")),
                    }
                }
                line.push_str(&format!(">  #{}", id.0));
                out.push(line);
                for c in children {
                    walk(c, depth + 1, out, left);
                }
            }
            Node::Text { text, .. } => {
                let t = text.replace('\n', " ").trim().to_string();
                if !t.is_empty() {
                    let show = match t.char_indices().nth(40) {
                        Some((cut, _)) => format!("{}…", &t[..cut]),
                        None => t,
                    };
                    out.push(format!("{indent}\"{show}\""));
                }
            }
            Node::Comment { text, .. } => {
                out.push(format!("{indent}<!-- {} -->", text.replace('\n', " ")));
            }
        }
    }
    let mut out = Vec::new();
    let mut left = cap;
    walk(root, 0, &mut out, &mut left);
    out
}
