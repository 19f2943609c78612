use crate::{Id, Node};

/// Assign ids to every node that does not have one yet, in document order.
///
/// Fresh ids start above the largest id already present, so re-running this
/// after attaching new nodes never collides with existing ids. Returns the next
/// free id.
pub fn assign_node_ids(root: &mut Node) -> u32 {
    let next = max_node_id(root).0.wrapping_add(1).max(1);
    assign_node_ids_from(root, next)
}

/// Like [`assign_node_ids`], but hands out ids starting at `next`.
pub fn assign_node_ids_from(root: &mut Node, next: u32) -> u32 {
    fn walk(node: &mut Node, next: &mut u32) {
        // only assign if currently unset
        if node.id() == Id::UNASSIGNED {
            node.set_id(Id(*next));
            *next = next.wrapping_add(1);
        }

        if let Some(children) = node.children_mut() {
            for c in children {
                walk(c, next);
            }
        }
    }

    let mut next = next.max(1);
    walk(root, &mut next);
    next
}

pub fn max_node_id(node: &Node) -> Id {
    node.children()
        .iter()
        .map(max_node_id)
        .fold(node.id(), Ord::max)
}

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children()
        .iter()
        .find_map(|c| find_node_by_id(c, id))
}

pub fn find_node_by_id_mut(node: &mut Node, id: Id) -> Option<&mut Node> {
    if node.id() == id {
        return Some(node);
    }
    match node.children_mut() {
        Some(children) => children.iter_mut().find_map(|c| find_node_by_id_mut(c, id)),
        None => None,
    }
}

/// Detach the node with `id` from its parent and return it.
///
/// The root itself cannot be detached.
pub fn remove_node_by_id(root: &mut Node, id: Id) -> Option<Node> {
    let children = root.children_mut()?;
    if let Some(pos) = children.iter().position(|c| c.id() == id) {
        return Some(children.remove(pos));
    }
    children.iter_mut().find_map(|c| remove_node_by_id(c, id))
}

/// Visit every element under (and including) `node` in document order.
pub fn for_each_element<'a>(node: &'a Node, f: &mut dyn FnMut(&'a Node)) {
    if let Node::Element { .. } = node {
        f(node);
    }
    for c in node.children() {
        for_each_element(c, f);
    }
}

/// Collect the ids of `node` and all of its descendants.
pub fn collect_subtree_ids(node: &Node, out: &mut Vec<Id>) {
    out.push(node.id());
    for c in node.children() {
        collect_subtree_ids(c, out);
    }
}
