use crate::behaviors::{EventKind, Listener, apply_numeric_keyboard};
use crate::config::{BehaviorConfig, TrimScope};
use crate::dom::{is_disabled, is_plain_text_field, is_text_entry, is_textarea, to_input_id};
use crate::reset;
use crate::seed::seed_input_state_from_dom;
use crate::user_agent::UserAgentQuirks;
use html::traverse::{
    assign_node_ids, assign_node_ids_from, collect_subtree_ids, find_node_by_id,
    find_node_by_id_mut, for_each_element, max_node_id, remove_node_by_id,
};
use html::{Id, Node, has_attr_token, make_element, outline_from_dom};
use input_core::{InputId, InputValueStore, filter_single_line};
use std::collections::{HashMap, HashSet};

/// Number of widgets each behavior was newly attached to by one
/// [`Page::install`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub trim: usize,
    pub uppercase: usize,
    pub first_uppercase: usize,
    pub numeric_keyboard: usize,
}

impl InstallReport {
    pub fn total(&self) -> usize {
        self.trim + self.uppercase + self.first_uppercase + self.numeric_keyboard
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct WidgetPlan {
    trim: bool,
    uppercase: bool,
    first_uppercase: bool,
    numeric_keyboard: bool,
}

/// A document plus the live state of its widgets.
///
/// The host drives it with editing calls ([`type_text`](Self::type_text),
/// [`backspace`](Self::backspace), [`blur`](Self::blur), ...); each call
/// updates the widget's state and then runs the listeners registered for the
/// resulting event, in the order they were installed. Calls naming an id that
/// is not a live control are logged and ignored.
#[derive(Debug)]
pub struct Page {
    dom: Node,
    store: InputValueStore,
    listeners: HashMap<Id, Vec<Listener>>,
    numeric_hinted: HashSet<Id>,
    next_id: u32,
}

impl Page {
    /// Take ownership of `dom`, assign ids to unnumbered nodes and seed the
    /// widgets' live state from their default values.
    pub fn new(mut dom: Node) -> Self {
        let next_id = assign_node_ids(&mut dom);
        let mut store = InputValueStore::new();
        seed_input_state_from_dom(&mut store, &dom);
        Self {
            dom,
            store,
            listeners: HashMap::new(),
            numeric_hinted: HashSet::new(),
            next_id,
        }
    }

    pub fn dom(&self) -> &Node {
        &self.dom
    }

    pub fn store(&self) -> &InputValueStore {
        &self.store
    }

    /// Listeners attached to `id`, in run order.
    pub fn listeners(&self, id: Id) -> &[Listener] {
        self.listeners.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn outline(&self, cap: usize) -> Vec<String> {
        outline_from_dom(&self.dom, cap)
    }

    // =========================================================================
    // Install
    // =========================================================================

    /// Scan the document and attach behaviors to every enabled text input and
    /// textarea that asks for them.
    ///
    /// Under [`TrimScope::All`] trimming covers textareas and `type="text"`
    /// inputs; other input types (passwords, emails, ...) need the trim marker.
    ///
    /// Per widget the listeners run as trim, uppercase, first-uppercase.
    /// Installing again only picks up widgets that were not covered before.
    pub fn install(&mut self, config: &BehaviorConfig, user_agent: &str) -> InstallReport {
        let quirks = UserAgentQuirks::from_user_agent(user_agent);
        let marker = config.marker_attribute.as_str();

        let mut plans: Vec<(Id, WidgetPlan)> = Vec::new();
        for_each_element(&self.dom, &mut |node| {
            if !is_text_entry(node) {
                return;
            }
            if is_disabled(node) {
                log::trace!(target: "form_controls.install", "skipping disabled widget #{}", node.id().0);
                return;
            }
            let marked = |token: &str| has_attr_token(node, marker, token);
            let plan = WidgetPlan {
                trim: match config.trim_scope {
                    TrimScope::All => is_plain_text_field(node),
                    TrimScope::Marked => marked(&config.trim_marker),
                    TrimScope::Off => false,
                },
                uppercase: marked(&config.uppercase_marker),
                first_uppercase: marked(&config.first_uppercase_marker),
                numeric_keyboard: marked(&config.numeric_keyboard_marker),
            };
            plans.push((node.id(), plan));
        });

        let mut report = InstallReport::default();
        for (id, plan) in plans {
            if plan.trim {
                let leading = self.attach(id, Listener::TrimLeading);
                let trailing = self.attach(id, Listener::TrimTrailing);
                if leading || trailing {
                    report.trim += 1;
                }
            }
            if plan.uppercase && self.attach(id, Listener::Uppercase) {
                report.uppercase += 1;
            }
            if plan.first_uppercase && self.attach(id, Listener::UppercaseFirst) {
                report.first_uppercase += 1;
            }
            if plan.numeric_keyboard
                && !self.numeric_hinted.contains(&id)
                && let Some(node) = find_node_by_id_mut(&mut self.dom, id)
            {
                apply_numeric_keyboard(node, quirks);
                self.numeric_hinted.insert(id);
                report.numeric_keyboard += 1;
            }
        }

        log::debug!(
            target: "form_controls.install",
            "installed behaviors: trim={} uppercase={} first_uppercase={} numeric_keyboard={} ({quirks:?})",
            report.trim,
            report.uppercase,
            report.first_uppercase,
            report.numeric_keyboard,
        );
        report
    }

    fn attach(&mut self, id: Id, listener: Listener) -> bool {
        let attached = self.listeners.entry(id).or_default();
        if attached.contains(&listener) {
            return false;
        }
        attached.push(listener);
        true
    }

    // =========================================================================
    // Events
    // =========================================================================

    pub fn focus(&mut self, id: Id) {
        if let Some(input) = self.control(id) {
            self.store.focus(input);
        }
    }

    /// Move focus away from `id` and run its blur listeners.
    pub fn blur(&mut self, id: Id) {
        if let Some(input) = self.control(id) {
            self.store.blur(input);
            self.dispatch(id, EventKind::Blur);
        }
    }

    /// Type `text` at the caret (replacing any selection). Returns `true` if
    /// the value changed, in which case the input listeners have run.
    pub fn type_text(&mut self, id: Id, text: &str) -> bool {
        self.edit(id, |store, input, multiline| {
            if multiline {
                store.insert_text_multiline(input, text);
            } else {
                store.insert_text(input, text);
            }
        })
    }

    pub fn backspace(&mut self, id: Id) -> bool {
        self.edit(id, |store, input, _| store.backspace(input))
    }

    pub fn delete(&mut self, id: Id) -> bool {
        self.edit(id, |store, input, _| store.delete(input))
    }

    fn edit(&mut self, id: Id, f: impl FnOnce(&mut InputValueStore, InputId, bool)) -> bool {
        let Some((input, multiline)) = self.editable(id) else {
            return false;
        };
        let before = self.store.value_revision(input);
        f(&mut self.store, input, multiline);
        if self.store.value_revision(input) == before {
            return false;
        }
        self.dispatch(id, EventKind::Input);
        true
    }

    /// Run the listeners `id` has for `kind`. Returns how many ran.
    pub fn dispatch(&mut self, id: Id, kind: EventKind) -> usize {
        let input = to_input_id(id);
        let Some(listeners) = self.listeners.get(&id) else {
            return 0;
        };

        let mut ran = 0;
        for listener in listeners.iter().filter(|l| l.event() == kind) {
            listener.run(&mut self.store, input);
            ran += 1;
        }
        ran
    }

    pub fn set_selection_range(&mut self, id: Id, start: usize, end: usize) {
        if let Some(input) = self.control(id) {
            self.store.set_selection_range(input, start, end);
        }
    }

    /// Assign a value the way script does: no listeners run and the caret
    /// moves to the end. Single-line inputs drop line breaks.
    pub fn set_value(&mut self, id: Id, value: &str) {
        let Some(input) = self.control(id) else {
            return;
        };
        let multiline = find_node_by_id(&self.dom, id).is_some_and(is_textarea);
        let value = if multiline {
            value.to_string()
        } else {
            filter_single_line(value).into_owned()
        };
        self.store.set(input, value);
    }

    /// Check or uncheck a checkbox/radio. Returns `true` if the state changed.
    pub fn set_checked(&mut self, id: Id, checked: bool) -> bool {
        match self.control(id) {
            Some(input) => self.store.set_checked(input, checked),
            None => false,
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn value(&self, id: Id) -> Option<&str> {
        self.store.get(to_input_id(id))
    }

    /// `(start, end)` of the selection; both equal the caret when collapsed.
    pub fn selection(&self, id: Id) -> Option<(usize, usize)> {
        self.store.selection_offsets(to_input_id(id))
    }

    pub fn is_checked(&self, id: Id) -> bool {
        self.store.is_checked(to_input_id(id))
    }

    pub fn attr(&self, id: Id, name: &str) -> Option<&str> {
        find_node_by_id(&self.dom, id).and_then(|node| html::attr(node, name))
    }

    // =========================================================================
    // Forms & tree
    // =========================================================================

    /// Reset the fields of form `form_id`; anything else is a no-op.
    pub fn clean_fields(&mut self, form_id: Id) -> usize {
        reset::clean_fields(&self.dom, &mut self.store, form_id)
    }

    /// Create a detached element with a fresh id. See [`html::make_element`].
    pub fn create_element<I, K, V>(&mut self, tag_name: &str, attributes: I) -> Option<Node>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut node = make_element(tag_name, attributes)?;
        node.set_id(Id(self.next_id));
        self.next_id = self.next_id.wrapping_add(1);
        Some(node)
    }

    /// Attach `child` as the last child of `parent` and seed the state of any
    /// controls it contains. Returns the child's id, or `None` if `parent`
    /// cannot hold children or any id in the child's subtree is already in use.
    ///
    /// Behaviors are not attached until the next [`install`](Self::install).
    pub fn append_child(&mut self, parent: Id, mut child: Node) -> Option<Id> {
        let mut incoming = Vec::new();
        collect_subtree_ids(&child, &mut incoming);
        if let Some(taken) = incoming
            .into_iter()
            .find(|id| *id != Id::UNASSIGNED && find_node_by_id(&self.dom, *id).is_some())
        {
            log::warn!(target: "form_controls.page", "node #{} is already in the page", taken.0);
            return None;
        }

        let Some(children) = find_node_by_id_mut(&mut self.dom, parent).and_then(Node::children_mut)
        else {
            log::warn!(target: "form_controls.page", "cannot append to #{}", parent.0);
            return None;
        };

        let next = self.next_id.max(max_node_id(&child).0.wrapping_add(1));
        self.next_id = assign_node_ids_from(&mut child, next);

        let id = child.id();
        seed_input_state_from_dom(&mut self.store, &child);
        children.push(child);
        Some(id)
    }

    /// Detach `id` and drop the listeners and live state of its subtree.
    pub fn remove(&mut self, id: Id) -> bool {
        let Some(node) = remove_node_by_id(&mut self.dom, id) else {
            return false;
        };

        let mut ids = Vec::new();
        collect_subtree_ids(&node, &mut ids);
        for id in ids {
            self.listeners.remove(&id);
            self.numeric_hinted.remove(&id);
            self.store.remove(to_input_id(id));
        }
        true
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn control(&self, id: Id) -> Option<InputId> {
        let input = to_input_id(id);
        if self.store.has(input) {
            Some(input)
        } else {
            log::warn!(target: "form_controls.page", "ignoring event for unknown control #{}", id.0);
            None
        }
    }

    /// The store id of an enabled text widget, and whether it is multi-line.
    fn editable(&self, id: Id) -> Option<(InputId, bool)> {
        let input = self.control(id)?;
        let node = find_node_by_id(&self.dom, id)?;
        if !is_text_entry(node) || is_disabled(node) {
            log::debug!(target: "form_controls.page", "#{} does not accept text", id.0);
            return None;
        }
        Some((input, is_textarea(node)))
    }
}
