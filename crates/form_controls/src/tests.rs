use super::*;
use html::{Id, Node};
use input_core::InputValueStore;

const IPHONE_UA: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";
const FIREFOX_UA: &str = "Mozilla/5.0 (Android 14; Mobile; rv:125.0) Gecko/125.0 Firefox/125.0";
const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/124.0";

fn attrs(pairs: &[(&str, Option<&str>)]) -> Vec<(String, Option<String>)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
        .collect()
}

fn elem(id: u32, name: &str, attributes: Vec<(String, Option<String>)>, children: Vec<Node>) -> Node {
    Node::Element {
        id: Id(id),
        name: name.to_string(),
        attributes,
        children,
    }
}

fn input(id: u32, ty: &str, extra_attrs: &[(&str, Option<&str>)]) -> Node {
    let mut attributes = attrs(&[("type", Some(ty))]);
    attributes.extend(attrs(extra_attrs));
    elem(id, "input", attributes, Vec::new())
}

fn doc(children: Vec<Node>) -> Node {
    Node::Document {
        id: Id(1000),
        doctype: None,
        children,
    }
}

fn text(id: u32, text: &str) -> Node {
    Node::Text {
        id: Id(id),
        text: text.to_string(),
    }
}

fn installed(dom: Node, user_agent: &str) -> Page {
    let mut page = Page::new(dom);
    page.install(&BehaviorConfig::default(), user_agent);
    page
}

// =============================================================================
// Control classification
// =============================================================================

#[test]
fn classifies_input_types() {
    assert_eq!(input_control_type(&input(1, "text", &[])), InputControlType::Text);
    assert_eq!(input_control_type(&input(1, "EMAIL", &[])), InputControlType::Text);
    assert_eq!(input_control_type(&input(1, "checkbox", &[])), InputControlType::Checkbox);
    assert_eq!(input_control_type(&input(1, "radio", &[])), InputControlType::Radio);
    assert_eq!(input_control_type(&input(1, "hidden", &[])), InputControlType::Other);
    assert_eq!(input_control_type(&input(1, "submit", &[])), InputControlType::Other);

    // Missing and unknown types behave as text.
    let untyped = elem(1, "input", Vec::new(), Vec::new());
    assert_eq!(input_control_type(&untyped), InputControlType::Text);
    assert_eq!(input_control_type(&input(1, "bogus", &[])), InputControlType::Text);

    assert!(is_text_entry(&elem(1, "textarea", Vec::new(), Vec::new())));
    assert!(!is_text_entry(&elem(1, "select", Vec::new(), Vec::new())));
    assert!(!is_text_entry(&text(1, "input")));
}

#[test]
fn input_ids_round_trip() {
    assert_eq!(from_input_id(to_input_id(Id(42))), Id(42));
}

// =============================================================================
// Seeding
// =============================================================================

#[test]
fn seeds_checkbox_checked_state() {
    let dom = doc(vec![elem(
        1,
        "div",
        Vec::new(),
        vec![input(2, "checkbox", &[("checked", None)]), input(3, "checkbox", &[])],
    )]);

    let mut store = InputValueStore::new();
    assert_eq!(seed_input_state_from_dom(&mut store, &dom), 2);

    assert!(store.is_checked(to_input_id(Id(2))));
    assert!(!store.is_checked(to_input_id(Id(3))));
}

#[test]
fn seeds_text_values_without_line_breaks() {
    let dom = doc(vec![
        input(2, "text", &[("value", Some("a\nb"))]),
        input(3, "hidden", &[("value", Some("secret"))]),
    ]);

    let mut store = InputValueStore::new();
    seed_input_state_from_dom(&mut store, &dom);

    assert_eq!(store.get(to_input_id(Id(2))), Some("ab"));
    assert!(!store.has(to_input_id(Id(3))));
}

#[test]
fn seeds_textarea_strips_first_newline_and_normalizes() {
    let dom = doc(vec![elem(
        1,
        "textarea",
        Vec::new(),
        vec![text(2, "\r\nline one\r\nline two")],
    )]);

    let mut store = InputValueStore::new();
    seed_input_state_from_dom(&mut store, &dom);

    assert_eq!(store.get(to_input_id(Id(1))), Some("line one\nline two"));
}

#[test]
fn seeds_select_from_selected_option() {
    let option = |id: u32, value: Option<&str>, selected: bool, label: &str| {
        let mut a = Vec::new();
        if let Some(v) = value {
            a.push(("value", Some(v)));
        }
        if selected {
            a.push(("selected", None));
        }
        elem(id, "option", attrs(&a), vec![text(id + 100, label)])
    };

    let dom = doc(vec![
        elem(
            1,
            "select",
            Vec::new(),
            vec![
                option(2, Some("fr"), false, "France"),
                option(3, Some("be"), true, "Belgium"),
            ],
        ),
        elem(
            4,
            "select",
            Vec::new(),
            vec![elem(
                5,
                "optgroup",
                Vec::new(),
                vec![option(6, None, false, "  New   Zealand ")],
            )],
        ),
        elem(7, "select", Vec::new(), Vec::new()),
    ]);

    let mut store = InputValueStore::new();
    seed_input_state_from_dom(&mut store, &dom);

    assert_eq!(store.get(to_input_id(Id(1))), Some("be"));
    assert_eq!(store.get(to_input_id(Id(4))), Some("New Zealand"));
    assert_eq!(store.get(to_input_id(Id(7))), Some(""));
}

#[test]
fn reseeding_keeps_live_state() {
    let dom = doc(vec![input(2, "text", &[("value", Some("default"))])]);
    let mut store = InputValueStore::new();
    seed_input_state_from_dom(&mut store, &dom);
    store.set(to_input_id(Id(2)), "edited".to_string());

    assert_eq!(seed_input_state_from_dom(&mut store, &dom), 0);
    assert_eq!(store.get(to_input_id(Id(2))), Some("edited"));
}

// =============================================================================
// Field reset
// =============================================================================

fn signup_form() -> Node {
    doc(vec![
        elem(
            1,
            "form",
            Vec::new(),
            vec![
                input(2, "text", &[("value", Some("Ada"))]),
                input(3, "checkbox", &[("checked", None)]),
                input(4, "radio", &[("checked", None)]),
                elem(
                    5,
                    "select",
                    Vec::new(),
                    vec![elem(6, "option", attrs(&[("value", Some("x"))]), Vec::new())],
                ),
                elem(7, "textarea", Vec::new(), vec![text(8, "notes")]),
                input(9, "submit", &[("value", Some("Send"))]),
            ],
        ),
        input(10, "text", &[("value", Some("outside"))]),
    ])
}

#[test]
fn clean_fields_resets_form_fields() {
    let mut page = Page::new(signup_form());

    assert_eq!(page.clean_fields(Id(1)), 4);

    assert_eq!(page.value(Id(2)), Some(""));
    assert!(!page.is_checked(Id(3)));
    assert_eq!(page.value(Id(5)), Some(""));
    assert_eq!(page.value(Id(7)), Some(""));

    // Radios and fields outside the form are untouched.
    assert!(page.is_checked(Id(4)));
    assert_eq!(page.value(Id(10)), Some("outside"));
}

#[test]
fn clean_fields_on_non_form_is_noop() {
    let mut page = Page::new(signup_form());
    let dom_before = page.dom().clone();

    assert_eq!(page.clean_fields(Id(2)), 0);
    assert_eq!(page.clean_fields(Id(404)), 0);

    assert_eq!(page.dom(), &dom_before);
    assert_eq!(page.value(Id(2)), Some("Ada"));
    assert!(page.is_checked(Id(3)));
}

#[test]
fn clean_fields_works_against_any_store() {
    let dom = signup_form();
    let mut store = InputValueStore::new();
    seed_input_state_from_dom(&mut store, &dom);

    assert_eq!(clean_fields(&dom, &mut store, Id(1)), 4);
    assert_eq!(store.get(to_input_id(Id(2))), Some(""));
}

// =============================================================================
// Text behaviors
// =============================================================================

#[test]
fn trims_leading_space_on_input() {
    let mut page = installed(doc(vec![input(2, "text", &[])]), DESKTOP_UA);

    page.focus(Id(2));
    assert!(page.type_text(Id(2), " hello"));
    assert_eq!(page.value(Id(2)), Some("hello"));
}

#[test]
fn trims_trailing_space_on_blur() {
    let mut page = installed(doc(vec![input(2, "text", &[])]), DESKTOP_UA);

    page.focus(Id(2));
    page.type_text(Id(2), "hello ");
    assert_eq!(page.value(Id(2)), Some("hello "));

    page.blur(Id(2));
    assert_eq!(page.value(Id(2)), Some("hello"));
}

#[test]
fn default_trim_leaves_other_input_types_alone() {
    let mut page = installed(
        doc(vec![
            input(2, "password", &[]),
            input(3, "email", &[]),
            elem(4, "input", Vec::new(), Vec::new()),
        ]),
        DESKTOP_UA,
    );

    for id in [Id(2), Id(3), Id(4)] {
        assert!(page.listeners(id).is_empty(), "{id:?}");
        page.focus(id);
        page.type_text(id, " secret ");
        page.blur(id);
        assert_eq!(page.value(id), Some(" secret "), "{id:?}");
    }
}

#[test]
fn trim_marker_opts_other_input_types_in() {
    let mut page = Page::new(doc(vec![input(2, "email", &[("data-rc", Some("trim"))])]));
    let config = BehaviorConfig {
        trim_scope: TrimScope::Marked,
        ..BehaviorConfig::default()
    };
    assert_eq!(page.install(&config, DESKTOP_UA).trim, 1);

    page.type_text(Id(2), " a@b.c ");
    page.blur(Id(2));
    assert_eq!(page.value(Id(2)), Some("a@b.c"));
}

#[test]
fn trims_textareas_too() {
    let mut page = installed(doc(vec![elem(2, "textarea", Vec::new(), Vec::new())]), DESKTOP_UA);

    page.type_text(Id(2), "\n first line\nsecond line\n\n");
    assert_eq!(page.value(Id(2)), Some("first line\nsecond line\n\n"));
    page.blur(Id(2));
    assert_eq!(page.value(Id(2)), Some("first line\nsecond line"));
}

#[test]
fn uppercases_marked_widget() {
    let mut page = installed(
        doc(vec![input(2, "text", &[("data-rc", Some("uppercase"))])]),
        DESKTOP_UA,
    );

    page.type_text(Id(2), "ab12");
    page.type_text(Id(2), "ç");
    assert_eq!(page.value(Id(2)), Some("AB12Ç"));
}

#[test]
fn uppercases_first_letter_and_keeps_caret() {
    let mut page = installed(
        doc(vec![input(2, "text", &[("data-rc", Some("first-uppercase"))])]),
        DESKTOP_UA,
    );

    page.focus(Id(2));
    page.type_text(Id(2), "école");
    assert_eq!(page.value(Id(2)), Some("École"));
    assert_eq!(page.selection(Id(2)), Some((6, 6)));
}

#[test]
fn uppercase_first_restores_a_selection() {
    let mut page = installed(
        doc(vec![input(2, "text", &[("data-rc", Some("first-uppercase"))])]),
        DESKTOP_UA,
    );

    page.set_value(Id(2), "école");
    page.set_selection_range(Id(2), 2, 4);
    assert_eq!(page.dispatch(Id(2), EventKind::Input), 2);

    assert_eq!(page.value(Id(2)), Some("École"));
    assert_eq!(page.selection(Id(2)), Some((2, 4)));
}

#[test]
fn uppercase_first_ignores_non_letters() {
    let mut page = installed(
        doc(vec![input(2, "text", &[("data-rc", Some("first-uppercase"))])]),
        DESKTOP_UA,
    );

    page.type_text(Id(2), "9 lives");
    assert_eq!(page.value(Id(2)), Some("9 lives"));
}

#[test]
fn listeners_run_in_install_order() {
    let mut page = installed(
        doc(vec![input(2, "text", &[("data-rc", Some("first-uppercase uppercase"))])]),
        DESKTOP_UA,
    );

    assert_eq!(
        page.listeners(Id(2)),
        &[
            Listener::TrimLeading,
            Listener::TrimTrailing,
            Listener::Uppercase,
            Listener::UppercaseFirst,
        ]
    );

    page.type_text(Id(2), "  mixed Case");
    assert_eq!(page.value(Id(2)), Some("MIXED CASE"));
}

#[test]
fn set_value_does_not_fire_listeners() {
    let mut page = installed(
        doc(vec![input(2, "text", &[("data-rc", Some("uppercase"))])]),
        DESKTOP_UA,
    );

    page.set_value(Id(2), "  quiet\nplease");
    assert_eq!(page.value(Id(2)), Some("  quietplease"));
}

#[test]
fn editing_without_change_fires_nothing() {
    let mut page = installed(
        doc(vec![input(2, "text", &[("data-rc", Some("uppercase"))])]),
        DESKTOP_UA,
    );

    assert!(!page.backspace(Id(2)));
    assert!(!page.delete(Id(2)));

    page.type_text(Id(2), "ab");
    page.set_selection_range(Id(2), 0, 0);
    assert!(!page.backspace(Id(2)));
    assert!(page.delete(Id(2)));
    assert_eq!(page.value(Id(2)), Some("B"));

    page.set_selection_range(Id(2), 1, 1);
    assert!(page.backspace(Id(2)));
    assert_eq!(page.value(Id(2)), Some(""));
}

// =============================================================================
// Install
// =============================================================================

#[test]
fn install_is_idempotent() {
    let dom = doc(vec![
        input(2, "text", &[("data-rc", Some("uppercase numeric-keyboard"))]),
        elem(3, "textarea", attrs(&[("data-rc", Some("first-uppercase"))]), Vec::new()),
    ]);
    let mut page = Page::new(dom);
    let config = BehaviorConfig::default();

    let first = page.install(&config, DESKTOP_UA);
    assert_eq!(
        first,
        InstallReport {
            trim: 2,
            uppercase: 1,
            first_uppercase: 1,
            numeric_keyboard: 1,
        }
    );
    let dom_after_first = page.dom().clone();

    let second = page.install(&config, DESKTOP_UA);
    assert_eq!(second.total(), 0);
    assert_eq!(page.listeners(Id(2)).len(), 3);
    assert_eq!(page.dom(), &dom_after_first);
}

#[test]
fn install_skips_disabled_and_non_text_widgets() {
    let dom = doc(vec![
        input(2, "text", &[("disabled", None), ("data-rc", Some("uppercase"))]),
        input(3, "checkbox", &[("data-rc", Some("uppercase"))]),
        elem(4, "div", attrs(&[("data-rc", Some("uppercase"))]), Vec::new()),
    ]);
    let mut page = Page::new(dom);

    assert_eq!(page.install(&BehaviorConfig::default(), DESKTOP_UA).total(), 0);
    assert!(page.listeners(Id(2)).is_empty());
    assert!(!page.type_text(Id(2), "x"));
    assert_eq!(page.value(Id(2)), Some(""));
}

#[test]
fn trim_scope_marked_and_off() {
    let dom = || {
        doc(vec![
            input(2, "text", &[("data-rc", Some("trim"))]),
            input(3, "text", &[]),
        ])
    };

    let mut page = Page::new(dom());
    let config = BehaviorConfig {
        trim_scope: TrimScope::Marked,
        ..BehaviorConfig::default()
    };
    assert_eq!(page.install(&config, DESKTOP_UA).trim, 1);
    page.type_text(Id(2), " a");
    page.type_text(Id(3), " b");
    assert_eq!(page.value(Id(2)), Some("a"));
    assert_eq!(page.value(Id(3)), Some(" b"));

    let mut page = Page::new(dom());
    let config = BehaviorConfig {
        trim_scope: TrimScope::Off,
        ..BehaviorConfig::default()
    };
    assert_eq!(page.install(&config, DESKTOP_UA).total(), 0);
}

#[test]
fn custom_marker_attribute() {
    let mut page = Page::new(doc(vec![input(2, "text", &[("class", Some("form-field caps"))])]));
    let config = BehaviorConfig {
        marker_attribute: "class".to_string(),
        uppercase_marker: "caps".to_string(),
        ..BehaviorConfig::default()
    };

    assert_eq!(page.install(&config, DESKTOP_UA).uppercase, 1);
    page.type_text(Id(2), "shout");
    assert_eq!(page.value(Id(2)), Some("SHOUT"));
}

// =============================================================================
// Numeric keyboard
// =============================================================================

fn numeric_dom() -> Node {
    doc(vec![input(2, "number", &[("data-rc", Some("numeric-keyboard"))])])
}

#[test]
fn numeric_keyboard_default_hints() {
    let page = installed(numeric_dom(), DESKTOP_UA);
    assert_eq!(page.attr(Id(2), "inputmode"), Some("numeric"));
    assert_eq!(page.attr(Id(2), "pattern"), Some("[0-9-]*"));
    assert_eq!(page.attr(Id(2), "type"), None);
}

#[test]
fn numeric_keyboard_on_iphone() {
    let page = installed(numeric_dom(), IPHONE_UA);
    assert_eq!(page.attr(Id(2), "inputmode"), None);
    assert_eq!(page.attr(Id(2), "pattern"), Some("[0-9-]*"));
    assert_eq!(page.attr(Id(2), "type"), None);
}

#[test]
fn numeric_keyboard_on_firefox() {
    let page = installed(numeric_dom(), FIREFOX_UA);
    assert_eq!(page.attr(Id(2), "inputmode"), None);
    assert_eq!(page.attr(Id(2), "pattern"), None);
    assert_eq!(page.attr(Id(2), "type"), Some("tel"));
}

// =============================================================================
// Tree changes & unknown ids
// =============================================================================

#[test]
fn unknown_ids_are_ignored() {
    let mut page = installed(doc(vec![input(2, "text", &[])]), DESKTOP_UA);

    assert!(!page.type_text(Id(404), "x"));
    page.focus(Id(404));
    page.blur(Id(404));
    page.set_value(Id(404), "x");
    assert!(!page.set_checked(Id(404), true));
    assert_eq!(page.value(Id(404)), None);
    assert_eq!(page.dispatch(Id(404), EventKind::Input), 0);
}

#[test]
fn appended_widgets_are_seeded_and_picked_up_by_install() {
    let mut page = installed(doc(vec![elem(1, "form", Vec::new(), Vec::new())]), DESKTOP_UA);

    let field = page
        .create_element("INPUT", [("type", "text"), ("value", "x"), ("data-rc", "uppercase")])
        .expect("valid element");
    let id = page.append_child(Id(1), field).expect("form accepts children");

    assert_ne!(id, Id::UNASSIGNED);
    assert_eq!(page.value(id), Some("x"));
    assert!(page.listeners(id).is_empty());

    let report = page.install(&BehaviorConfig::default(), DESKTOP_UA);
    assert_eq!((report.trim, report.uppercase), (1, 1));
    page.type_text(id, "y");
    assert_eq!(page.value(id), Some("XY"));

    assert_eq!(page.clean_fields(Id(1)), 1);
    assert_eq!(page.value(id), Some(""));
}

#[test]
fn append_rejects_bad_targets_and_duplicate_ids() {
    let mut page = Page::new(doc(vec![input(2, "text", &[]), text(3, "hi")]));

    let a = page.create_element("input", Vec::<(&str, &str)>::new()).expect("valid element");
    assert!(page.append_child(Id(3), a).is_none());

    let dup = elem(2, "input", Vec::new(), Vec::new());
    assert!(page.append_child(Id(1000), dup).is_none());
}

#[test]
fn append_rejects_subtrees_reusing_page_ids() {
    let mut page = Page::new(doc(vec![
        elem(1, "form", Vec::new(), Vec::new()),
        input(2, "text", &[("value", Some("kept"))]),
    ]));

    let wrapper = elem(5000, "div", Vec::new(), vec![input(2, "text", &[("value", Some("new"))])]);
    assert!(page.append_child(Id(1), wrapper).is_none());

    let mut ids = Vec::new();
    html::traverse::collect_subtree_ids(page.dom(), &mut ids);
    assert_eq!(ids.iter().filter(|id| **id == Id(2)).count(), 1);
    assert!(page.dom().children()[0].children().is_empty());
    assert_eq!(page.value(Id(2)), Some("kept"));

    let fresh = elem(5000, "div", Vec::new(), vec![input(5001, "text", &[("value", Some("new"))])]);
    assert_eq!(page.append_child(Id(1), fresh), Some(Id(5000)));
    assert_eq!(page.value(Id(5001)), Some("new"));
}

#[test]
fn created_elements_get_distinct_ids() {
    let mut page = Page::new(doc(vec![input(2, "text", &[])]));
    let a = page.create_element("input", Vec::<(&str, &str)>::new()).expect("valid element");
    let b = page.create_element("input", Vec::<(&str, &str)>::new()).expect("valid element");

    assert_ne!(a.id(), b.id());
    assert!(a.id().0 > 1000);
    assert!(page.create_element("not valid", Vec::<(&str, &str)>::new()).is_none());
}

#[test]
fn removing_a_subtree_drops_listeners_and_state() {
    let mut page = installed(
        doc(vec![elem(1, "form", Vec::new(), vec![input(2, "text", &[("value", Some("v"))])])]),
        DESKTOP_UA,
    );
    assert!(!page.listeners(Id(2)).is_empty());

    assert!(page.remove(Id(1)));
    assert!(page.listeners(Id(2)).is_empty());
    assert_eq!(page.value(Id(2)), None);
    assert!(!page.type_text(Id(2), "x"));
    assert!(!page.remove(Id(1)));
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn config_defaults_fill_missing_keys() {
    let config = BehaviorConfig::from_toml_str("trim_scope = \"marked\"\n").expect("valid config");
    assert_eq!(config.trim_scope, TrimScope::Marked);
    assert_eq!(config.marker_attribute, "data-rc");
    assert_eq!(config.first_uppercase_marker, "first-uppercase");

    assert_eq!(BehaviorConfig::from_toml_str("").expect("empty config"), BehaviorConfig::default());
}

#[test]
fn config_rejects_unknown_keys_and_bad_markers() {
    let err = BehaviorConfig::from_toml_str("unknown = 1").expect_err("unknown key");
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = BehaviorConfig::from_toml_str("trim_scope = \"sometimes\"").expect_err("bad scope");
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = BehaviorConfig::from_toml_str("uppercase_marker = \"two words\"").expect_err("bad marker");
    match err {
        ConfigError::InvalidMarker { field, value } => {
            assert_eq!(field, "uppercase_marker");
            assert_eq!(value, "two words");
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = BehaviorConfig::from_toml_str("marker_attribute = \"\"").expect_err("empty attribute");
    assert!(matches!(err, ConfigError::InvalidMarker { field: "marker_attribute", .. }));
}

#[test]
fn config_from_path() {
    let path = std::env::temp_dir().join(format!("form-controls-config-{}.toml", std::process::id()));
    std::fs::write(&path, "uppercase_marker = \"caps\"\n").expect("write temp config");
    let config = BehaviorConfig::from_path(&path);
    let _ = std::fs::remove_file(&path);
    assert_eq!(config.expect("valid config").uppercase_marker, "caps");

    let err = BehaviorConfig::from_path("/nonexistent/form-controls.toml").expect_err("missing file");
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/form-controls.toml"));
}
