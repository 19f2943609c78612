use clap::Parser;
use core_types::Value;
use form_controls::{BehaviorConfig, Page};
use html::{Id, Node};
use std::path::PathBuf;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Build a sample signup form, install the form behaviors and replay a short
/// typing session against it.
#[derive(Debug, Parser)]
#[command(name = "formkit", version)]
struct Args {
    /// TOML file with marker and trim settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// User agent used to pick numeric keyboard quirks.
    #[arg(long, default_value = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36")]
    user_agent: String,

    /// Maximum number of outline lines to print.
    #[arg(long, default_value_t = 40)]
    outline: usize,
}

struct Fields {
    form: Id,
    name: Id,
    city: Id,
    zip: Id,
    notes: Id,
    newsletter: Id,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match BehaviorConfig::from_path(path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{err}");
                std::process::exit(2);
            }
        },
        None => BehaviorConfig::default(),
    };

    let Some((mut page, fields)) = build_page(&config) else {
        log::error!("failed to build the sample form");
        std::process::exit(1);
    };

    let report = page.install(&config, &args.user_agent);
    log::info!("attached {} behaviors", report.total());

    replay(&mut page, &fields);

    for line in page.outline(args.outline) {
        println!("{line}");
    }

    let values = Value::object([
        ("name", Value::from(page.value(fields.name))),
        ("city", Value::from(page.value(fields.city))),
        ("zip", Value::from(page.value(fields.zip))),
        ("notes", Value::from(page.value(fields.notes))),
        ("newsletter", Value::from(page.is_checked(fields.newsletter))),
    ]);
    println!("?{}", tools::serialize_value(&values));
    if let Some(ticket) = tools::random_up_to(9999.0) {
        println!("ticket #{ticket}");
    }

    let cleared = page.clean_fields(fields.form);
    let zip = Value::from(page.value(fields.zip));
    log::info!("reset {cleared} fields; zip empty: {}", tools::empty(&zip));
}

fn build_page(config: &BehaviorConfig) -> Option<(Page, Fields)> {
    let dom = Node::Document {
        id: Id::UNASSIGNED,
        doctype: Some("html".to_string()),
        children: Vec::new(),
    };
    let mut page = Page::new(dom);
    let root = page.dom().id();
    let marker = config.marker_attribute.as_str();

    let form = page.create_element("form", [("action", "/signup")])?;
    let form = page.append_child(root, form)?;

    let add = |page: &mut Page, tag: &str, attrs: Vec<(&str, &str)>| {
        let node = page.create_element(tag, attrs)?;
        page.append_child(form, node)
    };

    let name = add(
        &mut page,
        "input",
        vec![
            ("type", "text"),
            ("name", "name"),
            (marker, config.first_uppercase_marker.as_str()),
        ],
    )?;
    let city = add(
        &mut page,
        "input",
        vec![
            ("type", "text"),
            ("name", "city"),
            (marker, config.uppercase_marker.as_str()),
        ],
    )?;
    let zip = add(
        &mut page,
        "input",
        vec![
            ("type", "number"),
            ("name", "zip"),
            (marker, config.numeric_keyboard_marker.as_str()),
        ],
    )?;
    let notes = add(&mut page, "textarea", vec![("name", "notes")])?;
    let newsletter = add(&mut page, "input", vec![("type", "checkbox"), ("name", "newsletter")])?;

    Some((
        page,
        Fields {
            form,
            name,
            city,
            zip,
            notes,
            newsletter,
        },
    ))
}

fn replay(page: &mut Page, fields: &Fields) {
    let script: [(Id, &str); 4] = [
        (fields.name, "  élodie "),
        (fields.city, "gent"),
        (fields.zip, "9000"),
        (fields.notes, "\ncall after 5pm  \n"),
    ];
    for (id, text) in script {
        page.focus(id);
        page.type_text(id, text);
        page.blur(id);
        log::debug!("#{} -> {:?}", id.0, page.value(id).unwrap_or_default());
    }
    page.set_checked(fields.newsletter, true);
}
