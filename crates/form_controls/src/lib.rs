//! Form widget behaviors over the `html` DOM model.
//!
//! Live widget state (value, caret, selection, checked) is held in an
//! [`input_core::InputValueStore`]; the DOM only carries attributes. A
//! [`Page`] ties the two together and routes host events to the listeners
//! installed by [`Page::install`].

pub mod behaviors;
pub mod config;

mod dom;
mod page;
mod reset;
mod seed;
mod user_agent;

pub use behaviors::{EventKind, Listener};
pub use config::{BehaviorConfig, ConfigError, TrimScope};
pub use dom::{
    InputControlType, from_input_id, input_control_type, is_disabled, is_plain_text_field, is_select,
    is_text_entry, is_textarea, to_input_id,
};
pub use page::{InstallReport, Page};
pub use reset::clean_fields;
pub use seed::seed_input_state_from_dom;
pub use user_agent::UserAgentQuirks;

#[cfg(test)]
mod tests;
