//! Behavior configuration: which attribute carries the markers, the marker
//! tokens themselves, and where edge-whitespace trimming applies.
//!
//! ```toml
//! marker_attribute = "data-rc"
//! uppercase_marker = "uppercase"
//! first_uppercase_marker = "first-uppercase"
//! numeric_keyboard_marker = "numeric-keyboard"
//! trim_marker = "trim"
//! trim_scope = "all"   # "all" | "marked" | "off"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse behavior config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid `{field}`: {value:?} must be non-empty and contain no whitespace")]
    InvalidMarker { field: &'static str, value: String },
}

/// Which text widgets get edge-whitespace trimming.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrimScope {
    /// Every text input and textarea.
    #[default]
    All,
    /// Only widgets carrying the trim marker.
    Marked,
    Off,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BehaviorConfig {
    /// Attribute whose whitespace-separated tokens opt a widget into behaviors.
    pub marker_attribute: String,
    pub uppercase_marker: String,
    pub first_uppercase_marker: String,
    pub numeric_keyboard_marker: String,
    pub trim_marker: String,
    pub trim_scope: TrimScope,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            marker_attribute: "data-rc".to_string(),
            uppercase_marker: "uppercase".to_string(),
            first_uppercase_marker: "first-uppercase".to_string(),
            numeric_keyboard_marker: "numeric-keyboard".to_string(),
            trim_marker: "trim".to_string(),
            trim_scope: TrimScope::All,
        }
    }
}

impl BehaviorConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        log::debug!(target: "form_controls.config", "loaded behavior config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("marker_attribute", &self.marker_attribute),
            ("uppercase_marker", &self.uppercase_marker),
            ("first_uppercase_marker", &self.first_uppercase_marker),
            ("numeric_keyboard_marker", &self.numeric_keyboard_marker),
            ("trim_marker", &self.trim_marker),
        ];
        for (field, value) in fields {
            if value.is_empty() || value.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidMarker {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}
