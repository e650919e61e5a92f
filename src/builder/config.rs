//! Manager configuration and its validation rules.

use crate::builder::error::ConfigError;
use crate::transitions::TransitionBuilderFn;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

pub const DEFAULT_RESULTS_FIELD: &str = "results";
pub const DEFAULT_ARGUMENT_NAME: &str = "payload";

const RESERVED_SLICE_FIELDS: [&str; 2] = ["status", "error"];
const ACTION_TYPE_FIELD: &str = "type";

/// Configuration for a single concern.
///
/// Deserializes from the camelCase document shape
/// `{"name": .., "resultsFieldName": .., "argumentNames": [..]}`. The
/// transition builder hook can only be supplied from code.
///
/// # Example
///
/// ```rust
/// use phaser::builder::ManagerConfig;
///
/// let config = ManagerConfig::from_json(r#"{ "name": "CONTENT" }"#).unwrap();
///
/// assert_eq!(config.name.as_deref(), Some("CONTENT"));
/// assert_eq!(config.results_field_name, "results");
/// assert_eq!(config.argument_names, vec!["payload".to_string()]);
/// ```
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerConfig {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default = "default_results_field")]
    pub results_field_name: String,

    #[serde(default = "default_argument_names")]
    pub argument_names: Vec<String>,

    #[serde(skip)]
    pub transition_builder: Option<TransitionBuilderFn>,
}

fn default_results_field() -> String {
    DEFAULT_RESULTS_FIELD.to_string()
}

fn default_argument_names() -> Vec<String> {
    vec![DEFAULT_ARGUMENT_NAME.to_string()]
}

impl ManagerConfig {
    /// Configuration with defaults for everything but the name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Parse a configuration document.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }

    /// Check every rule, returning the validated name.
    pub(crate) fn validate(&self) -> Result<&str, ConfigError> {
        let name = self.name.as_deref().ok_or(ConfigError::MissingName)?;
        validate_name(name)?;
        validate_results_field(&self.results_field_name)?;
        validate_argument_names(&self.argument_names)?;
        Ok(name)
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            name: None,
            results_field_name: default_results_field(),
            argument_names: default_argument_names(),
            transition_builder: None,
        }
    }
}

impl fmt::Debug for ManagerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagerConfig")
            .field("name", &self.name)
            .field("results_field_name", &self.results_field_name)
            .field("argument_names", &self.argument_names)
            .field("custom_transitions", &self.transition_builder.is_some())
            .finish()
    }
}

/// A usable name is non-empty ASCII alphanumerics and `_`, and does not
/// start or end with the `_` separator.
pub fn validate_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::EmptyName);
    }

    if let Some(character) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        return Err(ConfigError::InvalidNameCharacter {
            name: name.to_string(),
            character,
        });
    }

    if name.starts_with('_') || name.ends_with('_') {
        return Err(ConfigError::NameEdgeSeparator {
            name: name.to_string(),
        });
    }

    Ok(())
}

fn validate_results_field(field: &str) -> Result<(), ConfigError> {
    if field.is_empty() {
        return Err(ConfigError::EmptyResultsField);
    }

    if RESERVED_SLICE_FIELDS.contains(&field) {
        return Err(ConfigError::ReservedResultsField {
            field: field.to_string(),
        });
    }

    Ok(())
}

fn validate_argument_names(names: &[String]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for (position, argument) in names.iter().enumerate() {
        if argument.is_empty() {
            return Err(ConfigError::EmptyArgumentName { position });
        }

        if argument == ACTION_TYPE_FIELD {
            return Err(ConfigError::ReservedArgumentName {
                argument: argument.clone(),
            });
        }

        if !seen.insert(argument.as_str()) {
            return Err(ConfigError::DuplicateArgumentName {
                argument: argument.clone(),
            });
        }
    }

    Ok(())
}
