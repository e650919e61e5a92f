//! Configuration errors raised while building a manager.

use thiserror::Error;

/// Errors that can occur when building a manager from its configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Manager name not specified. Call .name(name) before .build()")]
    MissingName,

    #[error("Manager name must not be empty")]
    EmptyName,

    #[error("Manager name '{name}' contains invalid character {character:?}")]
    InvalidNameCharacter { name: String, character: char },

    #[error("Manager name '{name}' must not start or end with the '_' separator")]
    NameEdgeSeparator { name: String },

    #[error("Results field name must not be empty")]
    EmptyResultsField,

    #[error("Results field name '{field}' collides with a state slice field")]
    ReservedResultsField { field: String },

    #[error("Argument name at position {position} is empty")]
    EmptyArgumentName { position: usize },

    #[error("Argument name '{argument}' collides with the action type field")]
    ReservedArgumentName { argument: String },

    #[error("Argument name '{argument}' is declared more than once")]
    DuplicateArgumentName { argument: String },

    #[error("Failed to parse manager configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
