//! Builder for constructing managers.

use crate::builder::config::ManagerConfig;
use crate::builder::create_manager;
use crate::builder::error::ConfigError;
use crate::manager::{Manager, ManagerCore};
use crate::transitions::Transitions;
use std::sync::Arc;

/// Builder for constructing managers with a fluent API.
#[derive(Debug, Default)]
pub struct ManagerBuilder {
    config: ManagerConfig,
}

impl ManagerBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: ManagerConfig) -> Self {
        Self { config }
    }

    /// Set the concern name (required).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = Some(name.into());
        self
    }

    /// Set the key results are stored under (default `"results"`).
    pub fn results_field(mut self, field: impl Into<String>) -> Self {
        self.config.results_field_name = field.into();
        self
    }

    /// Set the ordered argument names (default `["payload"]`).
    pub fn argument_names<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.config.argument_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the default transitions with a custom table builder.
    pub fn transitions<F>(mut self, builder: F) -> Self
    where
        F: Fn(&ManagerCore, &str) -> Transitions + Send + Sync + 'static,
    {
        self.config.transition_builder = Some(Arc::new(builder));
        self
    }

    /// Build the manager.
    /// Returns an error if the configuration is unusable.
    pub fn build(self) -> Result<Manager, ConfigError> {
        create_manager(self.config)
    }
}
