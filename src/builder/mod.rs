//! Manager construction.
//!
//! [`create_manager`] turns a [`ManagerConfig`] into an immutable
//! [`Manager`]. [`ManagerBuilder`] offers the same through a fluent API.
//! Every configuration problem is reported synchronously as a
//! [`ConfigError`]; nothing is defaulted silently.

pub mod config;
pub mod error;
pub mod manager;

pub use config::ManagerConfig;
pub use error::ConfigError;
pub use manager::ManagerBuilder;

use crate::core::{PhaseActionCreator, PhaseMap};
use crate::manager::{Manager, ManagerCore};
use crate::transitions::merge_transitions;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Build a manager from its configuration.
///
/// Identifiers and creators for the four phases are computed first; the
/// transition builder (custom or [`merge_transitions`]) then runs against
/// them and its table is attached last.
///
/// # Example
///
/// ```
/// use phaser::builder::{create_manager, ManagerConfig};
///
/// let content = create_manager(ManagerConfig::new("CONTENT")).unwrap();
///
/// assert_eq!(content.name(), "CONTENT");
/// assert_eq!(content.action_types().initial, "CONTENT_FETCH_INITIAL");
/// assert_eq!(content.action_types().failure, "CONTENT_FETCH_FAILED");
/// ```
pub fn create_manager(config: ManagerConfig) -> Result<Manager, ConfigError> {
    let name = config.validate()?.to_string();
    let argument_names: Arc<[String]> = config.argument_names.into();

    let action_types = PhaseMap::from_fn(|phase| phase.identifier(&name));
    let action_type_keys: BTreeMap<String, String> = action_types
        .iter()
        .map(|(_, identifier)| (identifier.clone(), identifier.clone()))
        .collect();
    let actions = action_types.map(|_, identifier| {
        PhaseActionCreator::new(identifier.clone(), Arc::clone(&argument_names))
    });

    let core = ManagerCore {
        name,
        results_field: config.results_field_name,
        argument_names,
        action_types,
        action_type_keys,
        actions,
    };

    let custom_transitions = config.transition_builder.is_some();
    let transitions = match config.transition_builder {
        Some(builder) => builder(&core, &core.results_field),
        None => merge_transitions(&core, &core.results_field),
    };

    debug!(
        manager = %core.name,
        results_field = %core.results_field,
        custom_transitions,
        "built manager"
    );

    Ok(Manager::new(core, transitions))
}
