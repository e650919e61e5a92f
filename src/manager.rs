//! The generated manager bundle.
//!
//! A [`Manager`] holds everything generated for one concern: the four
//! action type identifiers, the reverse identifier table, a creator per
//! phase and the transition table. It is assembled once by
//! [`crate::builder::create_manager`] and never changes afterwards.

use crate::core::{Action, Phase, PhaseActionCreator, PhaseMap, StoreState};
use crate::transitions::Transitions;
use serde_json::Value;
use std::collections::BTreeMap;
use std::ops::Deref;
use std::sync::Arc;
use tracing::trace;

/// Identifiers, names and creators of a manager.
///
/// This is the part of the bundle visible to transition builders, which
/// run before the transition table exists.
#[derive(Clone, PartialEq, Debug)]
pub struct ManagerCore {
    pub(crate) name: String,
    pub(crate) results_field: String,
    pub(crate) argument_names: Arc<[String]>,
    pub(crate) action_types: PhaseMap<String>,
    pub(crate) action_type_keys: BTreeMap<String, String>,
    pub(crate) actions: PhaseMap<PhaseActionCreator>,
}

impl ManagerCore {
    /// Concern name; also the key of this concern's slice in the store.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn results_field(&self) -> &str {
        &self.results_field
    }

    pub fn argument_names(&self) -> &[String] {
        &self.argument_names
    }

    /// Phase to action type identifier.
    pub fn action_types(&self) -> &PhaseMap<String> {
        &self.action_types
    }

    /// Every identifier mapped to itself.
    pub fn action_type_keys(&self) -> &BTreeMap<String, String> {
        &self.action_type_keys
    }

    /// Phase to action creator.
    pub fn actions(&self) -> &PhaseMap<PhaseActionCreator> {
        &self.actions
    }

    /// Phase an action type belongs to, if it is one of ours.
    pub fn phase_of(&self, action_type: &str) -> Option<Phase> {
        self.action_types
            .iter()
            .find(|(_, identifier)| identifier.as_str() == action_type)
            .map(|(phase, _)| phase)
    }

    pub fn initial<I: IntoIterator<Item = Value>>(&self, args: I) -> Action {
        self.actions.initial.create(args)
    }

    pub fn in_progress<I: IntoIterator<Item = Value>>(&self, args: I) -> Action {
        self.actions.in_progress.create(args)
    }

    pub fn success<I: IntoIterator<Item = Value>>(&self, args: I) -> Action {
        self.actions.success.create(args)
    }

    pub fn failure<I: IntoIterator<Item = Value>>(&self, args: I) -> Action {
        self.actions.failure.create(args)
    }

    /// Value of the first configured argument on `action`.
    pub fn primary_argument<'a>(&self, action: &'a Action) -> Option<&'a Value> {
        self.argument_names
            .first()
            .and_then(|argument| action.field(argument))
    }
}

/// Complete bundle for one concern.
///
/// Dereferences to [`ManagerCore`] for identifiers and creators. Cloning is
/// cheap: the bundle shares its data.
///
/// # Example
///
/// ```rust
/// use phaser::builder::ManagerBuilder;
/// use phaser::core::StoreState;
/// use serde_json::json;
///
/// let content = ManagerBuilder::new().name("CONTENT").build().unwrap();
///
/// let state = StoreState::new();
/// let state = content.reduce(&state, &content.in_progress(Vec::new()));
/// let state = content.reduce(&state, &content.success([json!({"title": "Hello"})]));
///
/// let slice = state.slice("CONTENT").unwrap();
/// assert_eq!(slice.status, "CONTENT_FETCH_SUCCESS");
/// assert_eq!(slice.results, json!({"title": "Hello"}));
/// ```
#[derive(Clone, Debug)]
pub struct Manager {
    core: Arc<ManagerCore>,
    transitions: Transitions,
}

impl Manager {
    pub(crate) fn new(core: ManagerCore, transitions: Transitions) -> Self {
        Self {
            core: Arc::new(core),
            transitions,
        }
    }

    pub fn core(&self) -> &ManagerCore {
        &self.core
    }

    pub fn transitions(&self) -> &Transitions {
        &self.transitions
    }

    /// Reducing function for this concern.
    ///
    /// Routes an action to the transition for its phase. For `initial` and
    /// `inProgress` the action's primary argument is passed as the seed.
    /// Actions of other concerns leave the state unchanged.
    pub fn reduce(&self, state: &StoreState, action: &Action) -> StoreState {
        let Some(phase) = self.phase_of(action.action_type()) else {
            trace!(
                manager = %self.name(),
                action_type = %action.action_type(),
                "action not handled by manager"
            );
            return state.clone();
        };

        let seed = match phase {
            Phase::Initial | Phase::InProgress => self.primary_argument(action),
            Phase::Success | Phase::Failure => None,
        };

        self.transitions.apply(phase, state, action, seed)
    }
}

impl Deref for Manager {
    type Target = ManagerCore;

    fn deref(&self) -> &ManagerCore {
        &self.core
    }
}
