//! State transition tables.
//!
//! A manager carries one transition per lifecycle phase. Each transition is
//! a pure function `(state, action, seed) -> state`: it never mutates its
//! input and returns the next application state.
//!
//! The default table follows the merge policy (see [`merge_transitions`]).
//! The replace policy ([`replace_transitions`]) or any custom table can be
//! selected through the transition builder hook on the configuration.

mod policy;

pub use policy::{merge_transitions, replace_transitions};

use crate::core::{Action, ConcernState, Phase, PhaseMap, StoreState};
use crate::manager::ManagerCore;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// A single state transition.
///
/// The seed is caller-supplied data for the results slot, used by the
/// phases that do not carry results in their action.
pub type TransitionFn =
    Arc<dyn Fn(&StoreState, &Action, Option<&Value>) -> StoreState + Send + Sync>;

/// Hook that produces a manager's transition table.
///
/// Receives the manager's generated identifiers, names and creators, plus
/// the configured results field name.
pub type TransitionBuilderFn = Arc<dyn Fn(&ManagerCore, &str) -> Transitions + Send + Sync>;

/// Transition for each phase, any of which may be absent.
///
/// Applying an absent transition leaves the state unchanged.
///
/// # Example
///
/// ```rust
/// use phaser::core::{Action, Phase, StoreState};
/// use phaser::transitions::Transitions;
///
/// let transitions = Transitions::new().on(Phase::Success, |state: &StoreState, _action: &Action, _seed| {
///     state.clone()
/// });
///
/// assert!(transitions.handles(Phase::Success));
/// assert!(!transitions.handles(Phase::Failure));
/// ```
#[derive(Clone, Default)]
pub struct Transitions {
    table: PhaseMap<Option<TransitionFn>>,
}

impl Transitions {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the transition for one phase, returning the updated table.
    pub fn on<F>(self, phase: Phase, transition: F) -> Self
    where
        F: Fn(&StoreState, &Action, Option<&Value>) -> StoreState + Send + Sync + 'static,
    {
        Self {
            table: self.table.with(phase, Some(Arc::new(transition))),
        }
    }

    pub fn get(&self, phase: Phase) -> Option<&TransitionFn> {
        self.table.get(phase).as_ref()
    }

    pub fn handles(&self, phase: Phase) -> bool {
        self.get(phase).is_some()
    }

    /// Run the transition for `phase`.
    pub fn apply(
        &self,
        phase: Phase,
        state: &StoreState,
        action: &Action,
        seed: Option<&Value>,
    ) -> StoreState {
        match self.get(phase) {
            Some(transition) => transition(state, action, seed),
            None => state.clone(),
        }
    }

    pub fn initial(&self, state: &StoreState, action: &Action, seed: Option<&Value>) -> StoreState {
        self.apply(Phase::Initial, state, action, seed)
    }

    pub fn in_progress(
        &self,
        state: &StoreState,
        action: &Action,
        seed: Option<&Value>,
    ) -> StoreState {
        self.apply(Phase::InProgress, state, action, seed)
    }

    pub fn success(&self, state: &StoreState, action: &Action) -> StoreState {
        self.apply(Phase::Success, state, action, None)
    }

    pub fn failure(&self, state: &StoreState, action: &Action, seed: Option<&Value>) -> StoreState {
        self.apply(Phase::Failure, state, action, seed)
    }
}

impl fmt::Debug for Transitions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handled: Vec<Phase> = self
            .table
            .iter()
            .filter(|(_, transition)| transition.is_some())
            .map(|(phase, _)| phase)
            .collect();
        f.debug_struct("Transitions")
            .field("handled", &handled)
            .finish()
    }
}

/// What a built-in transition needs to know about its manager.
#[derive(Clone, Debug)]
pub(crate) struct SliceContext {
    name: String,
    results_field: String,
    statuses: PhaseMap<String>,
    primary_argument: Option<String>,
}

impl SliceContext {
    pub(crate) fn new(core: &ManagerCore, results_field: &str) -> Self {
        Self {
            name: core.name().to_string(),
            results_field: results_field.to_string(),
            statuses: core.action_types().clone(),
            primary_argument: core.argument_names().first().cloned(),
        }
    }

    /// Results currently held by this concern, if it has a slice.
    pub(crate) fn current_results<'a>(&self, state: &'a StoreState) -> Option<&'a Value> {
        state.slice(&self.name).map(|slice| &slice.results)
    }

    /// Value carried by the action's primary argument.
    pub(crate) fn payload<'a>(&self, action: &'a Action) -> Option<&'a Value> {
        self.primary_argument
            .as_deref()
            .and_then(|argument| action.field(argument))
    }

    pub(crate) fn commit(
        &self,
        state: &StoreState,
        phase: Phase,
        results: Value,
        error: Option<Value>,
    ) -> StoreState {
        let slice = ConcernState::new(
            self.results_field.clone(),
            results,
            self.statuses.get(phase).clone(),
        );
        let slice = match error {
            Some(error) => slice.with_error(error),
            None => slice,
        };
        state.with_slice(self.name.clone(), slice)
    }
}

/// Results slot for a concern that has nothing loaded yet.
pub(crate) fn empty_results() -> Value {
    Value::Object(Map::new())
}
