//! Lifecycle phases of an asynchronous fetch.
//!
//! Every concern moves through the same four phases. Each phase owns a fixed
//! identifier suffix, and per-phase data is stored in a [`PhaseMap`] with one
//! named slot per phase so lookups are checked at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four fixed phases of an asynchronous operation.
///
/// # Example
///
/// ```rust
/// use phaser::core::Phase;
///
/// assert_eq!(Phase::InProgress.suffix(), "FETCH_IN_PROGRESS");
/// assert_eq!(Phase::Failure.identifier("CONTENT"), "CONTENT_FETCH_FAILED");
/// assert!(Phase::Failure.is_error());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Initial,
    InProgress,
    Success,
    Failure,
}

impl Phase {
    /// All phases in generation order.
    pub const ALL: [Phase; 4] = [
        Phase::Initial,
        Phase::InProgress,
        Phase::Success,
        Phase::Failure,
    ];

    /// Key used for this phase in serialized bundles.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::InProgress => "inProgress",
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }

    /// Fixed suffix appended to a concern name to form the action type.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Initial => "FETCH_INITIAL",
            Self::InProgress => "FETCH_IN_PROGRESS",
            Self::Success => "FETCH_SUCCESS",
            Self::Failure => "FETCH_FAILED",
        }
    }

    /// Action type identifier for this phase of the named concern.
    pub fn identifier(&self, name: &str) -> String {
        format!("{}_{}", name, self.suffix())
    }

    /// Whether the fetch has settled in this phase.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Success | Self::Failure)
    }

    /// Whether this phase records a failed fetch.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failure)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

/// A value for each of the four phases.
///
/// Replaces string-keyed lookup with one field per phase. Serializes as
/// `{"initial": .., "inProgress": .., "success": .., "failure": ..}`.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseMap<T> {
    pub initial: T,
    pub in_progress: T,
    pub success: T,
    pub failure: T,
}

impl<T> PhaseMap<T> {
    /// Build a map by computing each entry independently, in phase order.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Phase) -> T,
    {
        Self {
            initial: f(Phase::Initial),
            in_progress: f(Phase::InProgress),
            success: f(Phase::Success),
            failure: f(Phase::Failure),
        }
    }

    pub fn get(&self, phase: Phase) -> &T {
        match phase {
            Phase::Initial => &self.initial,
            Phase::InProgress => &self.in_progress,
            Phase::Success => &self.success,
            Phase::Failure => &self.failure,
        }
    }

    /// Replace the entry for one phase, returning the updated map.
    pub fn with(mut self, phase: Phase, value: T) -> Self {
        match phase {
            Phase::Initial => self.initial = value,
            Phase::InProgress => self.in_progress = value,
            Phase::Success => self.success = value,
            Phase::Failure => self.failure = value,
        }
        self
    }

    /// Iterate `(phase, value)` pairs in phase order.
    pub fn iter(&self) -> impl Iterator<Item = (Phase, &T)> {
        Phase::ALL.into_iter().map(move |phase| (phase, self.get(phase)))
    }

    pub fn map<U, F>(&self, mut f: F) -> PhaseMap<U>
    where
        F: FnMut(Phase, &T) -> U,
    {
        PhaseMap::from_fn(|phase| f(phase, self.get(phase)))
    }
}
