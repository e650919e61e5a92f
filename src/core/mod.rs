//! Core value types.
//!
//! This module contains the pure data model shared by every manager:
//! - Lifecycle phases and per-phase maps
//! - Labeled actions and their creators
//! - Immutable state slices
//!
//! Nothing here performs I/O or holds shared mutable state.

mod action;
mod phase;
mod state;

pub use action::{make_action_creator, Action, ActionCreator, PhaseActionCreator};
pub use phase::{Phase, PhaseMap};
pub use state::{fill_results, merge_results, ConcernState, StoreState};
