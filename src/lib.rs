//! Phaser: boilerplate generator for fetch-lifecycle state
//!
//! Phaser turns a small configuration into everything needed to track one
//! asynchronous fetch in a unidirectional state container. The generation is
//! pure: no I/O, no shared state, and every bundle is immutable once built.
//!
//! # Core Concepts
//!
//! - **Phases**: `initial`, `inProgress`, `success` and `failure`, each with a
//!   fixed identifier suffix
//! - **Actions**: plain labeled records built by per-phase creators
//! - **Transitions**: pure `(state, action) -> state` functions, merge policy
//!   by default, replaceable through a builder hook
//! - **Effects**: the fetch boundary, run against an injected environment
//!
//! # Example
//!
//! ```rust
//! use phaser::builder::ManagerBuilder;
//! use phaser::core::StoreState;
//! use serde_json::json;
//!
//! let content = ManagerBuilder::new().name("CONTENT").build().unwrap();
//!
//! assert_eq!(content.action_types().success, "CONTENT_FETCH_SUCCESS");
//!
//! let state = StoreState::new();
//! let state = content.reduce(&state, &content.success([json!({"k1": "v1"})]));
//! let state = content.reduce(&state, &content.success([json!({"k2": "v2"})]));
//!
//! assert_eq!(
//!     state.slice("CONTENT").unwrap().results,
//!     json!({"k1": "v1", "k2": "v2"})
//! );
//! ```

pub mod builder;
pub mod core;
pub mod effects;
pub mod manager;
pub mod transitions;

// Re-export commonly used types
pub use builder::{create_manager, ConfigError, ManagerBuilder, ManagerConfig};
pub use crate::core::{make_action_creator, Action, ActionCreator, ConcernState, Phase, StoreState};
pub use manager::{Manager, ManagerCore};
pub use transitions::{merge_transitions, replace_transitions, Transitions};
