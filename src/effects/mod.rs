//! Effectful boundary around the pure core.
//!
//! The network transport itself is not part of this crate. An environment
//! supplies it through [`FetchEnv`], and the effects here describe how a
//! fetch outcome is reported and folded into a manager's phase actions.
//!
//! # Key Concepts
//!
//! - **Environment**: the transport capability, injected at run time
//! - **Effects**: lazy descriptions of a fetch, run with `.run(&env).await`
//! - **Logger**: optional receiver of `"Fetch Failed"` reports
//!
//! # Example
//!
//! ```rust
//! use phaser::builder::ManagerBuilder;
//! use phaser::effects::{fetch_action, FetchEnv, FetchError, FetchRequest};
//! use serde_json::Value;
//! use stillwater::effect::Effect;
//! use stillwater::prelude::*;
//!
//! #[derive(Clone)]
//! struct OfflineEnv;
//!
//! impl FetchEnv for OfflineEnv {
//!     fn fetch(&self, _request: &FetchRequest) -> Result<Value, FetchError> {
//!         Err(FetchError::Transport("offline".to_string()))
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let content = ManagerBuilder::new().name("CONTENT").build().unwrap();
//! let action = fetch_action(&content, FetchRequest::new("/content"))
//!     .run(&OfflineEnv)
//!     .await
//!     .unwrap();
//!
//! assert_eq!(action.action_type(), "CONTENT_FETCH_FAILED");
//! # }
//! ```

mod fetch;

pub use fetch::{
    fetch, fetch_action, FetchEnv, FetchError, FetchLogger, FetchMethod, FetchRequest,
    TracingLogger,
};
