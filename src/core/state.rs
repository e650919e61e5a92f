//! Per-concern state slices and the application state that holds them.
//!
//! All values are immutable: every update returns a new value and leaves
//! the original untouched.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// State slice for one concern.
///
/// The results live in a single named field. The key used for that field
/// when the slice is serialized comes from the manager configuration
/// (`"results"` by default), so the rendered shape is
/// `{"<results field>": .., "status": .., "error": ..}`.
#[derive(Clone, PartialEq, Debug)]
pub struct ConcernState {
    results_field: String,
    pub results: Value,
    pub status: String,
    pub error: Option<Value>,
}

impl ConcernState {
    pub fn new(results_field: impl Into<String>, results: Value, status: impl Into<String>) -> Self {
        Self {
            results_field: results_field.into(),
            results,
            status: status.into(),
            error: None,
        }
    }

    /// Set the error, returning the updated slice.
    pub fn with_error(mut self, error: Value) -> Self {
        self.error = Some(error);
        self
    }

    /// Key the results are rendered under.
    pub fn results_field(&self) -> &str {
        &self.results_field
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl Serialize for ConcernState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(&self.results_field, &self.results)?;
        map.serialize_entry("status", &self.status)?;
        map.serialize_entry("error", &self.error)?;
        map.end()
    }
}

/// Application state: concern name to slice.
///
/// # Example
///
/// ```rust
/// use phaser::core::{ConcernState, StoreState};
/// use serde_json::json;
///
/// let state = StoreState::new();
/// let slice = ConcernState::new("results", json!({}), "CONTENT_FETCH_INITIAL");
/// let next = state.with_slice("CONTENT", slice);
///
/// assert!(state.is_empty());
/// assert_eq!(next.slice("CONTENT").unwrap().status, "CONTENT_FETCH_INITIAL");
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct StoreState {
    slices: BTreeMap<String, ConcernState>,
}

impl StoreState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slice(&self, name: &str) -> Option<&ConcernState> {
        self.slices.get(name)
    }

    /// Return a new state with `name` bound to `slice`.
    ///
    /// Other concerns are carried over unchanged.
    pub fn with_slice(&self, name: impl Into<String>, slice: ConcernState) -> Self {
        let mut slices = self.slices.clone();
        slices.insert(name.into(), slice);
        Self { slices }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slices.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// Shallow merge: fields of `update` overwrite fields of `base`.
///
/// When either side is not an object the update replaces the base.
pub fn merge_results(base: &Value, update: &Value) -> Value {
    match (base, update) {
        (Value::Object(base), Value::Object(update)) => {
            let mut merged = base.clone();
            for (key, value) in update {
                merged.insert(key.clone(), value.clone());
            }
            Value::Object(merged)
        }
        _ => update.clone(),
    }
}

/// Fill fields missing from `existing` with those from `defaults`.
///
/// Existing fields are never overwritten. A `null` existing value takes the
/// defaults wholesale, and a non-object existing value is kept as is.
pub fn fill_results(existing: &Value, defaults: &Value) -> Value {
    match (existing, defaults) {
        (Value::Null, _) => defaults.clone(),
        (Value::Object(existing), Value::Object(defaults)) => {
            let mut filled: Map<String, Value> = defaults.clone();
            for (key, value) in existing {
                filled.insert(key.clone(), value.clone());
            }
            Value::Object(filled)
        }
        _ => existing.clone(),
    }
}
