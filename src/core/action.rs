//! Labeled actions and the creators that build them.
//!
//! An action is a plain labeled record: a `type` string plus named fields
//! bound from positional arguments. Two creator flavours exist:
//!
//! - [`PhaseActionCreator`] binds only the positions that were supplied.
//! - [`ActionCreator`] binds every named field, using `null` for positions
//!   the caller left out.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Plain labeled action.
///
/// Serializes flat, as `{"type": "...", "<field>": ...}`.
///
/// # Example
///
/// ```rust
/// use phaser::core::Action;
/// use serde_json::json;
///
/// let action = Action::new("ADD_TODO").with_field("text", json!("write docs"));
///
/// assert_eq!(action.action_type(), "ADD_TODO");
/// assert_eq!(
///     serde_json::to_value(&action).unwrap(),
///     json!({ "type": "ADD_TODO", "text": "write docs" })
/// );
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    action_type: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Action {
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            fields: Map::new(),
        }
    }

    /// Set a field, returning the updated action.
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// The conventional `payload` field.
    pub fn payload(&self) -> Option<&Value> {
        self.field("payload")
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// Creator for one lifecycle phase of a manager.
///
/// Presence is decided by call arity: a position is bound when the caller
/// supplied it, whatever its value. `0`, `""`, `false` and `null` are all
/// kept. Use [`create_sparse`](Self::create_sparse) to skip a middle slot.
#[derive(Clone, PartialEq, Debug)]
pub struct PhaseActionCreator {
    action_type: String,
    argument_names: Arc<[String]>,
}

impl PhaseActionCreator {
    pub(crate) fn new(action_type: String, argument_names: Arc<[String]>) -> Self {
        Self {
            action_type,
            argument_names,
        }
    }

    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    pub fn argument_names(&self) -> &[String] {
        &self.argument_names
    }

    /// Build an action from positional arguments.
    ///
    /// Trailing names without a matching argument are omitted. Arguments
    /// beyond the configured names are ignored.
    pub fn create<I>(&self, args: I) -> Action
    where
        I: IntoIterator<Item = Value>,
    {
        self.create_sparse(args.into_iter().map(Some))
    }

    /// Build an action where `None` marks an absent position.
    pub fn create_sparse<I>(&self, args: I) -> Action
    where
        I: IntoIterator<Item = Option<Value>>,
    {
        self.argument_names
            .iter()
            .zip(args)
            .fold(Action::new(self.action_type.clone()), |action, (name, arg)| {
                match arg {
                    Some(value) => action.with_field(name.clone(), value),
                    None => action,
                }
            })
    }
}

/// Creator that always stamps a fixed type and sets every named field.
///
/// Positions the caller did not supply are set to `null`.
///
/// # Example
///
/// ```rust
/// use phaser::core::make_action_creator;
/// use serde_json::json;
///
/// let add_todo = make_action_creator("ADD_TODO", ["text", "done"]);
/// let action = add_todo.create([json!("write docs")]);
///
/// assert_eq!(
///     serde_json::to_value(&action).unwrap(),
///     json!({ "type": "ADD_TODO", "text": "write docs", "done": null })
/// );
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct ActionCreator {
    action_type: String,
    argument_names: Vec<String>,
}

impl ActionCreator {
    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    pub fn argument_names(&self) -> &[String] {
        &self.argument_names
    }

    pub fn create<I>(&self, args: I) -> Action
    where
        I: IntoIterator<Item = Value>,
    {
        let mut args = args.into_iter();
        self.argument_names
            .iter()
            .fold(Action::new(self.action_type.clone()), |action, name| {
                let value = args.next().unwrap_or(Value::Null);
                action.with_field(name.clone(), value)
            })
    }
}

/// Create a standalone action creator for a fixed action type.
pub fn make_action_creator<T, I, N>(action_type: T, argument_names: I) -> ActionCreator
where
    T: Into<String>,
    I: IntoIterator<Item = N>,
    N: Into<String>,
{
    ActionCreator {
        action_type: action_type.into(),
        argument_names: argument_names.into_iter().map(Into::into).collect(),
    }
}
