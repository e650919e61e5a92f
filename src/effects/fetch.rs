//! Fetch requests and the effects that run them.

use crate::core::Action;
use crate::manager::Manager;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use stillwater::effect::Effect;
use stillwater::prelude::*;
use tracing::error;

/// HTTP method of a fetch.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FetchMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl FetchMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl FromStr for FetchMethod {
    type Err = std::convert::Infallible;

    /// Case-insensitive. Anything unrecognised means GET.
    fn from_str(method: &str) -> Result<Self, Self::Err> {
        let method = match method.to_ascii_uppercase().as_str() {
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "PATCH" => Self::Patch,
            "DELETE" => Self::Delete,
            _ => Self::Get,
        };
        Ok(method)
    }
}

impl fmt::Display for FetchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors reported by a fetch transport.
#[derive(Clone, Debug, PartialEq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FetchError {
    #[error("Transport failed: {0}")]
    Transport(String),

    #[error("Request failed with status {status}")]
    Status { status: u16, body: Option<Value> },

    #[error("Response could not be decoded: {0}")]
    Decode(String),
}

impl FetchError {
    /// Error as a failure action payload.
    pub fn to_payload(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::String(self.to_string()))
    }
}

/// Receiver for fetch failure reports.
pub trait FetchLogger: Send + Sync {
    fn error(&self, err: &FetchError, message: &str);
}

/// Logger that reports through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl FetchLogger for TracingLogger {
    fn error(&self, err: &FetchError, message: &str) {
        error!(err = %err, "{}", message);
    }
}

/// One fetch call.
///
/// # Example
///
/// ```rust
/// use phaser::effects::{FetchMethod, FetchRequest};
/// use serde_json::json;
///
/// let request = FetchRequest::new("/api/content")
///     .method("post".parse::<FetchMethod>().unwrap())
///     .data(json!({"page": 2}))
///     .name("Content");
///
/// assert_eq!(request.method, FetchMethod::Post);
/// assert_eq!(request.failure_message(), "Fetch Content Failed");
/// ```
#[derive(Clone)]
pub struct FetchRequest {
    pub url: String,
    pub method: FetchMethod,
    pub data: Option<Value>,
    pub name: Option<String>,
    logger: Option<Arc<dyn FetchLogger>>,
}

impl FetchRequest {
    /// GET request for `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: FetchMethod::default(),
            data: None,
            name: None,
            logger: None,
        }
    }

    pub fn method(mut self, method: FetchMethod) -> Self {
        self.method = method;
        self
    }

    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Name used in the failure message.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Report failures to `logger`. Without one, failures are not reported.
    pub fn logger(mut self, logger: Arc<dyn FetchLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn failure_message(&self) -> String {
        match &self.name {
            Some(name) => format!("Fetch {} Failed", name),
            None => "Fetch Failed".to_string(),
        }
    }

    fn report(&self, err: &FetchError) {
        if let Some(logger) = &self.logger {
            logger.error(err, &self.failure_message());
        }
    }
}

impl fmt::Debug for FetchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchRequest")
            .field("url", &self.url)
            .field("method", &self.method)
            .field("data", &self.data)
            .field("name", &self.name)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}

/// Transport capability an environment provides.
///
/// Implementations perform exactly one call per invocation and resolve to
/// the decoded response payload.
pub trait FetchEnv {
    fn fetch(&self, request: &FetchRequest) -> Result<Value, FetchError>;
}

/// Effect that performs `request` and yields the response payload.
///
/// Failures are reported to the request's logger before being returned.
pub fn fetch<Env>(request: FetchRequest) -> impl Effect<Output = Value, Error = FetchError, Env = Env>
where
    Env: FetchEnv + Clone + Send + Sync + 'static,
{
    from_fn(move |env: &Env| {
        env.fetch(&request).inspect_err(|err| request.report(err))
    })
}

/// Effect that performs `request` and folds the outcome into an action.
///
/// Yields the manager's `success` action carrying the response payload, or
/// its `failure` action carrying [`FetchError::to_payload`].
pub fn fetch_action<Env>(
    manager: &Manager,
    request: FetchRequest,
) -> impl Effect<Output = Action, Error = FetchError, Env = Env>
where
    Env: FetchEnv + Clone + Send + Sync + 'static,
{
    let success = manager.actions().success.clone();
    let failure = manager.actions().failure.clone();

    from_fn(move |env: &Env| {
        let action = match env.fetch(&request) {
            Ok(payload) => success.create([payload]),
            Err(err) => {
                request.report(&err);
                failure.create([err.to_payload()])
            }
        };
        Ok::<_, FetchError>(action)
    })
}
