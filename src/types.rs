//! Core invocation types for agent-actions
//!
//! Inbound events use the platform's camelCase field names. Handler
//! payloads are plain JSON objects.

use crate::error::{ActionError, FailureKind, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Payload returned by a handler: an arbitrary JSON object
pub type Payload = Map<String, Value>;

/// Media type key used in request and response bodies
pub const APPLICATION_JSON: &str = "application/json";

/// The structured request delivered by the agent platform on each call
///
/// Two parameter encodings exist: a `requestBody` carrying a list of
/// properties (API-schema action groups) and a `function` plus
/// `parameters` pair (function-details action groups).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_version: Option<String>,

    /// Logical action group name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_group: Option<String>,

    /// API path of the operation (API-schema action groups)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_path: Option<String>,

    /// Function name (function-details action groups)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ParameterPayload>,

    /// Agent descriptor, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_text: Option<String>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub session_attributes: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub prompt_session_attributes: Map<String, Value>,
}

impl InvocationEvent {
    /// Decode an event from raw JSON
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Properties under `requestBody.content["application/json"]`, if any
    pub fn properties(&self) -> Option<&[Property]> {
        self.request_body
            .as_ref()
            .and_then(|body| body.content.get(APPLICATION_JSON))
            .map(|media| media.properties.as_slice())
    }
}

/// `requestBody` of an API-schema invocation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestBody {
    /// Media type → content
    #[serde(default)]
    pub content: HashMap<String, MediaContent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaContent {
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// A single `{name, type, value}` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,

    /// Declared parameter type, informational only
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default)]
    pub value: Value,
}

impl Property {
    /// Build a string-valued property
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
            value: Value::String(value.into()),
        }
    }
}

/// `parameters` of a function-details invocation
///
/// Accepted either as a flat name → value mapping or as the list of
/// properties the platform sends.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterPayload {
    Map(Map<String, Value>),
    List(Vec<Property>),
}

/// Normalized parameter mapping handed to handlers
///
/// Every name maps to exactly one value; later writes replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    values: HashMap<String, String>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the one it replaced
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(name.into(), value.into())
    }

    /// Insert a raw JSON value; `null` is treated as absent
    pub fn insert_json(&mut self, name: impl Into<String>, value: &Value) {
        if let Some(text) = render_value(value) {
            self.values.insert(name.into(), text);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Value for `name`, or `default` when absent
    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    /// Value for `name`, failing with `MissingParameter` when absent
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| ActionError::MissingParameter(format!("'{}'", name)))
    }

    /// Parse `name` as a finite float, or return `default` when absent
    pub fn parse_f64_or(&self, name: &str, default: f64) -> Result<f64> {
        let Some(raw) = self.get(name) else {
            return Ok(default);
        };
        let parsed: f64 = raw.trim().parse().map_err(|_| {
            ActionError::InvalidParameter(format!(
                "could not convert {} to float: '{}'",
                name, raw
            ))
        })?;
        if !parsed.is_finite() {
            return Err(ActionError::InvalidParameter(format!(
                "{} must be a finite number: '{}'",
                name, raw
            )));
        }
        Ok(parsed)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Parameters::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Render a JSON value as a parameter string
///
/// Strings are taken verbatim, `null` is absent, anything else keeps its
/// JSON text (`30`, `true`, `[1,2]`).
fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Normalized request: which action to run and with what parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionRequest {
    /// Action identifier; absent when the event did not name one
    pub action_id: Option<String>,
    pub parameters: Parameters,
}

impl ActionRequest {
    pub fn new(action_id: impl Into<String>, parameters: Parameters) -> Self {
        Self {
            action_id: Some(action_id.into()),
            parameters,
        }
    }
}

/// A classified failure raised by a handler or the dispatch path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl From<ActionError> for ActionFailure {
    fn from(err: ActionError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Outcome of dispatching one action
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    Success(Payload),
    Failure(ActionFailure),
}

impl ActionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ActionResult::Success(_))
    }

    pub fn payload(&self) -> Option<&Payload> {
        match self {
            ActionResult::Success(payload) => Some(payload),
            ActionResult::Failure(_) => None,
        }
    }
}

impl From<Result<Payload>> for ActionResult {
    fn from(result: Result<Payload>) -> Self {
        match result {
            Ok(payload) => ActionResult::Success(payload),
            Err(err) => ActionResult::Failure(err.into()),
        }
    }
}

/// Current UTC time as an ISO-8601 timestamp (no offset, microseconds)
pub fn timestamp() -> String {
    chrono::Utc::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}
