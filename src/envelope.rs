//! Response envelopes — the fixed wrapper the agent platform requires
//!
//! ```json
//! {
//!   "messageVersion": "1.0",
//!   "response": {
//!     "actionGroup": "...", "apiPath": "...", "httpMethod": "...",
//!     "httpStatusCode": 200,
//!     "responseBody": {"application/json": {"body": "<JSON text>"}}
//!   }
//! }
//! ```
//!
//! `body` is itself JSON-encoded text, not a nested object. The variant
//! carrying empty `sessionAttributes` / `promptSessionAttributes` maps is
//! selected through `EnvelopeConfig`.

use crate::config::EnvelopeConfig;
use crate::types::{timestamp, ActionFailure, ActionResult, InvocationEvent};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Envelope format version expected by the platform
pub const MESSAGE_VERSION: &str = "1.0";

/// Outbound response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub message_version: String,
    pub response: EnvelopeResponse,
}

impl ResponseEnvelope {
    pub fn status_code(&self) -> u16 {
        self.response.http_status_code
    }

    /// Raw JSON text of the body
    pub fn body(&self) -> &str {
        &self.response.response_body.application_json.body
    }

    /// Parse the body text back into JSON
    pub fn decode_body(&self) -> serde_json::Result<Value> {
        serde_json::from_str(self.body())
    }
}

/// `response` member of the envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeResponse {
    /// Serialized as `null` when unknown
    pub action_group: Option<String>,

    pub api_path: Option<String>,

    /// Echoed only for function-call events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,

    pub http_method: Option<String>,

    pub http_status_code: u16,

    pub response_body: ResponseBody,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_session_attributes: Option<Map<String, Value>>,
}

/// `responseBody` keyed by media type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseBody {
    #[serde(rename = "application/json")]
    pub application_json: JsonBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonBody {
    pub body: String,
}

/// Builds envelopes for one envelope variant
#[derive(Debug, Clone, Default)]
pub struct EnvelopeBuilder {
    config: EnvelopeConfig,
}

impl EnvelopeBuilder {
    pub fn new(config: EnvelopeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EnvelopeConfig {
        &self.config
    }

    /// Wrap a result; `event` is `None` when the inbound event could not
    /// be decoded
    pub fn build(
        &self,
        event: Option<&InvocationEvent>,
        result: &ActionResult,
    ) -> ResponseEnvelope {
        match result {
            ActionResult::Success(payload) => {
                let body = Value::Object(payload.clone()).to_string();
                self.wrap(event, 200, body)
            }
            ActionResult::Failure(failure) => self.failure(event, failure),
        }
    }

    fn failure(
        &self,
        event: Option<&InvocationEvent>,
        failure: &ActionFailure,
    ) -> ResponseEnvelope {
        let mut body = Map::new();
        body.insert("error".to_string(), Value::String(failure.message.clone()));
        if self.config.failure_timestamp {
            body.insert("timestamp".to_string(), Value::String(timestamp()));
        }

        let event = if self.config.echo_on_failure { event } else { None };
        self.wrap(event, failure.kind.status_code(), Value::Object(body).to_string())
    }

    fn wrap(&self, event: Option<&InvocationEvent>, status: u16, body: String) -> ResponseEnvelope {
        let fallback = self.config.fallback.as_ref();
        let echo = |field: fn(&InvocationEvent) -> Option<&String>| {
            event.and_then(field).cloned()
        };

        let (session_attributes, prompt_session_attributes) = if self.config.session_attributes {
            (Some(Map::new()), Some(Map::new()))
        } else {
            (None, None)
        };

        ResponseEnvelope {
            message_version: MESSAGE_VERSION.to_string(),
            response: EnvelopeResponse {
                action_group: echo(|e| e.action_group.as_ref())
                    .or_else(|| fallback.map(|f| f.action_group.clone())),
                api_path: echo(|e| e.api_path.as_ref())
                    .or_else(|| fallback.map(|f| f.api_path.clone())),
                function: echo(|e| e.function.as_ref()),
                http_method: echo(|e| e.http_method.as_ref())
                    .or_else(|| fallback.map(|f| f.http_method.clone())),
                http_status_code: status,
                response_body: ResponseBody {
                    application_json: JsonBody { body },
                },
                session_attributes,
                prompt_session_attributes,
            },
        }
    }
}
