//! Action dispatch — run the handler registered for a request
//!
//! Handler failures are classified here and never escape as errors: the
//! dispatcher always yields an `ActionResult`.

use crate::config::{UnknownAction, UnknownActionConfig};
use crate::error::ActionError;
use crate::registry::HandlerRegistry;
use crate::types::{ActionRequest, ActionResult, Payload};
use serde_json::Value;

/// Stands in for the action id in messages when the request carried none
pub const ABSENT_ACTION: &str = "None";

/// Routes `ActionRequest`s to handlers in a `HandlerRegistry`
#[derive(Debug, Clone)]
pub struct Dispatcher<'r> {
    registry: &'r HandlerRegistry,
    unknown: UnknownActionConfig,
}

impl<'r> Dispatcher<'r> {
    pub fn new(registry: &'r HandlerRegistry, unknown: UnknownActionConfig) -> Self {
        Self { registry, unknown }
    }

    pub fn registry(&self) -> &'r HandlerRegistry {
        self.registry
    }

    /// Dispatch a request to its handler
    pub fn dispatch(&self, request: &ActionRequest) -> ActionResult {
        let Some(action_id) = request.action_id.as_deref() else {
            return self.unknown_action(ABSENT_ACTION);
        };
        let Some(handler) = self.registry.get(action_id) else {
            return self.unknown_action(action_id);
        };

        tracing::info!(action = %action_id, "Dispatching action");
        for (name, value) in request.parameters.iter() {
            tracing::debug!(action = %action_id, param = %name, value = %value, "Action parameter");
        }

        match handler(&request.parameters) {
            Ok(payload) => ActionResult::Success(payload),
            Err(err) => {
                tracing::error!(
                    action = %action_id,
                    kind = %err.kind(),
                    error = %err,
                    "Action handler failed"
                );
                ActionResult::Failure(err.into())
            }
        }
    }

    fn unknown_action(&self, action_id: &str) -> ActionResult {
        let message = self.unknown.render(action_id);
        tracing::warn!(
            action = %action_id,
            policy = ?self.unknown.policy,
            "Unknown action requested"
        );

        match self.unknown.policy {
            UnknownAction::Report => {
                let mut payload = Payload::new();
                payload.insert("error".to_string(), Value::String(message));
                payload.insert(
                    self.unknown.available_key.clone(),
                    Value::Array(
                        self.registry
                            .names()
                            .iter()
                            .map(|n| Value::String(n.clone()))
                            .collect(),
                    ),
                );
                ActionResult::Success(payload)
            }
            UnknownAction::Reject => {
                ActionResult::Failure(ActionError::InvalidParameter(message).into())
            }
        }
    }
}
