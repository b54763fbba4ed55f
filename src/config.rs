//! Action group configuration
//!
//! One `GroupConfig` describes a deployment. Presets exist for the two
//! shipped action groups.

use crate::error::{ActionError, Result};
use crate::extract::DEFAULT_SELECTOR;
use serde::{Deserialize, Serialize};

/// What to do when an action id has no registered handler
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownAction {
    /// Answer 200 with an error-shaped payload listing the available actions
    #[default]
    Report,
    /// Fail with `InvalidParameter` (400)
    Reject,
}

/// Unknown-action handling for a deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnknownActionConfig {
    #[serde(default)]
    pub policy: UnknownAction,

    /// Message template; `{action}` is replaced by the requested id
    pub message: String,

    /// Payload key holding the list of registered action ids
    pub available_key: String,
}

impl Default for UnknownActionConfig {
    fn default() -> Self {
        Self {
            policy: UnknownAction::Report,
            message: "Unknown action type: {action}".to_string(),
            available_key: "available_actions".to_string(),
        }
    }
}

impl UnknownActionConfig {
    /// Render the message for a requested action id
    pub fn render(&self, action_id: &str) -> String {
        self.message.replace("{action}", action_id)
    }
}

/// Identity values used when the inbound event does not carry them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityFallback {
    pub action_group: String,
    pub api_path: String,
    pub http_method: String,
}

/// Envelope variant selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeConfig {
    /// Emit empty `sessionAttributes` / `promptSessionAttributes` maps
    #[serde(default)]
    pub session_attributes: bool,

    /// Fallback identity; `None` leaves absent fields as `null`
    #[serde(default)]
    pub fallback: Option<IdentityFallback>,

    /// Echo the event's identity fields on failure envelopes too
    #[serde(default = "default_true")]
    pub echo_on_failure: bool,

    /// Add a `timestamp` to failure bodies
    #[serde(default)]
    pub failure_timestamp: bool,
}

fn default_true() -> bool {
    true
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            session_attributes: false,
            fallback: None,
            echo_on_failure: true,
            failure_timestamp: false,
        }
    }
}

/// Configuration for one action group deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupConfig {
    /// Deployment name, used in logs
    pub name: String,

    /// Property naming the action in properties-list events
    #[serde(default = "default_selector")]
    pub selector_property: String,

    #[serde(default)]
    pub unknown_action: UnknownActionConfig,

    #[serde(default)]
    pub envelope: EnvelopeConfig,
}

fn default_selector() -> String {
    DEFAULT_SELECTOR.to_string()
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            name: "actions".to_string(),
            selector_property: default_selector(),
            unknown_action: UnknownActionConfig::default(),
            envelope: EnvelopeConfig::default(),
        }
    }
}

impl GroupConfig {
    /// PECARN medical actions; absent identity fields fall back to fixed values
    pub fn medical() -> Self {
        Self {
            name: "pecarn-medical-actions".to_string(),
            selector_property: default_selector(),
            unknown_action: UnknownActionConfig::default(),
            envelope: EnvelopeConfig {
                session_attributes: false,
                fallback: Some(IdentityFallback {
                    action_group: "pecarn-medical-actions".to_string(),
                    api_path: "/medical_action".to_string(),
                    http_method: "POST".to_string(),
                }),
                echo_on_failure: true,
                failure_timestamp: true,
            },
        }
    }

    /// Fitness/diet actions; failure envelopes carry no identity
    pub fn wellness() -> Self {
        Self {
            name: "wellness-actions".to_string(),
            selector_property: default_selector(),
            unknown_action: UnknownActionConfig {
                policy: UnknownAction::Report,
                message: "Function {action} not implemented yet.".to_string(),
                available_key: "available_functions".to_string(),
            },
            envelope: EnvelopeConfig {
                session_attributes: true,
                fallback: None,
                echo_on_failure: false,
                failure_timestamp: false,
            },
        }
    }

    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ActionError::Config(format!("Invalid group config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot produce well-formed responses
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ActionError::Config("Group name cannot be empty".to_string()));
        }
        if self.selector_property.is_empty() {
            return Err(ActionError::Config(
                "Selector property cannot be empty".to_string(),
            ));
        }
        if self.unknown_action.available_key.is_empty() {
            return Err(ActionError::Config(
                "Available-actions key cannot be empty".to_string(),
            ));
        }
        if let Some(fallback) = &self.envelope.fallback {
            if fallback.action_group.is_empty()
                || fallback.api_path.is_empty()
                || fallback.http_method.is_empty()
            {
                return Err(ActionError::Config(
                    "Identity fallback fields cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}
