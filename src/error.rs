//! Error types for agent-actions

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while serving an action group invocation
#[derive(Debug, Error)]
pub enum ActionError {
    /// A required parameter was absent
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// A parameter was present but had the wrong type or format
    #[error("Invalid parameter value: {0}")]
    InvalidParameter(String),

    /// The inbound event could not be decoded
    #[error("Invalid parameter value: malformed invocation event: {0}")]
    MalformedEvent(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other failure inside a handler
    #[error("An error occurred: {0}")]
    Internal(String),
}

impl ActionError {
    /// Classify this error for status-code mapping
    pub fn kind(&self) -> FailureKind {
        match self {
            ActionError::MissingParameter(_) => FailureKind::MissingParameter,
            ActionError::InvalidParameter(_) | ActionError::MalformedEvent(_) => {
                FailureKind::InvalidParameter
            }
            ActionError::Config(_) | ActionError::Internal(_) => FailureKind::Internal,
        }
    }
}

/// Failure classification carried by `ActionResult::Failure`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    MissingParameter,
    InvalidParameter,
    Internal,
}

impl FailureKind {
    /// HTTP status reported to the platform for this kind of failure
    pub fn status_code(self) -> u16 {
        match self {
            FailureKind::MissingParameter | FailureKind::InvalidParameter => 400,
            FailureKind::Internal => 500,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::MissingParameter => "MissingParameter",
            FailureKind::InvalidParameter => "InvalidParameter",
            FailureKind::Internal => "Internal",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result type alias for action operations
pub type Result<T> = std::result::Result<T, ActionError>;
