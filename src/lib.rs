//! # agent-actions
//!
//! Action group executors for hosted conversational agents.
//!
//! ## Overview
//!
//! An agent platform calls an action group with an invocation event naming
//! an operation and its parameters. `agent-actions` normalizes the event,
//! dispatches to a registered handler and wraps the answer in the fixed
//! response envelope the platform expects.
//!
//! ## Quick Start
//!
//! ```rust
//! use agent_actions::ActionGroup;
//!
//! let envelope = ActionGroup::wellness().handle_value(serde_json::json!({
//!     "actionGroup": "wellness",
//!     "function": "calculate_bmi",
//!     "parameters": {"weight": "20", "height": "1.0"}
//! }));
//!
//! assert_eq!(envelope.status_code(), 200);
//! let body = envelope.decode_body().unwrap();
//! assert_eq!(body["category"], "Normal weight");
//! ```
//!
//! ## Architecture
//!
//! - **Extractor** — properties-list or function-call event → `ActionRequest`
//! - **Dispatcher** — `ActionRequest` → `ActionResult` via an immutable `HandlerRegistry`
//! - **EnvelopeBuilder** — `ActionResult` → `ResponseEnvelope`, variant chosen by `EnvelopeConfig`
//! - **ActionGroup** — one deployment wiring the three together
//!
//! ## Action groups
//!
//! - **medical** — PECARN patient data stubs and BMI
//! - **wellness** — fitness plan, diet plan and BMI

pub mod config;
pub mod dispatch;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod group;
pub mod handlers;
pub mod registry;
pub mod runtime;
pub mod types;

// Re-export core types
pub use config::{EnvelopeConfig, GroupConfig, IdentityFallback, UnknownAction, UnknownActionConfig};
pub use dispatch::Dispatcher;
pub use envelope::{EnvelopeBuilder, ResponseEnvelope, MESSAGE_VERSION};
pub use error::{ActionError, FailureKind, Result};
pub use extract::{EventShape, Extractor};
pub use group::ActionGroup;
pub use registry::{HandlerFn, HandlerRegistry};
pub use types::{
    ActionFailure, ActionRequest, ActionResult, InvocationEvent, ParameterPayload, Parameters,
    Payload, Property,
};
