//! Action groups — one deployment's extractor, dispatcher and envelope
//! builder behind a single entry point
//!
//! `ActionGroup::handle` is the only place failures are turned into
//! envelopes; callers always receive a well-formed response.

use crate::config::GroupConfig;
use crate::dispatch::Dispatcher;
use crate::envelope::{EnvelopeBuilder, ResponseEnvelope};
use crate::error::{ActionError, Result};
use crate::extract::Extractor;
use crate::handlers;
use crate::registry::HandlerRegistry;
use crate::types::{ActionResult, InvocationEvent};
use serde_json::Value;
use std::sync::LazyLock;

static MEDICAL: LazyLock<ActionGroup<'static>> =
    LazyLock::new(|| ActionGroup::assemble(GroupConfig::medical(), handlers::medical_registry()));

static WELLNESS: LazyLock<ActionGroup<'static>> =
    LazyLock::new(|| ActionGroup::assemble(GroupConfig::wellness(), handlers::wellness_registry()));

/// A configured action group serving invocation events
#[derive(Debug, Clone)]
pub struct ActionGroup<'r> {
    config: GroupConfig,
    extractor: Extractor,
    dispatcher: Dispatcher<'r>,
    envelopes: EnvelopeBuilder,
}

impl<'r> ActionGroup<'r> {
    /// Create an action group from a validated configuration
    pub fn new(config: GroupConfig, registry: &'r HandlerRegistry) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(config, registry))
    }

    fn assemble(config: GroupConfig, registry: &'r HandlerRegistry) -> Self {
        Self {
            extractor: Extractor::new(config.selector_property.clone()),
            dispatcher: Dispatcher::new(registry, config.unknown_action.clone()),
            envelopes: EnvelopeBuilder::new(config.envelope.clone()),
            config,
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    /// Registered action ids
    pub fn actions(&self) -> &[String] {
        self.dispatcher.registry().names()
    }

    /// Serve one decoded event
    pub fn handle(&self, event: &InvocationEvent) -> ResponseEnvelope {
        tracing::info!(
            group = %self.config.name,
            action_group = ?event.action_group,
            function = ?event.function,
            api_path = ?event.api_path,
            "Invocation received"
        );

        let request = self.extractor.extract(event);
        let result = self.dispatcher.dispatch(&request);
        self.envelopes.build(Some(event), &result)
    }

    /// Serve one raw JSON event, answering malformed events with a 400
    pub fn handle_value(&self, event: Value) -> ResponseEnvelope {
        match InvocationEvent::from_value(event) {
            Ok(event) => self.handle(&event),
            Err(err) => self.reject(err),
        }
    }

    fn reject(&self, err: ActionError) -> ResponseEnvelope {
        tracing::error!(group = %self.config.name, error = %err, "Rejected invocation event");
        self.envelopes.build(None, &ActionResult::Failure(err.into()))
    }
}

impl ActionGroup<'static> {
    /// The PECARN medical action group
    pub fn medical() -> &'static Self {
        &MEDICAL
    }

    /// The fitness/diet action group
    pub fn wellness() -> &'static Self {
        &WELLNESS
    }
}
