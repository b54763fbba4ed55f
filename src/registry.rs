//! Handler registry — immutable action id → handler mapping
//!
//! Built once from a list of entries and never mutated afterwards, so a
//! registry can sit in a `static` and be shared by concurrent invocations
//! without locking.

use crate::error::Result;
use crate::types::{Parameters, Payload};
use std::collections::HashMap;

/// A unit of business logic bound to one action id
pub type HandlerFn = fn(&Parameters) -> Result<Payload>;

/// Read-only mapping from action id to handler
#[derive(Debug, Clone, Default)]
pub struct HandlerRegistry {
    /// Action ids in registration order
    names: Vec<String>,

    /// action id → handler
    handlers: HashMap<String, HandlerFn>,
}

impl HandlerRegistry {
    /// Build a registry from `(action id, handler)` entries
    ///
    /// A repeated id keeps its first position in `names()` and the handler
    /// registered last.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, HandlerFn)>,
        S: Into<String>,
    {
        let mut registry = Self::default();
        for (name, handler) in entries {
            let name = name.into();
            tracing::debug!(action = %name, "Registering action handler");
            if registry.handlers.insert(name.clone(), handler).is_none() {
                registry.names.push(name);
            }
        }
        registry
    }

    /// Look up a handler by exact, case-sensitive action id
    pub fn get(&self, action_id: &str) -> Option<HandlerFn> {
        self.handlers.get(action_id).copied()
    }

    pub fn contains(&self, action_id: &str) -> bool {
        self.handlers.contains_key(action_id)
    }

    /// Registered action ids in registration order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
