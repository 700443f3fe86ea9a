// SPDX-License-Identifier: MIT

//! Request context supplied by the embedding application.
//!
//! The harness never reads ambient request or session state; everything it
//! needs from the hosting request arrives through [`ParamSource`].

use serde_json::Value;
use std::collections::HashSet;

/// HTTP-like verb of the inbound request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    /// Read-only verbs never trigger an exercise on their own
    pub fn is_read_only(self) -> bool {
        matches!(self, Verb::Get | Verb::Head)
    }
}

/// Trigger and context data for one harness pass
pub trait ParamSource {
    /// Inbound request verb, feeds the short-circuit predicate
    fn verb(&self) -> Verb;

    /// Whether a named trigger marker is present on the request
    fn has_marker(&self, name: &str) -> bool;

    /// Raw inbound parameter snapshot for side-channel diagnostics
    fn snapshot(&self) -> Value;

    /// Identifier of the current authenticated actor, resolving the
    /// actor-id expectation sentinel
    fn actor_id(&self) -> Value;
}

/// Plain-struct [`ParamSource`] for embedding and tests
#[derive(Debug, Clone)]
pub struct RequestInfo {
    pub verb: Verb,
    pub markers: HashSet<String>,
    pub snapshot: Value,
    pub actor_id: Value,
}

impl RequestInfo {
    pub fn new(verb: Verb) -> Self {
        Self {
            verb,
            markers: HashSet::new(),
            snapshot: Value::Null,
            actor_id: Value::Null,
        }
    }

    pub fn with_marker(mut self, name: impl Into<String>) -> Self {
        self.markers.insert(name.into());
        self
    }

    pub fn with_snapshot(mut self, snapshot: Value) -> Self {
        self.snapshot = snapshot;
        self
    }

    pub fn with_actor_id(mut self, actor_id: Value) -> Self {
        self.actor_id = actor_id;
        self
    }
}

impl ParamSource for RequestInfo {
    fn verb(&self) -> Verb {
        self.verb
    }

    fn has_marker(&self, name: &str) -> bool {
        self.markers.contains(name)
    }

    fn snapshot(&self) -> Value {
        self.snapshot.clone()
    }

    fn actor_id(&self) -> Value {
        self.actor_id.clone()
    }
}
