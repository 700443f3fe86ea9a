// SPDX-License-Identifier: MIT

//! Capability registry and invocation dispatch.
//!
//! Operations are resolved by name against an explicit registration map
//! built once per target, not by reflection. Failing to resolve is a
//! wiring defect of the calling harness, reported separately from any
//! classified verdict.

use crate::failure::{OpFailure, RaisedKind};
use crate::value::OpValue;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// A registered operation: positional parameters in, value or failure out
pub type Operation = Box<dyn FnMut(&[Value]) -> Result<OpValue, OpFailure> + Send>;

/// Errors at the dispatch boundary, distinct from classified outcomes
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("operation '{0}' is not registered on the target")]
    UnknownOperation(String),
}

/// What one invocation attempt observed at the return/raise boundary
#[derive(Debug, Clone)]
pub enum Outcome {
    Returned(OpValue),
    Raised { kind: RaisedKind, message: String },
}

/// The capability surface of one target: operation name to callable handle.
///
/// Closures own whatever target state they need; the registry itself never
/// looks past the return/raise boundary, so side effects of an operation
/// are invisible to it.
#[derive(Default)]
pub struct Registry {
    ops: HashMap<String, Operation>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an operation under a name, replacing any previous handle
    pub fn register<F>(&mut self, name: impl Into<String>, op: F)
    where
        F: FnMut(&[Value]) -> Result<OpValue, OpFailure> + Send + 'static,
    {
        self.ops.insert(name.into(), Box::new(op));
    }

    /// Resolve and invoke an operation, converting a raised failure into a
    /// classifiable outcome
    pub fn invoke(&mut self, name: &str, params: &[Value]) -> Result<Outcome, DispatchError> {
        let op = self
            .ops
            .get_mut(name)
            .ok_or_else(|| DispatchError::UnknownOperation(name.to_string()))?;
        Ok(match op(params) {
            Ok(value) => Outcome::Returned(value),
            Err(OpFailure::BadValue(message)) => Outcome::Raised {
                kind: RaisedKind::BadValue,
                message,
            },
            Err(OpFailure::MissingEntity(message)) => Outcome::Raised {
                kind: RaisedKind::MissingEntity,
                message,
            },
            Err(OpFailure::Other { kind, message }) => Outcome::Raised {
                kind: RaisedKind::Unrecognized(kind),
                message,
            },
        })
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.ops.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Registry").field("ops", &names).finish()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
