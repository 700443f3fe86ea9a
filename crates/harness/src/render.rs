// SPDX-License-Identifier: MIT

//! Compact diagnostic rendering.
//!
//! Verdict messages drop the structural punctuation of the underlying JSON
//! notation: strings lose their quotes, arrays lose positional keys, and
//! parameter lists lose their outer brackets, keeping diagnostics readable
//! in a linear message stream.

use crate::expect::Expect;
use crate::value::{EntityHandle, OpValue};
use serde_json::Value;

/// Render an invocation header: `op(p1, p2)`
pub fn call(operation: &str, params: &[Value]) -> String {
    format!("{}({})", operation, params_list(params))
}

/// Render a parameter list without outer brackets
pub fn params_list(params: &[Value]) -> String {
    params.iter().map(value).collect::<Vec<_>>().join(", ")
}

/// Render a single loosely-typed value
pub fn value(v: &Value) -> String {
    match v {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let inner = items.iter().map(value).collect::<Vec<_>>().join(", ");
            format!("[{}]", inner)
        }
        Value::Object(map) => {
            let inner = map
                .iter()
                .map(|(k, v)| format!("{} => {}", k, value(v)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("[{}]", inner)
        }
    }
}

/// Render an entity handle: `kind#id`, `kind#?` when unsaved
pub fn entity(handle: &EntityHandle) -> String {
    match handle.id {
        Some(id) => format!("{}#{}", handle.kind, id),
        None => format!("{}#?", handle.kind),
    }
}

/// Render a returned operation value
pub fn op_value(v: &OpValue) -> String {
    match v {
        OpValue::Scalar(s) => value(s),
        OpValue::Set(items) => {
            let inner = items.iter().map(value).collect::<Vec<_>>().join(", ");
            format!("[{}]", inner)
        }
        OpValue::Keyed(entries) => format!("[{}]", keyed_entries(entries)),
        OpValue::Entity(handle) => entity(handle),
    }
}

/// Render keyed entries without outer brackets
pub fn keyed_entries(entries: &[(String, Value)]) -> String {
    entries
        .iter()
        .map(|(k, v)| format!("{} => {}", k, value(v)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the expected side of a verdict
pub fn expectation(expect: &Expect) -> String {
    match expect {
        Expect::Scalar(v) => value(v),
        Expect::Set(items) => {
            let inner = items.iter().map(value).collect::<Vec<_>>().join(", ");
            format!("[{}]", inner)
        }
        Expect::Keyed(entries) => format!("[{}]", keyed_entries(entries)),
        Expect::Entity => "entity handle".to_string(),
        Expect::ActorId => "actor id".to_string(),
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
