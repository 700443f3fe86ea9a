// SPDX-License-Identifier: MIT

//! Result value shapes and loose equality.
//!
//! Invoked operations hand back loosely-typed data: plain scalars, unordered
//! containers, ordered key/value traversals, or opaque persistence handles.
//! Comparison against expectations uses an explicit coercion table rather
//! than whatever equality the underlying JSON type happens to have, so the
//! rules stay visible and testable.

use serde_json::Value;

/// An opaque handle to a persisted domain entity.
///
/// The harness never inspects field contents, only the entity kind and
/// whether an identifier can be retrieved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityHandle {
    pub kind: String,
    pub id: Option<i64>,
}

impl EntityHandle {
    pub fn new(kind: impl Into<String>, id: i64) -> Self {
        Self {
            kind: kind.into(),
            id: Some(id),
        }
    }

    /// A handle whose identifier is not yet assigned (unsaved entity)
    pub fn unsaved(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: None,
        }
    }
}

/// What an invoked operation may return
#[derive(Debug, Clone, PartialEq)]
pub enum OpValue {
    /// A plain value, including null
    Scalar(Value),
    /// An unordered container; element order carries no meaning
    Set(Vec<Value>),
    /// An ordered key-to-value traversal
    Keyed(Vec<(String, Value)>),
    /// An opaque domain entity handle
    Entity(EntityHandle),
}

impl OpValue {
    /// Shape name used in wrong-shape diagnostics
    pub fn shape_name(&self) -> &'static str {
        match self {
            OpValue::Scalar(_) => "scalar",
            OpValue::Set(_) => "unordered set",
            OpValue::Keyed(_) => "keyed sequence",
            OpValue::Entity(_) => "entity handle",
        }
    }
}

/// Loose equality across heterogeneous values.
///
/// Coercion rules:
/// - `Null` equals only `Null`.
/// - `Bool` equals only `Bool`: no truthiness coercion, so `true != 1` and
///   `false != ""`, narrower than the coercive equality of loosely-typed
///   runtimes.
/// - Numbers compare as `f64`.
/// - A string compared to a number is trimmed and parsed as `f64`; a parse
///   failure (including the empty string) is unequal, so `"1" == 1` and
///   `"1.0" == 1` hold while `"" == 0` does not.
/// - Two strings compare numerically when both parse as numbers
///   (`"1.0" == "1"`), byte-wise otherwise.
/// - Arrays match element-wise at equal length; objects match on identical
///   key sets with loosely-equal values.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => {
            match (x.as_f64(), y.as_f64()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            }
        }
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            match (n.as_f64(), parse_numeric(s)) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            }
        }
        (Value::String(x), Value::String(y)) => match (parse_numeric(x), parse_numeric(y)) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| loose_eq(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| loose_eq(x, y)))
        }
        _ => false,
    }
}

/// Check that two unordered element lists match with no extras and no
/// omissions, using loose equality for membership.
pub fn loose_set_eq(actual: &[Value], expected: &[Value]) -> bool {
    let covered = |needle: &Value, haystack: &[Value]| {
        haystack.iter().any(|candidate| loose_eq(needle, candidate))
    };
    actual.iter().all(|v| covered(v, expected)) && expected.iter().all(|v| covered(v, actual))
}

fn parse_numeric(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
