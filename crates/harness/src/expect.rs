// SPDX-License-Identifier: MIT

//! Declarative expectations and test case declarations.

use serde_json::Value;

/// What a successful invocation should produce.
///
/// Pure data; all validation happens at classification time so that
/// malformed expectations surface as verdicts, not construction errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Expect {
    /// Returned scalar must loosely equal this value
    Scalar(Value),
    /// Returned unordered container must match these elements exactly,
    /// order irrelevant
    Set(Vec<Value>),
    /// Every key the returned traversal produces must appear here with a
    /// loosely-equal value. Entries never produced are not checked; partial
    /// expectations rely on this one-directional subset semantics.
    Keyed(Vec<(String, Value)>),
    /// Returned value must be an opaque entity handle; field values are
    /// not inspected
    Entity,
    /// Sentinel for the current authenticated actor's identifier, resolved
    /// against the request context before comparison
    ActorId,
}

impl Expect {
    /// Look up a keyed entry by produced key
    pub fn keyed_entry<'a>(entries: &'a [(String, Value)], key: &str) -> Option<&'a Value> {
        entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

/// One declared test: an operation, its positional parameters, and the
/// expected outcome. Immutable, single-use per runner pass.
#[derive(Debug, Clone)]
pub struct TestCase {
    pub operation: String,
    pub params: Vec<Value>,
    pub expect: Expect,
    /// When set, the operation must raise a recognized failure; `expect`
    /// is ignored for the verdict
    pub expect_failure: bool,
}

impl TestCase {
    pub fn new(operation: impl Into<String>, params: Vec<Value>, expect: Expect) -> Self {
        Self {
            operation: operation.into(),
            params,
            expect,
            expect_failure: false,
        }
    }

    /// Declare a case whose operation must raise a recognized failure
    pub fn expecting_failure(operation: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            operation: operation.into(),
            params,
            expect: Expect::Scalar(Value::Null),
            expect_failure: true,
        }
    }
}
