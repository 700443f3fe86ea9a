// SPDX-License-Identifier: MIT

//! Outcome classification.
//!
//! Compares a captured invocation outcome against a declared expectation
//! and renders one human-readable verdict line. Three tiers come out of
//! here and are never conflated: ordinary pass/fail verdicts, failures the
//! target is allowed to raise, and harness-level anomalies that mean the
//! test declaration or target wiring is broken.

use crate::expect::{Expect, TestCase};
use crate::registry::Outcome;
use crate::render;
use crate::value::{loose_eq, loose_set_eq, OpValue};
use serde_json::Value;

/// How a case came out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Pass,
    Fail,
    /// Harness-level defect: unrecognized failure kind or broken wiring,
    /// not an expectation mismatch
    Anomaly,
}

/// Pass/fail plus the rendered explanation for one case
#[derive(Debug, Clone)]
pub struct Verdict {
    pub grade: Grade,
    pub message: String,
}

impl Verdict {
    /// Two-valued view; anomalies count as not passed
    pub fn passed(&self) -> bool {
        self.grade == Grade::Pass
    }

    fn pass(message: String) -> Self {
        Verdict {
            grade: Grade::Pass,
            message,
        }
    }

    fn fail(message: String) -> Self {
        Verdict {
            grade: Grade::Fail,
            message,
        }
    }

    fn anomaly(message: String) -> Self {
        Verdict {
            grade: Grade::Anomaly,
            message,
        }
    }
}

/// Classify one outcome against a case's expectation.
///
/// `call` is the pre-rendered `op(params)` header; `actor_id` resolves the
/// actor-identifier sentinel and is the only external input the classifier
/// consumes.
pub fn classify(call: &str, outcome: &Outcome, case: &TestCase, actor_id: &Value) -> Verdict {
    // Expected-failure cases match on the kind of raised failure, never on
    // a returned value.
    if case.expect_failure {
        return match outcome {
            Outcome::Raised { kind, message } if kind.is_recognized() => Verdict::pass(format!(
                "{} OK : expected failure got {}: {}",
                call,
                kind.name(),
                message
            )),
            Outcome::Raised { kind, message } => Verdict::anomaly(format!(
                "{} ERROR : unrecognized failure {}: {}",
                call,
                kind.name(),
                message
            )),
            Outcome::Returned(value) => Verdict::fail(format!(
                "{} FAIL : expected failure got {}",
                call,
                render::op_value(value)
            )),
        };
    }

    let value = match outcome {
        Outcome::Raised { kind, message } if kind.is_recognized() => {
            return Verdict::fail(format!(
                "{} FAIL : expected {} got {}: {}",
                call,
                render::expectation(&case.expect),
                kind.name(),
                message
            ));
        }
        Outcome::Raised { kind, message } => {
            return Verdict::anomaly(format!(
                "{} ERROR : unrecognized failure {}: {}",
                call,
                kind.name(),
                message
            ));
        }
        Outcome::Returned(value) => value,
    };

    match &case.expect {
        Expect::Entity => classify_entity(call, value),
        Expect::Keyed(entries) => classify_keyed(call, value, entries),
        Expect::Set(expected) => classify_set(call, value, expected),
        Expect::Scalar(expected) => classify_scalar(call, value, expected),
        Expect::ActorId => classify_scalar(call, value, actor_id),
    }
}

fn classify_entity(call: &str, value: &OpValue) -> Verdict {
    match value {
        OpValue::Entity(handle) => Verdict::pass(format!(
            "{} OK : expected entity handle got {}",
            call,
            render::entity(handle)
        )),
        other => Verdict::fail(format!(
            "{} FAIL : expected entity handle got {}",
            call,
            other.shape_name()
        )),
    }
}

fn classify_keyed(call: &str, value: &OpValue, entries: &[(String, Value)]) -> Verdict {
    let produced = match value {
        OpValue::Keyed(produced) => produced,
        other => {
            return Verdict::fail(format!(
                "{} FAIL : expected keyed sequence got {}",
                call,
                other.shape_name()
            ));
        }
    };

    // One-directional check: every produced key must be expected, but
    // expected keys never produced are left unchecked.
    for (key, val) in produced {
        match Expect::keyed_entry(entries, key) {
            None => {
                return Verdict::fail(format!(
                    "{} FAIL : expected [{}] got unexpected key {} => {}",
                    call,
                    render::keyed_entries(entries),
                    key,
                    render::value(val)
                ));
            }
            Some(expected) if !loose_eq(val, expected) => {
                return Verdict::fail(format!(
                    "{} FAIL : key {} expected {} got {}",
                    call,
                    key,
                    render::value(expected),
                    render::value(val)
                ));
            }
            Some(_) => {}
        }
    }

    Verdict::pass(format!(
        "{} OK : expected [{}] got {}",
        call,
        render::keyed_entries(entries),
        render::op_value(value)
    ))
}

fn classify_set(call: &str, value: &OpValue, expected: &[Value]) -> Verdict {
    let elements = match value {
        OpValue::Set(elements) => elements,
        other => {
            return Verdict::fail(format!(
                "{} FAIL : expected unordered set got {}",
                call,
                other.shape_name()
            ));
        }
    };

    let rendered_expected = render::expectation(&Expect::Set(expected.to_vec()));
    let rendered_actual = render::op_value(value);
    if loose_set_eq(elements, expected) {
        Verdict::pass(format!(
            "{} OK : expected {} got {}",
            call, rendered_expected, rendered_actual
        ))
    } else {
        Verdict::fail(format!(
            "{} FAIL : expected {} got {}",
            call, rendered_expected, rendered_actual
        ))
    }
}

fn classify_scalar(call: &str, value: &OpValue, expected: &Value) -> Verdict {
    let scalar = match value {
        OpValue::Scalar(scalar) => scalar,
        other => {
            return Verdict::fail(format!(
                "{} FAIL : expected {} got {}",
                call,
                render::value(expected),
                other.shape_name()
            ));
        }
    };

    if loose_eq(scalar, expected) {
        Verdict::pass(format!(
            "{} OK : expected {} got {}",
            call,
            render::value(expected),
            render::value(scalar)
        ))
    } else {
        Verdict::fail(format!(
            "{} FAIL : expected {} got {}",
            call,
            render::value(expected),
            render::value(scalar)
        ))
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
