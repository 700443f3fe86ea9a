// SPDX-License-Identifier: MIT

//! Harness runner.
//!
//! Drives a declared sequence of cases against one of two capability
//! registries, strictly in declaration order, streaming one verdict per
//! case to the message sink. Cheap to embed in a live request path: when
//! no exercise is requested the runner does nothing at all.

use crate::classify::{classify, Grade};
use crate::expect::TestCase;
use crate::registry::{DispatchError, Registry};
use crate::render;
use crate::request::ParamSource;
use formtest_log::{MessageLog, Severity};

/// Sink for verdicts and side-channel diagnostics
pub trait MessageSink {
    fn emit(&mut self, severity: Severity, text: &str);
}

impl MessageSink for MessageLog {
    fn emit(&mut self, severity: Severity, text: &str) {
        MessageLog::emit(self, severity, text);
    }
}

/// Marker names whose presence on a read-only request still triggers an
/// exercise
const DEFAULT_MARKERS: [&str; 2] = ["exist", "cookie"];

/// Runs declared test cases against a baseline or variant target
pub struct Runner<S: MessageSink> {
    baseline: Registry,
    variant: Registry,
    sink: S,
    markers: Vec<String>,
}

impl<S: MessageSink> Runner<S> {
    /// Build a runner over the two selectable targets
    pub fn new(baseline: Registry, variant: Registry, sink: S) -> Self {
        Self {
            baseline,
            variant,
            sink,
            markers: DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Override the trigger-marker names consulted by the short-circuit
    /// predicate
    pub fn with_markers(mut self, markers: impl IntoIterator<Item = String>) -> Self {
        self.markers = markers.into_iter().collect();
        self
    }

    /// Whether this request asks for an exercise at all: any non-read-only
    /// verb does, a read-only verb only with a trigger marker present
    pub fn exercise_requested(&self, request: &dyn ParamSource) -> bool {
        !request.verb().is_read_only() || self.markers.iter().any(|m| request.has_marker(m))
    }

    /// Run all cases in declaration order against the selected target.
    ///
    /// Emits nothing when no exercise is requested. An ordinary FAIL never
    /// affects later cases; a harness-level defect (unknown operation,
    /// unrecognized failure kind) emits its diagnostic and stops the
    /// remainder of the pass.
    pub fn run(&mut self, cases: &[TestCase], request: &dyn ParamSource, use_baseline: bool) {
        if !self.exercise_requested(request) {
            return;
        }

        // One target for the whole pass
        let target = if use_baseline {
            &mut self.baseline
        } else {
            &mut self.variant
        };
        let actor_id = request.actor_id();

        for case in cases {
            let call = render::call(&case.operation, &case.params);
            self.sink.emit(
                Severity::Info,
                &format!("request: {}", render::value(&request.snapshot())),
            );

            let outcome = match target.invoke(&case.operation, &case.params) {
                Ok(outcome) => outcome,
                Err(DispatchError::UnknownOperation(name)) => {
                    self.sink.emit(
                        Severity::Error,
                        &format!("{} ERROR : operation '{}' not found on target", call, name),
                    );
                    return;
                }
            };

            let verdict = classify(&call, &outcome, case, &actor_id);
            let severity = match verdict.grade {
                Grade::Pass => Severity::Info,
                Grade::Fail | Grade::Anomaly => Severity::Error,
            };
            self.sink.emit(severity, &verdict.message);

            if verdict.grade == Grade::Anomaly {
                return;
            }
        }
    }

    /// Access the sink, mainly for tests inspecting an owned log
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
