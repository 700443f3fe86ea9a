// SPDX-License-Identifier: MIT

//! Behavioral test harness for form-data providers.
//!
//! Invokes named operations on a dynamically-selected target, feeds them
//! loosely-typed parameters, and classifies each outcome against a
//! declarative expectation, streaming one rendered verdict per case to an
//! append-only message log. Expectation mismatches, recognized target
//! failures, and harness-level wiring defects are kept strictly apart.
//!
//! The harness owns no domain logic: targets are capability registries of
//! named closures, the request context arrives through [`ParamSource`],
//! and verdicts leave through a [`MessageSink`].
//!
//! [`ParamSource`]: request::ParamSource
//! [`MessageSink`]: runner::MessageSink

pub mod classify;
pub mod expect;
pub mod failure;
pub mod registry;
pub mod render;
pub mod request;
pub mod runner;
pub mod value;

pub use classify::{classify, Grade, Verdict};
pub use expect::{Expect, TestCase};
pub use failure::{OpFailure, RaisedKind};
pub use registry::{DispatchError, Operation, Outcome, Registry};
pub use request::{ParamSource, RequestInfo, Verb};
pub use runner::{MessageSink, Runner};
pub use value::{loose_eq, loose_set_eq, EntityHandle, OpValue};

/// Re-exported message log types from the formtest-log crate.
pub mod log {
    pub use formtest_log::{Message, MessageLog, Severity};
}
