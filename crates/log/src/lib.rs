// SPDX-License-Identifier: MIT

//! Append-only diagnostic message log for the formtest harness.
//!
//! This crate provides the message sink the harness streams verdicts to:
//! an ordered, append-only buffer that tests can query after a pass, with
//! optional JSONL mirroring for post-hoc inspection.

mod log;
mod message;

pub use log::MessageLog;
pub use message::{Message, Severity};
