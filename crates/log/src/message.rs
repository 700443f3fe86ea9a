// SPDX-License-Identifier: MIT

//! Message record types.

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Normal progress output (verdict passes, request snapshots)
    Info,
    /// Failures and harness-level defects
    Error,
}

impl Severity {
    /// Whether this severity signals a problem
    pub fn is_error(self) -> bool {
        matches!(self, Severity::Error)
    }
}

/// One emitted diagnostic line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Position in the emission order, starting at 0
    pub seq: u64,
    pub severity: Severity,
    pub text: String,
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
