// SPDX-License-Identifier: MIT

//! Failure kinds raised by target operations.

use thiserror::Error;

/// A failure raised by an invoked operation.
///
/// `BadValue` and `MissingEntity` are the two recognized kinds the harness
/// classifies; anything else travels as `Other` with its concrete type name
/// and marks a harness-level anomaly when it surfaces.
#[derive(Debug, Clone, Error)]
pub enum OpFailure {
    #[error("bad value: {0}")]
    BadValue(String),

    #[error("missing entity: {0}")]
    MissingEntity(String),

    #[error("{kind}: {message}")]
    Other { kind: String, message: String },
}

impl OpFailure {
    /// An unrecognized failure with an explicit type name
    pub fn other(kind: impl Into<String>, message: impl Into<String>) -> Self {
        OpFailure::Other {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

/// Classifier-side view of a raised failure's kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaisedKind {
    BadValue,
    MissingEntity,
    /// Any other failure type, carrying its concrete name
    Unrecognized(String),
}

impl RaisedKind {
    /// Whether this kind is one of the two the harness recognizes
    pub fn is_recognized(&self) -> bool {
        !matches!(self, RaisedKind::Unrecognized(_))
    }

    /// Concrete type name for diagnostics
    pub fn name(&self) -> &str {
        match self {
            RaisedKind::BadValue => "BadValue",
            RaisedKind::MissingEntity => "MissingEntity",
            RaisedKind::Unrecognized(name) => name,
        }
    }
}
