use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the libris workspace.
///
/// The statistics engine itself never fails on malformed records; these
/// variants cover the boundaries around it: decoding snapshots, validating
/// configuration, and talking to a data source.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LibrisError {
    /// Issues with the returned or expected data (wrong shape, undecodable payload).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A data source returned an error.
    #[error("{source_name} failed: {msg}")]
    Source {
        /// Name of the source that failed.
        source_name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A resource could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "user 42".
        what: String,
    },

    /// A data source call exceeded the configured timeout.
    #[error("source timed out: {operation} via {source_name}")]
    SourceTimeout {
        /// Name of the source that timed out.
        source_name: String,
        /// Operation label (e.g. "list_users").
        operation: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl LibrisError {
    /// Helper: build a `Source` error with the source name and message.
    #[must_use]
    pub fn source(source_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            source_name: source_name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    #[must_use]
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `SourceTimeout` error.
    #[must_use]
    pub fn source_timeout(source_name: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::SourceTimeout {
            source_name: source_name.into(),
            operation: operation.into(),
        }
    }
}

impl From<serde_json::Error> for LibrisError {
    fn from(e: serde_json::Error) -> Self {
        Self::Data(e.to_string())
    }
}
