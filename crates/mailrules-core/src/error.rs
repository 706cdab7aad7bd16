//! Error types for the core library.

use thiserror::Error;

use crate::rule::ValidationError;

/// Errors that can occur in core operations.
///
/// All of these are local and recoverable: no failing operation leaves the
/// rule set or the stored settings partially mutated.
#[derive(Debug, Error)]
pub enum Error {
    /// Base URL is empty after trimming.
    #[error("Base URL is empty")]
    EmptyBaseUrl,

    /// Candidate rule failed admission checks.
    #[error("Invalid rule: {0}")]
    Validation(#[from] ValidationError),

    /// Submission attempted on an empty rule set.
    #[error("No rules to apply")]
    NoRules,

    /// Index outside the rule sequence.
    #[error("Index {index} out of bounds for {len} rules")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },

    /// Network-level failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status from the backend.
    #[error("HTTP {status}: {body}")]
    Http {
        /// Status code the backend answered with.
        status: u16,
        /// Response body, pretty-printed when it parses as JSON.
        body: String,
    },

    /// Serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error from the settings backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
