//! Error types for the solvers

use thiserror::Error;

/// Errors raised while reading a problem's input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Input does not follow the problem's format
    #[error("malformed input for {problem}: {reason}")]
    MalformedInput {
        /// Contest code of the problem being solved
        problem: &'static str,
        /// What was wrong with the input
        reason: String,
    },

    /// Input ended before a required token
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd {
        /// Description of the missing token
        expected: &'static str,
    },

    /// A count token is not a non-negative integer
    #[error("invalid count: '{token}'")]
    InvalidCount {
        /// The offending token
        token: String,
    },

    /// No registered problem matches the given code or slug
    #[error("unknown problem: {0}")]
    UnknownProblem(String),
}

impl CoreError {
    pub(crate) fn malformed(problem: &'static str, reason: impl Into<String>) -> Self {
        CoreError::MalformedInput {
            problem,
            reason: reason.into(),
        }
    }
}

/// Result type for solver operations
pub type Result<T> = std::result::Result<T, CoreError>;
