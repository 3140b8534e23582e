//! Error model for change-record construction.

use thiserror::Error;

/// Result type used across the diff layer.
pub type DiffResult<T> = Result<T, DiffError>;

/// Diff-layer error.
///
/// Construction of a change record either succeeds completely or fails with one
/// of these; there is never a partially built record. Every variant signals a
/// caller-side contract violation and is not worth retrying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// A required value (wrapped value, change key, property name) was absent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DiffError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
