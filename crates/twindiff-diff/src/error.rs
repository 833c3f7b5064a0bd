//! Error types for the diff crate.

/// Errors that can occur during diff operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiffError {
    /// The combined input is larger than the configured ceiling. The LCS
    /// table needs `left * right` cells, so the check runs before matching.
    #[error("input too large: {left} + {right} lines exceeds the limit of {limit}")]
    InputTooLarge {
        left: usize,
        right: usize,
        limit: usize,
    },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
