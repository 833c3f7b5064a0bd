//! Error types for the export crate.

use twindiff_diff::DiffError;

/// Errors that can occur while writing or applying patches and reports.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The underlying comparison failed.
    #[error("diff error: {0}")]
    Diff(#[from] DiffError),

    /// The patch text is not a well-formed unified diff.
    #[error("malformed patch at line {line}: {reason}")]
    MalformedPatch { line: usize, reason: String },

    /// A context or removed line does not match the text being patched.
    #[error("patch does not apply at line {line}: expected {expected:?}, found {actual:?}")]
    PatchMismatch {
        line: usize,
        expected: String,
        actual: String,
    },

    /// A hunk starts before the previous one ended or past the end of the text.
    #[error("hunk at line {start} does not fit a {len} line text")]
    HunkOutOfRange { start: usize, len: usize },

    /// Writing the report document failed.
    #[error("render error: {0}")]
    Render(#[from] std::fmt::Error),
}

/// Convenience alias for export results.
pub type ExportResult<T> = Result<T, ExportError>;
