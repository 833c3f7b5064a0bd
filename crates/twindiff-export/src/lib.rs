//! Serializers for twindiff.
//!
//! - [`patch`]: unified-diff text with minimal hunks (no context radius)
//! - [`apply`]: parse a unified patch and apply it to the original text
//! - [`report`]: self-contained HTML side-by-side report
//!
//! A patch written by [`write_patch`] always reproduces the right-hand text
//! when applied to the left-hand text with [`apply_patch`], including the
//! presence or absence of a final newline.

pub mod apply;
pub mod error;
pub mod patch;
pub mod report;

pub use apply::{apply_patch, parse_patch};
pub use error::{ExportError, ExportResult};
pub use patch::{
    build_patch, write_patch, DiffHunk, DiffLine, Patch, DEFAULT_LEFT_NAME, DEFAULT_RIGHT_NAME,
};
pub use report::{write_report, ReportOptions};
