//! High-level SDK for twindiff.
//!
//! Provides a single [`Engine`] over the diff, detection, and export crates.
//! This is the main entry point for applications embedding twindiff.

pub mod config;
pub mod engine;
pub mod error;
pub mod format;

pub use config::EngineConfig;
pub use engine::{Comparison, Engine};
pub use error::{SdkError, SdkResult};
pub use format::{FormatError, Formatter};

// Re-export key types
pub use twindiff_detect::{Classifier, Detection, Rule};
pub use twindiff_diff::{Diff, DiffLimits};
pub use twindiff_export::{Patch, ReportOptions};
pub use twindiff_types::{
    AlignmentZone, ComparisonOptions, DecorationCategory, DecorationInstruction, DiffEntry,
    EntryKind, Side, SideLine, Stats,
};
