//! Foundation types for twindiff.
//!
//! This crate provides the plain data model shared by every other twindiff
//! crate. All values here are immutable outputs of a single comparison; none
//! of them carry identity across calls.
//!
//! # Key Types
//!
//! - [`DiffEntry`]: One classified row: unchanged, deleted, added, or modified
//! - [`SideLine`]: A raw line together with its 1-based original line number
//! - [`ComparisonOptions`]: Normalization applied to comparison keys
//! - [`AlignmentZone`]: Placeholder gap keeping two panes aligned
//! - [`DecorationInstruction`]: Per-line highlight for one pane
//! - [`Stats`]: Count of entries per kind

pub mod entry;
pub mod error;
pub mod options;
pub mod stats;
pub mod view;

pub use entry::{DiffEntry, EntryKind, Side, SideLine};
pub use error::TypeError;
pub use options::ComparisonOptions;
pub use stats::Stats;
pub use view::{AlignmentZone, DecorationCategory, DecorationInstruction};
