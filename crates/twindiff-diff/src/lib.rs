//! Diff engine for twindiff.
//!
//! Turns two line-oriented texts into a classified, side-by-side diff and
//! derives the metadata a dual-pane viewer needs to render it.
//!
//! # Pipeline
//!
//! 1. [`lines`] splits both texts, builds comparison keys, and emits raw
//!    deleted/added/unchanged operations using the [`matcher`].
//! 2. [`merge`] pairs adjacent delete and add runs into modified rows.
//! 3. [`align`] and [`decorate`] derive per-pane placeholder zones and
//!    highlight instructions from the merged rows.
//!
//! [`Diff::compute`] runs the whole pipeline.
//!
//! ```rust
//! use twindiff_diff::{Diff, DiffLimits};
//! use twindiff_types::{ComparisonOptions, EntryKind};
//!
//! let diff = Diff::compute("A\nB\nC\n", "A\nX\nD\n", &ComparisonOptions::default(), &DiffLimits::default()).unwrap();
//! let kinds: Vec<_> = diff.iter().map(|e| e.kind()).collect();
//! assert_eq!(kinds, [EntryKind::Unchanged, EntryKind::Modified, EntryKind::Modified]);
//! ```

pub mod align;
pub mod decorate;
pub mod diff;
pub mod error;
pub mod limits;
pub mod lines;
pub mod matcher;
pub mod merge;

pub use align::alignment_zones;
pub use decorate::{decoration_category, decorations};
pub use diff::Diff;
pub use error::{DiffError, DiffResult};
pub use limits::DiffLimits;
pub use lines::{diff_lines, split_lines};
pub use matcher::{lcs_pairs, lcs_pairs_with, TieBreak};
pub use merge::{merge_blocks, merge_blocks_with, PairingPolicy};
