//! Unified-diff writer.
//!
//! Hunks are minimal: every maximal run of non-unchanged entries becomes one
//! hunk and no surrounding context lines are included.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use twindiff_diff::{split_lines, Diff, DiffLimits};
use twindiff_types::{ComparisonOptions, DiffEntry};

use crate::error::ExportResult;

/// Header name used for the left text when none is given.
pub const DEFAULT_LEFT_NAME: &str = "original";

/// Header name used for the right text when none is given.
pub const DEFAULT_RIGHT_NAME: &str = "modified";

pub(crate) const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

/// A parsed or generated unified patch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    pub left_name: String,
    pub right_name: String,
    pub hunks: Vec<DiffHunk>,
}

impl Patch {
    /// Returns `true` if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }

    /// Total number of `+` lines.
    pub fn additions(&self) -> usize {
        self.hunks
            .iter()
            .flat_map(|h| &h.lines)
            .filter(|l| matches!(l, DiffLine::Added(_)))
            .count()
    }

    /// Total number of `-` lines.
    pub fn deletions(&self) -> usize {
        self.hunks
            .iter()
            .flat_map(|h| &h.lines)
            .filter(|l| matches!(l, DiffLine::Removed(_)))
            .count()
    }
}

/// A contiguous region of changes.
///
/// A side with a zero count has its start set to the line *after which* the
/// hunk applies, following the usual unified-diff convention.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffHunk {
    pub left_start: usize,
    pub left_count: usize,
    pub right_start: usize,
    pub right_count: usize,
    pub lines: Vec<DiffLine>,
}

/// A single body line of a hunk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffLine {
    /// A line present on both sides.
    Context(String),
    /// A line only on the left.
    Removed(String),
    /// A line only on the right.
    Added(String),
    /// The preceding line has no trailing newline.
    NoNewline,
}

/// Line count and final-newline state of one input text.
#[derive(Clone, Copy, Debug)]
struct TextShape {
    lines: usize,
    trailing_newline: bool,
}

impl TextShape {
    fn of(text: &str) -> Self {
        Self {
            lines: split_lines(text).len(),
            trailing_newline: text.ends_with('\n'),
        }
    }

    /// Whether line `number` is followed by a newline in the original text.
    fn ends_with_newline(&self, number: usize) -> bool {
        number < self.lines || self.trailing_newline
    }
}

impl DiffHunk {
    fn after(left_line: usize, right_line: usize) -> Self {
        Self {
            left_start: left_line,
            left_count: 0,
            right_start: right_line,
            right_count: 0,
            lines: Vec::new(),
        }
    }

    fn remove(&mut self, text: &str, number: usize, shape: &TextShape) {
        if self.left_count == 0 {
            self.left_start = number;
        }
        self.left_count += 1;
        self.lines.push(DiffLine::Removed(text.to_string()));
        if !shape.ends_with_newline(number) {
            self.lines.push(DiffLine::NoNewline);
        }
    }

    fn add(&mut self, text: &str, number: usize, shape: &TextShape) {
        if self.right_count == 0 {
            self.right_start = number;
        }
        self.right_count += 1;
        self.lines.push(DiffLine::Added(text.to_string()));
        if !shape.ends_with_newline(number) {
            self.lines.push(DiffLine::NoNewline);
        }
    }
}

/// Diff two texts with default options and group the changes into a patch.
pub fn build_patch(
    left: &str,
    right: &str,
    left_name: Option<&str>,
    right_name: Option<&str>,
    limits: &DiffLimits,
) -> ExportResult<Patch> {
    let diff = Diff::compute(left, right, &ComparisonOptions::default(), limits)?;
    let left_shape = TextShape::of(left);
    let right_shape = TextShape::of(right);

    let entries = settle_final_newlines(diff.entries, &left_shape, &right_shape);
    let hunks = group_hunks(&entries, &left_shape, &right_shape);
    debug!(hunks = hunks.len(), "patch built");

    Ok(Patch {
        left_name: left_name.unwrap_or(DEFAULT_LEFT_NAME).to_string(),
        right_name: right_name.unwrap_or(DEFAULT_RIGHT_NAME).to_string(),
        hunks,
    })
}

/// Diff two texts and render the unified patch.
pub fn write_patch(
    left: &str,
    right: &str,
    left_name: Option<&str>,
    right_name: Option<&str>,
    limits: &DiffLimits,
) -> ExportResult<String> {
    Ok(build_patch(left, right, left_name, right_name, limits)?.to_string())
}

/// An unchanged line that ends one text without a newline but not the
/// other cannot be carried over as-is; it is rewritten as a modification so
/// the newline state travels with the patch.
fn settle_final_newlines(
    entries: Vec<DiffEntry>,
    left: &TextShape,
    right: &TextShape,
) -> Vec<DiffEntry> {
    entries
        .into_iter()
        .map(|entry| match entry {
            DiffEntry::Unchanged { left: l, right: r }
                if left.ends_with_newline(l.number) != right.ends_with_newline(r.number) =>
            {
                DiffEntry::modified(l, r)
            }
            other => other,
        })
        .collect()
}

fn group_hunks(entries: &[DiffEntry], left: &TextShape, right: &TextShape) -> Vec<DiffHunk> {
    let mut hunks = Vec::new();
    let mut current: Option<DiffHunk> = None;
    let (mut last_left, mut last_right) = (0, 0);

    for entry in entries {
        if let DiffEntry::Unchanged { left: l, right: r } = entry {
            hunks.extend(current.take());
            last_left = l.number;
            last_right = r.number;
            continue;
        }

        let hunk = current.get_or_insert_with(|| DiffHunk::after(last_left, last_right));
        if let Some(l) = entry.left() {
            hunk.remove(&l.text, l.number, left);
            last_left = l.number;
        }
        if let Some(r) = entry.right() {
            hunk.add(&r.text, r.number, right);
            last_right = r.number;
        }
    }
    hunks.extend(current);

    hunks
}

impl fmt::Display for Patch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- {}", self.left_name)?;
        writeln!(f, "+++ {}", self.right_name)?;
        for hunk in &self.hunks {
            write!(f, "{hunk}")?;
        }
        Ok(())
    }
}

impl fmt::Display for DiffHunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "@@ -{},{} +{},{} @@",
            self.left_start, self.left_count, self.right_start, self.right_count
        )?;
        for line in &self.lines {
            match line {
                DiffLine::Context(text) => writeln!(f, " {text}")?,
                DiffLine::Removed(text) => writeln!(f, "-{text}")?,
                DiffLine::Added(text) => writeln!(f, "+{text}")?,
                DiffLine::NoNewline => writeln!(f, "{NO_NEWLINE_MARKER}")?,
            }
        }
        Ok(())
    }
}
