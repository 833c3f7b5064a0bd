use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{DiffError, DiffResult};

/// Default ceiling on the combined number of compared lines.
///
/// At the worst split (5 000 × 5 000) the matcher's table holds 25M cells.
pub const DEFAULT_MAX_TOTAL_LINES: usize = 10_000;

/// Resource ceiling for a single comparison.
///
/// The matcher is O(m·n) in both time and memory, so inputs are rejected up
/// front rather than allowed to exhaust memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffLimits {
    /// Maximum `left + right` line count, counted after blank-line filtering.
    /// `None` disables the check.
    pub max_total_lines: Option<usize>,
}

impl Default for DiffLimits {
    fn default() -> Self {
        Self {
            max_total_lines: Some(DEFAULT_MAX_TOTAL_LINES),
        }
    }
}

impl DiffLimits {
    /// A ceiling of `max_total_lines` combined lines.
    pub fn with_max_total_lines(max_total_lines: usize) -> Self {
        Self {
            max_total_lines: Some(max_total_lines),
        }
    }

    /// No ceiling at all. Callers take responsibility for bounding input.
    pub fn unbounded() -> Self {
        Self {
            max_total_lines: None,
        }
    }

    /// Check a pair of line counts against the ceiling.
    pub fn check(&self, left: usize, right: usize) -> DiffResult<()> {
        let Some(limit) = self.max_total_lines else {
            return Ok(());
        };
        let total = left.saturating_add(right);
        if total > limit {
            return Err(DiffError::InputTooLarge { left, right, limit });
        }
        if total > limit / 2 {
            warn!(left, right, limit, "input is approaching the line limit");
        }
        Ok(())
    }
}
