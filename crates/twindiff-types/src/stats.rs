use serde::{Deserialize, Serialize};

use crate::entry::{DiffEntry, EntryKind};

/// Number of entries of each kind in a diff.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub unchanged: usize,
    pub deleted: usize,
    pub added: usize,
    pub modified: usize,
}

impl Stats {
    /// Tally a sequence of entries.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a DiffEntry>) -> Self {
        let mut stats = Self::default();
        for entry in entries {
            stats.record(entry.kind());
        }
        stats
    }

    /// Count one more entry of the given kind.
    pub fn record(&mut self, kind: EntryKind) {
        match kind {
            EntryKind::Unchanged => self.unchanged += 1,
            EntryKind::Deleted => self.deleted += 1,
            EntryKind::Added => self.added += 1,
            EntryKind::Modified => self.modified += 1,
        }
    }

    /// Total number of entries.
    pub fn total(&self) -> usize {
        self.unchanged + self.deleted + self.added + self.modified
    }

    /// Returns `true` if anything other than unchanged lines was counted.
    pub fn has_changes(&self) -> bool {
        self.deleted + self.added + self.modified > 0
    }
}
