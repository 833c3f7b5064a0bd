//! Line differencer: split, normalize, match, and emit raw operations.
//!
//! The output of [`diff_lines`] only contains `Unchanged`, `Deleted`, and
//! `Added` entries. Pairing deletes with adds into `Modified` rows is the
//! job of [`crate::merge`].

use tracing::debug;
use twindiff_types::{ComparisonOptions, DiffEntry, SideLine};

use crate::error::DiffResult;
use crate::limits::DiffLimits;
use crate::matcher::lcs_pairs;

/// Split a text into lines without their `\n` terminators.
///
/// An empty text has no lines. A single trailing newline terminates the
/// last line rather than starting a new, empty one. Any `\r` stays part of
/// the line so it is reproduced verbatim.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    let body = text.strip_suffix('\n').unwrap_or(text);
    body.split('\n').collect()
}

/// One side of the comparison after blank-line filtering.
struct PreparedSide<'a> {
    lines: Vec<&'a str>,
    numbers: Vec<usize>,
    keys: Vec<String>,
}

impl<'a> PreparedSide<'a> {
    fn new(text: &'a str, options: &ComparisonOptions) -> Self {
        let mut lines = Vec::new();
        let mut numbers = Vec::new();
        let mut keys = Vec::new();
        for (idx, line) in split_lines(text).into_iter().enumerate() {
            if options.skips(line) {
                continue;
            }
            lines.push(line);
            numbers.push(idx + 1);
            keys.push(options.key(line));
        }
        Self {
            lines,
            numbers,
            keys,
        }
    }

    fn line(&self, idx: usize) -> SideLine {
        SideLine::new(self.lines[idx], self.numbers[idx])
    }

    fn len(&self) -> usize {
        self.lines.len()
    }
}

/// Compute raw line operations between two texts.
///
/// Before each matched pair, every unconsumed left line is emitted as
/// `Deleted` and then every unconsumed right line as `Added`; after the last
/// match the remaining deletes come first, followed by the remaining adds.
/// Line numbers refer to the original, unfiltered input.
pub fn diff_lines(
    left: &str,
    right: &str,
    options: &ComparisonOptions,
    limits: &DiffLimits,
) -> DiffResult<Vec<DiffEntry>> {
    let left = PreparedSide::new(left, options);
    let right = PreparedSide::new(right, options);
    limits.check(left.len(), right.len())?;

    let matches = lcs_pairs(&left.keys, &right.keys);
    debug!(
        left = left.len(),
        right = right.len(),
        matched = matches.len(),
        "matched line sequences"
    );

    let mut entries = Vec::with_capacity(left.len() + right.len() - matches.len());
    let (mut li, mut ri) = (0, 0);
    for (lm, rm) in matches {
        entries.extend((li..lm).map(|i| DiffEntry::deleted(left.line(i))));
        entries.extend((ri..rm).map(|j| DiffEntry::added(right.line(j))));
        entries.push(DiffEntry::unchanged(left.line(lm), right.line(rm)));
        li = lm + 1;
        ri = rm + 1;
    }
    entries.extend((li..left.len()).map(|i| DiffEntry::deleted(left.line(i))));
    entries.extend((ri..right.len()).map(|j| DiffEntry::added(right.line(j))));

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiffError;
    use twindiff_types::EntryKind;

    fn raw(left: &str, right: &str) -> Vec<DiffEntry> {
        diff_lines(left, right, &ComparisonOptions::default(), &DiffLimits::default()).unwrap()
    }

    fn kinds(entries: &[DiffEntry]) -> Vec<EntryKind> {
        entries.iter().map(DiffEntry::kind).collect()
    }

    #[test]
    fn split_handles_terminators() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("a"), vec!["a"]);
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("a\r\nb"), vec!["a\r", "b"]);
    }

    #[test]
    fn identical_texts_are_all_unchanged() {
        let entries = raw("x\ny\n", "x\ny\n");
        assert_eq!(kinds(&entries), vec![EntryKind::Unchanged; 2]);
    }

    #[test]
    fn appended_line_is_added() {
        let entries = raw("line1\nline2", "line1\nline2\nline3");
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2], DiffEntry::added(SideLine::new("line3", 3)));
    }

    #[test]
    fn deletes_precede_adds_before_a_match() {
        let entries = raw("A\nB\nC", "A\nX\nC");
        assert_eq!(
            kinds(&entries),
            vec![
                EntryKind::Unchanged,
                EntryKind::Deleted,
                EntryKind::Added,
                EntryKind::Unchanged
            ]
        );
    }

    #[test]
    fn trailing_deletes_then_trailing_adds() {
        let entries = raw("A\nB\nC", "A\nX\nD");
        assert_eq!(
            kinds(&entries),
            vec![
                EntryKind::Unchanged,
                EntryKind::Deleted,
                EntryKind::Deleted,
                EntryKind::Added,
                EntryKind::Added
            ]
        );
    }

    #[test]
    fn empty_inputs_are_degenerate_not_errors() {
        assert!(raw("", "").is_empty());
        assert_eq!(kinds(&raw("", "a\nb")), vec![EntryKind::Added; 2]);
        assert_eq!(kinds(&raw("a\nb", "")), vec![EntryKind::Deleted; 2]);
    }

    #[test]
    fn options_change_keys_not_text() {
        let opts = ComparisonOptions {
            ignore_whitespace: true,
            ignore_case: true,
            ..Default::default()
        };
        let entries =
            diff_lines("Hello   World", "  hello world ", &opts, &DiffLimits::default()).unwrap();
        assert_eq!(
            entries,
            vec![DiffEntry::unchanged(
                SideLine::new("Hello   World", 1),
                SideLine::new("  hello world ", 1)
            )]
        );
    }

    #[test]
    fn blank_lines_keep_original_numbering() {
        let opts = ComparisonOptions {
            ignore_blank_lines: true,
            ..Default::default()
        };
        let entries = diff_lines("A\n\nB", "A\nB", &opts, &DiffLimits::default()).unwrap();
        assert_eq!(
            entries,
            vec![
                DiffEntry::unchanged(SideLine::new("A", 1), SideLine::new("A", 1)),
                DiffEntry::unchanged(SideLine::new("B", 3), SideLine::new("B", 2)),
            ]
        );
    }

    #[test]
    fn limit_is_checked_before_matching() {
        let err = diff_lines(
            "a\nb\nc",
            "d\ne",
            &ComparisonOptions::default(),
            &DiffLimits::with_max_total_lines(4),
        )
        .unwrap_err();
        assert_eq!(
            err,
            DiffError::InputTooLarge {
                left: 3,
                right: 2,
                limit: 4
            }
        );
    }

    #[test]
    fn limit_counts_lines_after_blank_filtering() {
        let opts = ComparisonOptions {
            ignore_blank_lines: true,
            ..Default::default()
        };
        let result = diff_lines("a\n\n\n", "a\n\n", &opts, &DiffLimits::with_max_total_lines(2));
        assert!(result.is_ok());
    }
}
