use serde::{Deserialize, Serialize};
use tracing::debug;
use twindiff_types::{
    AlignmentZone, ComparisonOptions, DecorationInstruction, DiffEntry, Side, Stats,
};

use crate::align::alignment_zones;
use crate::decorate::decorations;
use crate::error::DiffResult;
use crate::limits::DiffLimits;
use crate::lines::diff_lines;
use crate::merge::merge_blocks;

/// The final, merged diff between two texts.
///
/// Entries partition every surviving line of both inputs: each left line
/// number appears in exactly one entry, and likewise for the right.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diff {
    pub entries: Vec<DiffEntry>,
}

impl Diff {
    /// Run the full pipeline: split, normalize, match, and merge.
    pub fn compute(
        left: &str,
        right: &str,
        options: &ComparisonOptions,
        limits: &DiffLimits,
    ) -> DiffResult<Self> {
        let raw = diff_lines(left, right, options, limits)?;
        let entries = merge_blocks(raw);
        debug!(entries = entries.len(), "diff computed");
        Ok(Self { entries })
    }

    /// Wrap already-merged entries.
    pub fn from_entries(entries: Vec<DiffEntry>) -> Self {
        Self { entries }
    }

    /// Returns `true` if no entry describes a change.
    pub fn is_identical(&self) -> bool {
        self.entries.iter().all(|e| !e.is_change())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if both inputs were empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffEntry> {
        self.entries.iter()
    }

    pub fn stats(&self) -> Stats {
        Stats::from_entries(&self.entries)
    }

    /// Placeholder zones for one pane. See [`alignment_zones`].
    pub fn zones(&self, side: Side) -> Vec<AlignmentZone> {
        alignment_zones(&self.entries, side)
    }

    /// Highlight instructions for one pane. See [`decorations`].
    pub fn decorations(&self, side: Side) -> Vec<DecorationInstruction> {
        decorations(&self.entries, side)
    }
}

impl<'a> IntoIterator for &'a Diff {
    type Item = &'a DiffEntry;
    type IntoIter = std::slice::Iter<'a, DiffEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use twindiff_types::{DecorationCategory, EntryKind, SideLine};

    use crate::error::DiffError;
    use crate::lines::split_lines;

    fn compute(left: &str, right: &str) -> Diff {
        Diff::compute(left, right, &ComparisonOptions::default(), &DiffLimits::default()).unwrap()
    }

    #[test]
    fn appended_line() {
        let diff = compute("line1\nline2", "line1\nline2\nline3");
        let kinds: Vec<_> = diff.iter().map(DiffEntry::kind).collect();
        assert_eq!(
            kinds,
            vec![EntryKind::Unchanged, EntryKind::Unchanged, EntryKind::Added]
        );
        assert_eq!(diff.entries[2], DiffEntry::added(SideLine::new("line3", 3)));
    }

    #[test]
    fn replaced_tail_becomes_modified_pairs() {
        let diff = compute("A\nB\nC", "A\nX\nD");
        assert_eq!(
            diff.entries,
            vec![
                DiffEntry::unchanged(SideLine::new("A", 1), SideLine::new("A", 1)),
                DiffEntry::modified(SideLine::new("B", 2), SideLine::new("X", 2)),
                DiffEntry::modified(SideLine::new("C", 3), SideLine::new("D", 3)),
            ]
        );
        assert_eq!(
            diff.stats(),
            Stats {
                unchanged: 1,
                modified: 2,
                ..Default::default()
            }
        );
    }

    #[test]
    fn inserted_line_zone_and_decoration() {
        let diff = compute("A\nC", "A\nB\nC");
        assert_eq!(
            diff.zones(Side::Left),
            vec![AlignmentZone {
                after_line_number: 1,
                height_in_lines: 1
            }]
        );
        assert!(diff.zones(Side::Right).is_empty());
        assert_eq!(
            diff.decorations(Side::Right),
            vec![DecorationInstruction {
                line_number: 2,
                category: DecorationCategory::Added
            }]
        );
        assert!(diff.decorations(Side::Left).is_empty());
    }

    #[test]
    fn ignored_blank_line_disappears() {
        let opts = ComparisonOptions {
            ignore_blank_lines: true,
            ..Default::default()
        };
        let diff = Diff::compute("A\n\nB", "A\nB", &opts, &DiffLimits::default()).unwrap();
        assert_eq!(diff.len(), 2);
        assert!(diff.is_identical());
    }

    #[test]
    fn too_large_input_fails_fast() {
        let err = Diff::compute(
            "a\nb",
            "c",
            &ComparisonOptions::default(),
            &DiffLimits::with_max_total_lines(2),
        )
        .unwrap_err();
        assert!(matches!(err, DiffError::InputTooLarge { limit: 2, .. }));
    }

    #[test]
    fn serializes_as_entry_array() {
        let diff = compute("a", "b");
        let json = serde_json::to_value(&diff).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["kind"], "modified");
    }

    fn text() -> impl Strategy<Value = String> {
        (
            prop::collection::vec(prop::sample::select(vec!["a", "b", "c", " a", "A", ""]), 0..14),
            any::<bool>(),
        )
            .prop_map(|(lines, trailing)| {
                let mut s = lines.join("\n");
                if trailing && !lines.is_empty() {
                    s.push('\n');
                }
                s
            })
    }

    fn options() -> impl Strategy<Value = ComparisonOptions> {
        (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(w, c, b)| ComparisonOptions {
            ignore_whitespace: w,
            ignore_case: c,
            ignore_blank_lines: b,
        })
    }

    fn surviving_numbers(text: &str, opts: &ComparisonOptions) -> Vec<usize> {
        split_lines(text)
            .into_iter()
            .enumerate()
            .filter(|(_, l)| !opts.skips(l))
            .map(|(i, _)| i + 1)
            .collect()
    }

    proptest! {
        #[test]
        fn entries_partition_both_sides(left in text(), right in text(), opts in options()) {
            let diff = Diff::compute(&left, &right, &opts, &DiffLimits::unbounded()).unwrap();
            let lefts: Vec<usize> = diff.iter().filter_map(|e| e.number(Side::Left)).collect();
            let rights: Vec<usize> = diff.iter().filter_map(|e| e.number(Side::Right)).collect();
            prop_assert_eq!(lefts, surviving_numbers(&left, &opts));
            prop_assert_eq!(rights, surviving_numbers(&right, &opts));
        }

        #[test]
        fn identical_texts_are_unchanged(text in text(), opts in options()) {
            let diff = Diff::compute(&text, &text, &opts, &DiffLimits::unbounded()).unwrap();
            prop_assert!(diff.is_identical());
            prop_assert_eq!(diff.len(), surviving_numbers(&text, &opts).len());
        }

        #[test]
        fn zone_heights_match_missing_lines(left in text(), right in text()) {
            let diff = compute(&left, &right);
            for side in [Side::Left, Side::Right] {
                let height: usize = diff.zones(side).iter().map(|z| z.height_in_lines).sum();
                let missing = diff.iter().filter(|e| e.number(side).is_none()).count();
                prop_assert_eq!(height, missing);
                prop_assert!(diff.zones(side).iter().all(|z| z.height_in_lines >= 1));
            }
        }

        #[test]
        fn decorations_skip_unchanged(left in text(), right in text()) {
            let diff = compute(&left, &right);
            let left_decos = diff.decorations(Side::Left);
            let right_decos = diff.decorations(Side::Right);
            prop_assert!(left_decos.len() + right_decos.len() <= 2 * diff.len());
            let changed = diff.stats().deleted + diff.stats().added + 2 * diff.stats().modified;
            prop_assert_eq!(left_decos.len() + right_decos.len(), changed);
        }
    }
}
