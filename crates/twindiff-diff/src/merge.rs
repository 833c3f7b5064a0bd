//! Block merger: fold adjacent delete/add runs into modified rows.

use twindiff_types::DiffEntry;

/// How deletes and adds inside adjacent runs are paired.
///
/// Only positional pairing exists today: the k-th delete of a run pairs
/// with the k-th add of the run that immediately follows it. Lines are never
/// compared for similarity, so a run whose shape does not reflect the real
/// edit can pair unrelated lines. That is a known limitation of the policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PairingPolicy {
    #[default]
    Positional,
}

/// Merge raw operations using [`PairingPolicy::Positional`].
pub fn merge_blocks(raw: Vec<DiffEntry>) -> Vec<DiffEntry> {
    merge_blocks_with(raw, PairingPolicy::default())
}

/// Merge raw operations with an explicit pairing policy.
///
/// A maximal run of `Deleted` entries immediately followed by a maximal run
/// of `Added` entries becomes `min(d, a)` `Modified` entries followed by the
/// leftover deletes or adds, in their original order. Everything else passes
/// through unchanged.
pub fn merge_blocks_with(raw: Vec<DiffEntry>, policy: PairingPolicy) -> Vec<DiffEntry> {
    let mut merged = Vec::with_capacity(raw.len());
    let mut iter = raw.into_iter().peekable();

    while let Some(entry) = iter.next() {
        let DiffEntry::Deleted { left } = entry else {
            merged.push(entry);
            continue;
        };

        let mut deletes = vec![left];
        while let Some(DiffEntry::Deleted { left }) =
            iter.next_if(|e| matches!(e, DiffEntry::Deleted { .. }))
        {
            deletes.push(left);
        }
        let mut adds = Vec::new();
        while let Some(DiffEntry::Added { right }) =
            iter.next_if(|e| matches!(e, DiffEntry::Added { .. }))
        {
            adds.push(right);
        }

        match policy {
            PairingPolicy::Positional => {
                let paired = deletes.len().min(adds.len());
                let mut deletes = deletes.into_iter();
                let mut adds = adds.into_iter();
                // Bounded so zip never pulls an unpaired delete.
                for (left, right) in deletes.by_ref().zip(adds.by_ref()).take(paired) {
                    merged.push(DiffEntry::modified(left, right));
                }
                merged.extend(deletes.map(DiffEntry::deleted));
                merged.extend(adds.map(DiffEntry::added));
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use twindiff_types::{EntryKind, SideLine};

    fn del(text: &str, n: usize) -> DiffEntry {
        DiffEntry::deleted(SideLine::new(text, n))
    }

    fn add(text: &str, n: usize) -> DiffEntry {
        DiffEntry::added(SideLine::new(text, n))
    }

    fn same(text: &str, l: usize, r: usize) -> DiffEntry {
        DiffEntry::unchanged(SideLine::new(text, l), SideLine::new(text, r))
    }

    #[test]
    fn equal_runs_pair_fully() {
        let merged = merge_blocks(vec![
            same("A", 1, 1),
            del("B", 2),
            del("C", 3),
            add("X", 2),
            add("D", 3),
        ]);
        assert_eq!(
            merged,
            vec![
                same("A", 1, 1),
                DiffEntry::modified(SideLine::new("B", 2), SideLine::new("X", 2)),
                DiffEntry::modified(SideLine::new("C", 3), SideLine::new("D", 3)),
            ]
        );
    }

    #[test]
    fn excess_deletes_follow_pairs() {
        let merged = merge_blocks(vec![del("a", 1), del("b", 2), del("c", 3), add("x", 1)]);
        assert_eq!(
            merged,
            vec![
                DiffEntry::modified(SideLine::new("a", 1), SideLine::new("x", 1)),
                del("b", 2),
                del("c", 3),
            ]
        );
    }

    #[test]
    fn excess_adds_follow_pairs() {
        let merged = merge_blocks(vec![del("a", 1), add("x", 1), add("y", 2)]);
        assert_eq!(
            merged,
            vec![
                DiffEntry::modified(SideLine::new("a", 1), SideLine::new("x", 1)),
                add("y", 2),
            ]
        );
    }

    #[test]
    fn lone_runs_pass_through() {
        let raw = vec![add("x", 1), same("A", 1, 2), del("b", 2), same("C", 3, 3)];
        assert_eq!(merge_blocks(raw.clone()), raw);
    }

    #[test]
    fn adds_before_deletes_are_not_paired() {
        let raw = vec![add("x", 1), del("a", 1)];
        assert_eq!(merge_blocks(raw.clone()), raw);
    }

    #[test]
    fn pairing_is_positional_not_by_similarity() {
        // "keep" would match "keep!" better, but position wins.
        let merged = merge_blocks(vec![
            del("other", 1),
            del("keep", 2),
            add("keep!", 1),
            add("another", 2),
        ]);
        assert_eq!(
            merged[0],
            DiffEntry::modified(SideLine::new("other", 1), SideLine::new("keep!", 1))
        );
        assert_eq!(merged[1].kind(), EntryKind::Modified);
    }

    #[test]
    fn empty_input() {
        assert!(merge_blocks(Vec::new()).is_empty());
    }
}
