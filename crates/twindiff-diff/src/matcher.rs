//! Longest-common-subsequence matching over comparison keys.
//!
//! A classic dynamic-programming table of LCS lengths is filled in O(m·n)
//! and then walked back from `(m, n)` to `(0, 0)`. When several LCSs of the
//! same length exist, the walk's tie-break decides which one is returned, so
//! the rule is a named [`TieBreak`] policy rather than an accident of control
//! flow.

/// Which index the backtrack decrements when both neighbouring cells hold the
/// same LCS length.
///
/// [`TieBreak::PreferRight`] is what every twindiff output is built with.
/// The choice is arbitrary among equal-length LCSs but changes which lines
/// end up paired, so it must stay fixed for results to be reproducible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Step back along the right sequence first.
    #[default]
    PreferRight,
    /// Step back along the left sequence first.
    PreferLeft,
}

/// Compute one LCS of `left` and `right` using [`TieBreak::PreferRight`].
///
/// Returns matched `(left_index, right_index)` pairs, strictly increasing on
/// both sides.
pub fn lcs_pairs<T: PartialEq>(left: &[T], right: &[T]) -> Vec<(usize, usize)> {
    lcs_pairs_with(left, right, TieBreak::default())
}

/// Compute one LCS of `left` and `right` with an explicit tie-break policy.
pub fn lcs_pairs_with<T: PartialEq>(
    left: &[T],
    right: &[T],
    tie_break: TieBreak,
) -> Vec<(usize, usize)> {
    let table = LengthTable::build(left, right);

    let mut pairs = Vec::with_capacity(table.get(left.len(), right.len()) as usize);
    let (mut i, mut j) = (left.len(), right.len());
    while i > 0 && j > 0 {
        if left[i - 1] == right[j - 1] {
            pairs.push((i - 1, j - 1));
            i -= 1;
            j -= 1;
            continue;
        }
        let up = table.get(i - 1, j);
        let back = table.get(i, j - 1);
        if up > back {
            i -= 1;
        } else if back > up {
            j -= 1;
        } else {
            match tie_break {
                TieBreak::PreferRight => j -= 1,
                TieBreak::PreferLeft => i -= 1,
            }
        }
    }
    pairs.reverse();
    pairs
}

/// Row-major `(m + 1) × (n + 1)` table of LCS lengths of prefixes.
struct LengthTable {
    width: usize,
    cells: Vec<u32>,
}

impl LengthTable {
    fn build<T: PartialEq>(left: &[T], right: &[T]) -> Self {
        let width = right.len() + 1;
        let mut cells = vec![0u32; (left.len() + 1) * width];
        for i in 1..=left.len() {
            for j in 1..=right.len() {
                cells[i * width + j] = if left[i - 1] == right[j - 1] {
                    cells[(i - 1) * width + (j - 1)] + 1
                } else {
                    cells[(i - 1) * width + j].max(cells[i * width + (j - 1)])
                };
            }
        }
        Self { width, cells }
    }

    fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.width + j]
    }
}
