//! Decoration mapper: per-line highlight instructions for one pane.

use twindiff_types::{DecorationCategory, DecorationInstruction, DiffEntry, Side};

/// Highlight category for an entry on one pane.
///
/// | entry     | left     | right    |
/// |-----------|----------|----------|
/// | Deleted   | deleted  | none     |
/// | Added     | none     | added    |
/// | Modified  | modified | modified |
/// | Unchanged | none     | none     |
pub fn decoration_category(entry: &DiffEntry, side: Side) -> Option<DecorationCategory> {
    match (entry, side) {
        (DiffEntry::Deleted { .. }, Side::Left) => Some(DecorationCategory::Deleted),
        (DiffEntry::Added { .. }, Side::Right) => Some(DecorationCategory::Added),
        (DiffEntry::Modified { .. }, _) => Some(DecorationCategory::Modified),
        _ => None,
    }
}

/// Highlight instructions for every decorated line on one pane.
pub fn decorations(entries: &[DiffEntry], side: Side) -> Vec<DecorationInstruction> {
    entries
        .iter()
        .filter_map(|entry| {
            let category = decoration_category(entry, side)?;
            let line_number = entry.number(side)?;
            Some(DecorationInstruction {
                line_number,
                category,
            })
        })
        .collect()
}
