//! Alignment calculator: placeholder gaps that keep two panes in step.

use twindiff_types::{AlignmentZone, DiffEntry, Side};

/// Compute the placeholder zones for one pane.
///
/// Every entry that has a line on the other pane but not on `side` needs one
/// gap row on `side`. Consecutive gap rows collapse into a single zone placed
/// after the last real line seen on `side` (0 when no line has been seen yet).
///
/// The heights of the returned zones always sum to the number of entries
/// that lack a line on `side`.
pub fn alignment_zones(entries: &[DiffEntry], side: Side) -> Vec<AlignmentZone> {
    let mut zones = Vec::new();
    let mut last_line = 0;
    let mut pending = 0;

    for entry in entries {
        match entry.number(side) {
            Some(number) => {
                flush(&mut zones, last_line, &mut pending);
                last_line = number;
            }
            None => {
                if entry.number(side.other()).is_some() {
                    pending += 1;
                }
            }
        }
    }
    flush(&mut zones, last_line, &mut pending);

    zones
}

fn flush(zones: &mut Vec<AlignmentZone>, after_line_number: usize, pending: &mut usize) {
    if *pending > 0 {
        zones.push(AlignmentZone {
            after_line_number,
            height_in_lines: *pending,
        });
        *pending = 0;
    }
}
