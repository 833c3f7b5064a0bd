use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// One pane of a side-by-side comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The original ("old") text.
    Left,
    /// The changed ("new") text.
    Right,
}

impl Side {
    /// The opposite pane.
    pub fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

impl FromStr for Side {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" | "old" => Ok(Self::Left),
            "right" | "new" => Ok(Self::Right),
            other => Err(TypeError::UnknownSide(other.to_string())),
        }
    }
}

/// A raw line of input together with its position in the original text.
///
/// `number` is 1-based and always refers to the unfiltered input, even when
/// blank lines were excluded from comparison.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideLine {
    pub text: String,
    pub number: usize,
}

impl SideLine {
    pub fn new(text: impl Into<String>, number: usize) -> Self {
        Self {
            text: text.into(),
            number,
        }
    }
}

/// The classification of one row in a side-by-side diff.
///
/// Each variant carries exactly the sides it needs, so an unchanged row
/// without a right line (or an added row with a left line) cannot be built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffEntry {
    /// The line is present on both sides with equal comparison keys.
    Unchanged { left: SideLine, right: SideLine },
    /// The line exists only on the left.
    Deleted { left: SideLine },
    /// The line exists only on the right.
    Added { right: SideLine },
    /// A deleted line paired with an added line.
    Modified { left: SideLine, right: SideLine },
}

impl DiffEntry {
    pub fn unchanged(left: SideLine, right: SideLine) -> Self {
        Self::Unchanged { left, right }
    }

    pub fn deleted(left: SideLine) -> Self {
        Self::Deleted { left }
    }

    pub fn added(right: SideLine) -> Self {
        Self::Added { right }
    }

    pub fn modified(left: SideLine, right: SideLine) -> Self {
        Self::Modified { left, right }
    }

    /// The variant tag without its payload.
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Unchanged { .. } => EntryKind::Unchanged,
            Self::Deleted { .. } => EntryKind::Deleted,
            Self::Added { .. } => EntryKind::Added,
            Self::Modified { .. } => EntryKind::Modified,
        }
    }

    /// The left line, if this entry has one.
    pub fn left(&self) -> Option<&SideLine> {
        match self {
            Self::Unchanged { left, .. } | Self::Deleted { left } | Self::Modified { left, .. } => {
                Some(left)
            }
            Self::Added { .. } => None,
        }
    }

    /// The right line, if this entry has one.
    pub fn right(&self) -> Option<&SideLine> {
        match self {
            Self::Unchanged { right, .. } | Self::Added { right } | Self::Modified { right, .. } => {
                Some(right)
            }
            Self::Deleted { .. } => None,
        }
    }

    /// The line on the given side, if any.
    pub fn line(&self, side: Side) -> Option<&SideLine> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    /// The original 1-based line number on the given side, if any.
    pub fn number(&self, side: Side) -> Option<usize> {
        self.line(side).map(|l| l.number)
    }

    /// Returns `true` for every kind except [`DiffEntry::Unchanged`].
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged { .. })
    }
}

/// Payload-free tag of a [`DiffEntry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Unchanged,
    Deleted,
    Added,
    Modified,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchanged => write!(f, "unchanged"),
            Self::Deleted => write!(f, "deleted"),
            Self::Added => write!(f, "added"),
            Self::Modified => write!(f, "modified"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_other_flips() {
        assert_eq!(Side::Left.other(), Side::Right);
        assert_eq!(Side::Right.other(), Side::Left);
    }

    #[test]
    fn side_parse() {
        assert_eq!("left".parse::<Side>().unwrap(), Side::Left);
        assert_eq!("new".parse::<Side>().unwrap(), Side::Right);
        assert_eq!(
            "middle".parse::<Side>(),
            Err(TypeError::UnknownSide("middle".into()))
        );
    }

    #[test]
    fn accessors_follow_variant() {
        let deleted = DiffEntry::deleted(SideLine::new("gone", 4));
        assert_eq!(deleted.number(Side::Left), Some(4));
        assert_eq!(deleted.number(Side::Right), None);
        assert!(deleted.is_change());

        let added = DiffEntry::added(SideLine::new("new", 7));
        assert!(added.left().is_none());
        assert_eq!(added.right().map(|l| l.text.as_str()), Some("new"));

        let same = DiffEntry::unchanged(SideLine::new("x", 1), SideLine::new("x", 2));
        assert_eq!(same.kind(), EntryKind::Unchanged);
        assert_eq!(same.number(Side::Right), Some(2));
        assert!(!same.is_change());
    }

    #[test]
    fn modified_carries_both_sides() {
        let entry = DiffEntry::modified(SideLine::new("B", 2), SideLine::new("X", 2));
        assert_eq!(entry.kind(), EntryKind::Modified);
        assert_eq!(entry.line(Side::Left).unwrap().text, "B");
        assert_eq!(entry.line(Side::Right).unwrap().text, "X");
    }

    #[test]
    fn serde_uses_kind_tag() {
        let entry = DiffEntry::added(SideLine::new("line3", 3));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kind"], "added");
        assert_eq!(json["right"]["number"], 3);

        let parsed: DiffEntry = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn kind_display() {
        assert_eq!(EntryKind::Modified.to_string(), "modified");
        assert_eq!(EntryKind::Unchanged.to_string(), "unchanged");
    }
}
