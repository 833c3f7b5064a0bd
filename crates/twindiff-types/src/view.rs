//! Rendering metadata consumed by a dual-pane editor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A placeholder gap inserted into one pane so both panes stay aligned.
///
/// `after_line_number == 0` places the gap before the first real line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlignmentZone {
    pub after_line_number: usize,
    pub height_in_lines: usize,
}

impl AlignmentZone {
    /// Create a zone, rejecting zero-height gaps.
    pub fn new(after_line_number: usize, height_in_lines: usize) -> Result<Self, TypeError> {
        if height_in_lines == 0 {
            return Err(TypeError::EmptyZone { after_line_number });
        }
        Ok(Self {
            after_line_number,
            height_in_lines,
        })
    }
}

/// Highlight style for a single line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecorationCategory {
    Deleted,
    Added,
    Modified,
}

impl DecorationCategory {
    /// Stable CSS-friendly class name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deleted => "deleted",
            Self::Added => "added",
            Self::Modified => "modified",
        }
    }
}

impl fmt::Display for DecorationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecorationCategory {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deleted" => Ok(Self::Deleted),
            "added" => Ok(Self::Added),
            "modified" => Ok(Self::Modified),
            other => Err(TypeError::UnknownCategory(other.to_string())),
        }
    }
}

/// Highlight instruction for one line of one pane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecorationInstruction {
    pub line_number: usize,
    pub category: DecorationCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_requires_height() {
        assert!(AlignmentZone::new(0, 1).is_ok());
        assert_eq!(
            AlignmentZone::new(3, 0),
            Err(TypeError::EmptyZone { after_line_number: 3 })
        );
    }

    #[test]
    fn category_round_trips_through_str() {
        for cat in [
            DecorationCategory::Deleted,
            DecorationCategory::Added,
            DecorationCategory::Modified,
        ] {
            assert_eq!(cat.as_str().parse::<DecorationCategory>().unwrap(), cat);
        }
        assert!("unchanged".parse::<DecorationCategory>().is_err());
    }

    #[test]
    fn instruction_serializes_snake_case() {
        let d = DecorationInstruction {
            line_number: 2,
            category: DecorationCategory::Added,
        };
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"line_number":2,"category":"added"}"#);
    }
}
