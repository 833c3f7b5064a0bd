use serde::{Deserialize, Serialize};

/// Normalization applied to each line before it is compared.
///
/// Options only change the comparison key. The raw line is what ends up in
/// every [`DiffEntry`](crate::DiffEntry), patch, and report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonOptions {
    /// Collapse whitespace runs to a single space and trim both ends.
    pub ignore_whitespace: bool,
    /// Compare lines case-insensitively.
    pub ignore_case: bool,
    /// Drop empty and whitespace-only lines from both sides entirely.
    pub ignore_blank_lines: bool,
}

impl ComparisonOptions {
    /// Exact comparison: every option off.
    pub fn exact() -> Self {
        Self::default()
    }

    /// Returns `true` if no normalization is enabled.
    pub fn is_exact(&self) -> bool {
        !(self.ignore_whitespace || self.ignore_case || self.ignore_blank_lines)
    }

    /// Compute the comparison key for a raw line.
    pub fn key(&self, line: &str) -> String {
        let mut key = if self.ignore_whitespace {
            line.split_whitespace().collect::<Vec<_>>().join(" ")
        } else {
            line.to_string()
        };
        if self.ignore_case {
            key = key.to_lowercase();
        }
        key
    }

    /// Whether a line is dropped under `ignore_blank_lines`.
    pub fn skips(&self, line: &str) -> bool {
        self.ignore_blank_lines && line.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_exact() {
        let opts = ComparisonOptions::default();
        assert!(opts.is_exact());
        assert_eq!(opts.key("  Hello\tWorld "), "  Hello\tWorld ");
    }

    #[test]
    fn whitespace_is_collapsed_and_trimmed() {
        let opts = ComparisonOptions {
            ignore_whitespace: true,
            ..Default::default()
        };
        assert_eq!(opts.key("  a \t  b  "), "a b");
        assert_eq!(opts.key("   "), "");
    }

    #[test]
    fn case_is_folded() {
        let opts = ComparisonOptions {
            ignore_case: true,
            ..Default::default()
        };
        assert_eq!(opts.key("FooBar"), "foobar");
    }

    #[test]
    fn combined_options() {
        let opts = ComparisonOptions {
            ignore_whitespace: true,
            ignore_case: true,
            ignore_blank_lines: false,
        };
        assert_eq!(opts.key(" Let  X = 1 "), "let x = 1");
        assert!(!opts.skips(""));
    }

    #[test]
    fn blank_lines_are_skipped_only_when_enabled() {
        let opts = ComparisonOptions {
            ignore_blank_lines: true,
            ..Default::default()
        };
        assert!(opts.skips(""));
        assert!(opts.skips(" \t "));
        assert!(!opts.skips("x"));
        assert!(!ComparisonOptions::exact().skips(""));
    }

    #[test]
    fn missing_fields_deserialize_as_false() {
        let opts: ComparisonOptions = serde_json::from_str(r#"{"ignore_case": true}"#).unwrap();
        assert!(opts.ignore_case);
        assert!(!opts.ignore_whitespace);
        assert!(!opts.ignore_blank_lines);
    }
}
