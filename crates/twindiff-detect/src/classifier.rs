use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DetectError, DetectResult};
use crate::rules::{BUILTIN_RULES, DEFAULT_FORMATTER, PLAINTEXT};

/// Only the head of a text is inspected.
const SAMPLE_LINES: usize = 200;

static BUILTIN: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    BUILTIN_RULES
        .iter()
        .map(|(pattern, language, formatter)| Rule {
            pattern: Regex::new(pattern).expect("built-in language pattern is valid"),
            language: (*language).to_string(),
            formatter: formatter.map(str::to_string),
        })
        .collect()
});

/// The outcome of classifying a text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Detection {
    /// Language identifier, e.g. `"javascript"`.
    pub language: String,
    /// Formatter identifier for the language, if one exists.
    pub formatter: Option<String>,
}

impl Detection {
    /// The result returned when no rule matches.
    pub fn plaintext() -> Self {
        Self {
            language: PLAINTEXT.to_string(),
            formatter: Some(DEFAULT_FORMATTER.to_string()),
        }
    }

    pub fn is_plaintext(&self) -> bool {
        self.language == PLAINTEXT
    }
}

/// A single detection heuristic.
#[derive(Clone, Debug)]
pub struct Rule {
    pattern: Regex,
    language: String,
    formatter: Option<String>,
}

impl Rule {
    /// Compile a rule. Fails only if `pattern` is not a valid regex.
    pub fn new(
        pattern: &str,
        language: impl Into<String>,
        formatter: Option<&str>,
    ) -> DetectResult<Self> {
        let language = language.into();
        let pattern = Regex::new(pattern).map_err(|source| DetectError::InvalidPattern {
            language: language.clone(),
            source,
        })?;
        Ok(Self {
            pattern,
            language,
            formatter: formatter.map(str::to_string),
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn formatter(&self) -> Option<&str> {
        self.formatter.as_deref()
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    fn detection(&self) -> Detection {
        Detection {
            language: self.language.clone(),
            formatter: self.formatter.clone(),
        }
    }
}

/// Ordered, first-match-wins language classifier.
#[derive(Clone, Debug)]
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Classifier {
    /// The built-in rule set.
    pub fn builtin() -> Self {
        Self {
            rules: BUILTIN.clone(),
        }
    }

    /// A classifier with exactly the given rules, in the given order.
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Put `rules` ahead of the existing ones.
    pub fn with_priority_rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules.splice(0..0, rules);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Guess the language of `text`. Never fails: unmatched text is
    /// [`Detection::plaintext`].
    pub fn classify(&self, text: &str) -> Detection {
        let sample = head(text, SAMPLE_LINES);
        match self.rules.iter().find(|rule| rule.matches(sample)) {
            Some(rule) => {
                debug!(language = %rule.language, "language detected");
                rule.detection()
            }
            None => Detection::plaintext(),
        }
    }

    /// Classify `text`, unless the caller already knows its language.
    ///
    /// An override's formatter is taken from the first rule for that
    /// language; unknown languages get no formatter.
    pub fn classify_with_override(&self, text: &str, language: Option<&str>) -> Detection {
        match language {
            Some(language) => Detection {
                language: language.to_string(),
                formatter: self.formatter_for(language).map(str::to_string),
            },
            None => self.classify(text),
        }
    }

    /// The formatter registered for a language, if any.
    pub fn formatter_for(&self, language: &str) -> Option<&str> {
        if language == PLAINTEXT {
            return Some(DEFAULT_FORMATTER);
        }
        self.rules
            .iter()
            .find(|rule| rule.language == language)
            .and_then(Rule::formatter)
    }
}

/// The first `lines` lines of `text`.
fn head(text: &str, lines: usize) -> &str {
    match text.match_indices('\n').nth(lines.saturating_sub(1)) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
