use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use twindiff_detect::{Classifier, Detection};
use twindiff_diff::Diff;
use twindiff_export::{apply_patch, build_patch, write_report, Patch, ReportOptions};
use twindiff_types::{AlignmentZone, DecorationInstruction, Side, Stats};

use crate::config::EngineConfig;
use crate::error::SdkResult;
use crate::format::{FormatError, Formatter};

/// Everything a dual-pane viewer needs for one pair of texts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub entries: Diff,
    pub stats: Stats,
    pub left_zones: Vec<AlignmentZone>,
    pub right_zones: Vec<AlignmentZone>,
    pub left_decorations: Vec<DecorationInstruction>,
    pub right_decorations: Vec<DecorationInstruction>,
    pub left_language: Detection,
    pub right_language: Detection,
}

impl Comparison {
    pub fn zones(&self, side: Side) -> &[AlignmentZone] {
        match side {
            Side::Left => &self.left_zones,
            Side::Right => &self.right_zones,
        }
    }

    pub fn decorations(&self, side: Side) -> &[DecorationInstruction] {
        match side {
            Side::Left => &self.left_decorations,
            Side::Right => &self.right_decorations,
        }
    }

    pub fn language(&self, side: Side) -> &Detection {
        match side {
            Side::Left => &self.left_language,
            Side::Right => &self.right_language,
        }
    }
}

/// High-level twindiff API.
///
/// An engine is stateless apart from its configuration: every call is a pure
/// function of its arguments. Caching results is left to the caller.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    config: EngineConfig,
    classifier: Classifier,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            classifier: Classifier::builtin(),
        }
    }

    /// Replace the language classifier.
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    // ---- Comparison ----

    /// Diff two texts with the configured options and limits.
    pub fn diff(&self, left: &str, right: &str) -> SdkResult<Diff> {
        Ok(Diff::compute(left, right, &self.config.options, &self.config.limits)?)
    }

    /// Diff two texts and derive zones, decorations, stats, and languages.
    pub fn compare(&self, left: &str, right: &str) -> SdkResult<Comparison> {
        let diff = self.diff(left, right)?;
        let comparison = Comparison {
            stats: diff.stats(),
            left_zones: diff.zones(Side::Left),
            right_zones: diff.zones(Side::Right),
            left_decorations: diff.decorations(Side::Left),
            right_decorations: diff.decorations(Side::Right),
            left_language: self.detect(left),
            right_language: self.detect(right),
            entries: diff,
        };
        info!(
            unchanged = comparison.stats.unchanged,
            deleted = comparison.stats.deleted,
            added = comparison.stats.added,
            modified = comparison.stats.modified,
            "comparison complete"
        );
        Ok(comparison)
    }

    // ---- Detection ----

    pub fn detect(&self, text: &str) -> Detection {
        self.classifier.classify(text)
    }

    pub fn detect_with_override(&self, text: &str, language: Option<&str>) -> Detection {
        self.classifier.classify_with_override(text, language)
    }

    // ---- Serialization ----

    /// Build the unified patch taking `left` to `right`.
    ///
    /// Patches always compare exactly, whatever the configured options, so
    /// that applying one reproduces `right` byte for byte.
    pub fn build_patch(&self, left: &str, right: &str) -> SdkResult<Patch> {
        Ok(build_patch(
            left,
            right,
            Some(&self.config.left_name),
            Some(&self.config.right_name),
            &self.config.limits,
        )?)
    }

    /// Unified patch text taking `left` to `right`.
    pub fn patch(&self, left: &str, right: &str) -> SdkResult<String> {
        Ok(self.build_patch(left, right)?.to_string())
    }

    /// Apply unified patch text to `left`.
    pub fn apply(&self, left: &str, patch: &str) -> SdkResult<String> {
        Ok(apply_patch(left, patch)?)
    }

    /// Self-contained HTML report comparing two texts.
    pub fn report(&self, left: &str, right: &str) -> SdkResult<String> {
        let diff = self.diff(left, right)?;
        let options = ReportOptions {
            title: format!("{} vs {}", self.config.left_name, self.config.right_name),
            left_name: self.config.left_name.clone(),
            right_name: self.config.right_name.clone(),
        };
        Ok(write_report(left, right, &diff.entries, &diff.stats(), &options)?)
    }

    // ---- Formatting ----

    /// Format one side with an external formatter.
    ///
    /// The language is detected unless `language` overrides it. The input is
    /// never modified; on any failure the caller keeps its original text.
    pub fn format_side<F: Formatter + ?Sized>(
        &self,
        formatter: &F,
        text: &str,
        language: Option<&str>,
    ) -> SdkResult<String> {
        let detection = self.detect_with_override(text, language);
        let Some(id) = detection.formatter.as_deref() else {
            return Err(FormatError::Unsupported(detection.language).into());
        };
        debug!(language = %detection.language, formatter = id, "formatting text");
        Ok(formatter.format(text, id)?)
    }
}
