use std::path::Path;

use serde::{Deserialize, Serialize};
use twindiff_diff::DiffLimits;
use twindiff_export::{DEFAULT_LEFT_NAME, DEFAULT_RIGHT_NAME};
use twindiff_types::ComparisonOptions;

use crate::error::{SdkError, SdkResult};

/// Engine settings, loadable from TOML.
///
/// ```toml
/// left_name = "before.txt"
///
/// [options]
/// ignore_whitespace = true
///
/// [limits]
/// max_total_lines = 50000
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub options: ComparisonOptions,
    pub limits: DiffLimits,
    /// Label for the left text in patches and reports.
    pub left_name: String,
    /// Label for the right text in patches and reports.
    pub right_name: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            options: ComparisonOptions::default(),
            limits: DiffLimits::default(),
            left_name: DEFAULT_LEFT_NAME.to_string(),
            right_name: DEFAULT_RIGHT_NAME.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> SdkResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> SdkResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SdkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
