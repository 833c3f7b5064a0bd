use std::path::PathBuf;

use thiserror::Error;

use crate::format::FormatError;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("diff error: {0}")]
    Diff(#[from] twindiff_diff::DiffError),

    #[error("detection error: {0}")]
    Detect(#[from] twindiff_detect::DetectError),

    #[error("export error: {0}")]
    Export(#[from] twindiff_export::ExportError),

    #[error("format error: {0}")]
    Format(#[from] FormatError),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type SdkResult<T> = Result<T, SdkError>;
