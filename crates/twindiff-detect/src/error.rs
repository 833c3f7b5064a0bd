use thiserror::Error;

/// Errors from building custom classifier rules.
///
/// Classification itself never fails; only an invalid rule pattern does.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("invalid pattern for language {language}: {source}")]
    InvalidPattern {
        language: String,
        #[source]
        source: regex::Error,
    },
}

pub type DetectResult<T> = Result<T, DetectError>;
