//! The code-formatter seam.
//!
//! twindiff never formats text itself. It identifies which formatter applies
//! to a text and hands the text to a caller-supplied [`Formatter`].

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// No formatter is known for the language, or the formatter does not
    /// handle it.
    #[error("no formatter available for {0}")]
    Unsupported(String),

    /// The formatter ran and rejected the input.
    #[error("formatter {formatter} failed: {message}")]
    Failed { formatter: String, message: String },
}

/// An external code formatter.
pub trait Formatter {
    /// Format `text` with the formatter named `formatter`.
    fn format(&self, text: &str, formatter: &str) -> Result<String, FormatError>;
}

impl<F> Formatter for F
where
    F: Fn(&str, &str) -> Result<String, FormatError>,
{
    fn format(&self, text: &str, formatter: &str) -> Result<String, FormatError> {
        self(text, formatter)
    }
}
