use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("alignment zone height must be at least 1 (after line {after_line_number})")]
    EmptyZone { after_line_number: usize },

    #[error("unknown side: {0}")]
    UnknownSide(String),

    #[error("unknown decoration category: {0}")]
    UnknownCategory(String),
}
