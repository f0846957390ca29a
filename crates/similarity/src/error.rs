use thiserror::Error;

/// Errors raised when validating similarity settings.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimilarityError {
    #[error("invalid similarity config: {0}")]
    InvalidConfig(String),
}
