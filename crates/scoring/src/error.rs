use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Converted score {0} does not fit in an integer score")]
    OutOfRange(f64),
}

pub type Result<T> = std::result::Result<T, ScoringError>;

impl ScoringError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, ScoringError::Configuration(_))
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ScoringError::OutOfRange(_))
    }
}
