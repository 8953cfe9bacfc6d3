//! Error types for classical cipher operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Missing key (the keyword contains no letters)")]
    MissingKey,

    #[error("Insufficient sample: {letters} letters, at least {required} required for analysis")]
    InsufficientSample { letters: usize, required: usize },
}

pub type Result<T> = std::result::Result<T, CipherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            CipherError::InvalidParameter("rail count must be at least 2".to_string()).to_string(),
            "Invalid parameter: rail count must be at least 2"
        );
        assert_eq!(
            CipherError::InsufficientSample { letters: 7, required: 20 }.to_string(),
            "Insufficient sample: 7 letters, at least 20 required for analysis"
        );
    }
}
