//! Error types for conversion and input validation

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("Amount is empty")]
    EmptyInput,
    #[error("Invalid amount: {0}")]
    InvalidNumber(String),
    #[error("Amount must not be negative: {0}")]
    NegativeAmount(f64),
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
    #[error("Invalid rate table: {0}")]
    InvalidRateTable(String),
}

impl ConvertError {
    /// True for failures caused by what the user typed. These are reported
    /// transiently and never change screen state.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ConvertError::EmptyInput
                | ConvertError::InvalidNumber(_)
                | ConvertError::NegativeAmount(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_classified() {
        assert!(ConvertError::EmptyInput.is_input_error());
        assert!(ConvertError::InvalidNumber("abc".to_string()).is_input_error());
        assert!(ConvertError::NegativeAmount(-1.0).is_input_error());
        assert!(!ConvertError::UnknownCurrency("GBP".to_string()).is_input_error());
        assert!(!ConvertError::InvalidRateTable("bad".to_string()).is_input_error());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConvertError::UnknownCurrency("GBP".to_string()).to_string(),
            "Unknown currency: GBP"
        );
        assert_eq!(
            ConvertError::InvalidNumber("1,5".to_string()).to_string(),
            "Invalid amount: 1,5"
        );
    }
}
