//! Validation of raw amount text before it reaches the engine.
use crate::core::error::{ConvertError, Result};

/// Parses user-entered amount text.
///
/// Blank or absent text is `EmptyInput`, text that is not a finite number is
/// `InvalidNumber`, and numbers below zero are `NegativeAmount`.
pub fn parse_amount(raw: Option<&str>) -> Result<f64> {
    let text = raw.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let amount: f64 = text
        .parse()
        .map_err(|_| ConvertError::InvalidNumber(text.to_string()))?;
    if !amount.is_finite() {
        return Err(ConvertError::InvalidNumber(text.to_string()));
    }
    if amount < 0.0 {
        return Err(ConvertError::NegativeAmount(amount));
    }
    Ok(amount)
}
