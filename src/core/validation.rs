//! Field checks shared by every write path.

use crate::errors::{Error, Result};

/// Rejects zero, negative and non-finite amounts.
pub fn require_positive_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::InvalidAmount { amount });
    }
    Ok(())
}

/// Rejects negative and non-finite amounts; zero is allowed.
pub fn require_non_negative_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount { amount });
    }
    Ok(())
}

/// Trims `value` and checks its length in characters against `min..=max`.
pub fn require_text(field: &str, value: &str, min: usize, max: usize) -> Result<String> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    if len < min || len > max {
        return Err(Error::InvalidInput {
            message: format!("{field} must be between {min} and {max} characters"),
        });
    }
    Ok(trimmed.to_string())
}

/// Normalizes an optional note: blank becomes `None`, long text is rejected.
pub fn optional_text(field: &str, value: Option<&str>, max: usize) -> Result<Option<String>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) if text.chars().count() > max => Err(Error::InvalidInput {
            message: format!("{field} cannot be longer than {max} characters"),
        }),
        Some(text) => Ok(Some(text.to_string())),
    }
}
