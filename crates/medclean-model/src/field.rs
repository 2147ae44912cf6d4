//! Typed parsing for numeric record fields.
//!
//! Each parser returns an explicit error instead of silently yielding an
//! absent value; callers decide whether a failed parse degrades to "field
//! missing" for that record.

use thiserror::Error;

/// Why a raw cell could not be parsed into a field value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("empty value")]
    Empty,
    #[error("not numeric: {0:?}")]
    NotNumeric(String),
}

/// Parse an age cell into integer years.
///
/// Accepts plain integers and whole-valued decimals (`"54"`, `"54.0"`);
/// fractional ages are rejected rather than rounded.
pub fn parse_age(raw: &str) -> Result<i64, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Empty);
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| FieldError::NotNumeric(trimmed.to_string()))?;
    if value.is_finite() && value.fract() == 0.0 {
        Ok(value as i64)
    } else {
        Err(FieldError::NotNumeric(trimmed.to_string()))
    }
}

/// Parse an expense cell into a currency amount.
///
/// Negative amounts parse successfully; rejecting them is a sanitization
/// rule, not a parse failure.
pub fn parse_expense(raw: &str) -> Result<f64, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Empty);
    }
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| FieldError::NotNumeric(trimmed.to_string()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FieldError::NotNumeric(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_and_whole_float_ages() {
        assert_eq!(parse_age("54"), Ok(54));
        assert_eq!(parse_age(" 54.0 "), Ok(54));
        assert_eq!(parse_age("-3"), Ok(-3));
    }

    #[test]
    fn rejects_non_numeric_and_fractional_ages() {
        assert_eq!(parse_age(""), Err(FieldError::Empty));
        assert_eq!(parse_age("   "), Err(FieldError::Empty));
        assert_eq!(
            parse_age("fifty"),
            Err(FieldError::NotNumeric("fifty".to_string()))
        );
        assert_eq!(
            parse_age("54.5"),
            Err(FieldError::NotNumeric("54.5".to_string()))
        );
    }

    #[test]
    fn parses_expenses_including_negative() {
        assert_eq!(parse_expense("250.75"), Ok(250.75));
        assert_eq!(parse_expense("-5"), Ok(-5.0));
        assert_eq!(parse_expense(""), Err(FieldError::Empty));
        assert_eq!(
            parse_expense("NaN"),
            Err(FieldError::NotNumeric("NaN".to_string()))
        );
    }
}
