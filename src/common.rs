use serde::Serialize;
use time::{macros::format_description, Date};

use crate::error::ValidationError;

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// Parse a `YYYY-MM-DD` calendar date and return it in canonical form.
pub fn parse_day(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let iso_day = format_description!("[year]-[month]-[day]");
    let date = Date::parse(raw.trim(), iso_day).map_err(|_| {
        ValidationError::new(field, format!("invalid date '{raw}', expected YYYY-MM-DD"))
    })?;
    date.format(iso_day)
        .map_err(|e| ValidationError::new(field, e.to_string()))
}

pub fn check_limit(limit: i64) -> Result<i64, ValidationError> {
    if limit < 0 {
        return Err(ValidationError::new("limit", "must not be negative"));
    }
    Ok(limit)
}

pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(())
}

pub fn require_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::new(field, "must be greater than 0"));
    }
    Ok(())
}
