//! Input rules shared by every entity.
//!
//! Free text is trimmed before it is checked or stored.

use crate::error::{AppError, AppResult};

pub const NAME_MAX_LEN: usize = 255;
pub const MANUFACTURER_NAME_MAX_LEN: usize = 100;
pub const FILTER_PLANT_DESCRIPTION_MAX_LEN: usize = 500;
pub const REPORT_DESCRIPTION_MAX_LEN: usize = 1000;

pub const YEAR_BUILT_MIN: i32 = 1800;
pub const YEAR_BUILT_MAX: i32 = 2100;

/// Trim `value` and require 1..=`max_len` characters.
pub fn required_text(value: &str, field: &str, max_len: usize) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput(format!("{} is required", field)));
    }
    if trimmed.chars().count() > max_len {
        return Err(AppError::InvalidInput(format!(
            "{} must be at most {} characters",
            field, max_len
        )));
    }
    Ok(trimmed.to_string())
}

/// Require a construction year within 1800..=2100.
pub fn validate_year_built(year: i32) -> AppResult<i32> {
    if !(YEAR_BUILT_MIN..=YEAR_BUILT_MAX).contains(&year) {
        return Err(AppError::InvalidInput(format!(
            "Year built must be between {} and {}",
            YEAR_BUILT_MIN, YEAR_BUILT_MAX
        )));
    }
    Ok(year)
}
