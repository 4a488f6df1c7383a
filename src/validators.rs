//! Rule checks for the dish form fields.
//!
//! Every check takes the raw text of a control and either returns the
//! normalized value that goes into the payload or the rule that failed.

use regex_lite::Regex;
use static_init::dynamic;

use crate::constants::{SPICINESS_MAX, SPICINESS_MIN};
use crate::data_types::DishType;
use crate::errors::ValidationError;

#[dynamic]
static PREPARATION_TIME_RE: Regex =
    Regex::new(r"^(?:(?:([01]?\d|2[0-3]):)?([0-5]?\d):)?([0-5]?\d)$").unwrap();

#[dynamic]
static WHOLE_NUMBER_RE: Regex = Regex::new(r"^(0|[1-9]\d*)$").unwrap();

#[dynamic]
static DECIMAL_RE: Regex = Regex::new(r"^(0|[1-9]\d*)(\.\d+)?$").unwrap();

fn required(raw: &str) -> Result<&str, ValidationError> {
    if raw.is_empty() {
        Err(ValidationError::Required)
    } else {
        Ok(raw)
    }
}

pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
    required(raw).map(str::to_string)
}

/// Accepts `SS`, `MM:SS` and `HH:MM:SS` with unpadded components.
pub fn validate_preparation_time(raw: &str) -> Result<String, ValidationError> {
    let raw = required(raw)?;
    if !PREPARATION_TIME_RE.is_match(raw) {
        return Err(ValidationError::Pattern);
    }
    Ok(raw.to_string())
}

pub fn validate_dish_type(raw: &str) -> Result<DishType, ValidationError> {
    required(raw)?
        .parse::<DishType>()
        .map_err(|_| ValidationError::UnknownType)
}

/// Whole number of at least 1, used for slice counts.
pub fn validate_positive_int(raw: &str) -> Result<u32, ValidationError> {
    let raw = required(raw)?;
    if !WHOLE_NUMBER_RE.is_match(raw) {
        return Err(ValidationError::Pattern);
    }
    // digits only at this point, so a parse failure means overflow
    let value = raw.parse::<u32>().map_err(|_| ValidationError::Max)?;
    if value < 1 {
        return Err(ValidationError::Min);
    }
    Ok(value)
}

pub fn validate_non_negative_number(raw: &str) -> Result<f64, ValidationError> {
    let raw = required(raw)?;
    if !DECIMAL_RE.is_match(raw) {
        return Err(ValidationError::Pattern);
    }
    let value = raw.parse::<f64>().map_err(|_| ValidationError::Pattern)?;
    // too many digits parse to infinity, which JSON can only write as null
    if !value.is_finite() {
        return Err(ValidationError::Max);
    }
    if value < 0.0 {
        return Err(ValidationError::Min);
    }
    Ok(value)
}

pub fn validate_spiciness(raw: &str) -> Result<u8, ValidationError> {
    let raw = required(raw)?;
    if !WHOLE_NUMBER_RE.is_match(raw) {
        return Err(ValidationError::Pattern);
    }
    let value = raw.parse::<u32>().map_err(|_| ValidationError::Max)?;
    if value < u32::from(SPICINESS_MIN) {
        return Err(ValidationError::Min);
    }
    if value > u32::from(SPICINESS_MAX) {
        return Err(ValidationError::Max);
    }
    Ok(value as u8)
}
