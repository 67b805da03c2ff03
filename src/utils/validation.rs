use crate::utils::error::{MatchError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Legal geographic ranges: latitude [-90, 90], longitude [-180, 180],
/// inclusive at all four corners.
pub fn is_valid_coordinate(latitude: f64, longitude: f64) -> bool {
    (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    if value.is_nan() || value <= 0.0 {
        return Err(MatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be greater than zero".to_string(),
        });
    }
    Ok(())
}
