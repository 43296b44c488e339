use crate::server::error::AppError;

/// Rejects empty or whitespace-only text.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }

    Ok(())
}

/// Rejects negative amounts. `None` passes.
pub fn require_non_negative(field: &str, value: Option<f64>) -> Result<(), AppError> {
    match value {
        Some(v) if v.is_nan() || v < 0.0 => Err(AppError::BadRequest(format!(
            "{} must be zero or greater",
            field
        ))),
        _ => Ok(()),
    }
}

/// Rejects values outside `min..=max`. `None` passes.
pub fn require_in_range(field: &str, value: Option<i32>, min: i32, max: i32) -> Result<(), AppError> {
    match value {
        Some(v) if v < min || v > max => Err(AppError::BadRequest(format!(
            "{} must be between {} and {}",
            field, min, max
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_rejects_blank() {
        assert!(require_non_empty("name", "Dock A").is_ok());
        assert!(require_non_empty("name", "   ").is_err());
    }

    #[test]
    fn non_negative_allows_none_and_zero() {
        assert!(require_non_negative("cost", None).is_ok());
        assert!(require_non_negative("cost", Some(0.0)).is_ok());
        assert!(require_non_negative("cost", Some(-0.01)).is_err());
        assert!(require_non_negative("cost", Some(f64::NAN)).is_err());
    }

    #[test]
    fn range_is_inclusive() {
        assert!(require_in_range("rating", Some(1), 1, 5).is_ok());
        assert!(require_in_range("rating", Some(5), 1, 5).is_ok());
        assert!(require_in_range("rating", Some(6), 1, 5).is_err());
        assert!(require_in_range("rating", None, 1, 5).is_ok());
    }
}
