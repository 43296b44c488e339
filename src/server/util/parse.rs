use chrono::{DateTime, NaiveDate, Utc};

use crate::server::error::AppError;

/// Parses a date query parameter.
///
/// Accepts an RFC 3339 timestamp (`2024-01-31T12:00:00Z`) or a plain calendar date
/// (`2024-01-31`), which is read as midnight UTC.
///
/// # Arguments
/// - `name` - Query parameter name, used in the error message
/// - `value` - Raw parameter value
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Parsed instant
/// - `Err(AppError::BadRequest)` - Value is neither format
pub fn parse_date_param(name: &str, value: &str) -> Result<DateTime<Utc>, AppError> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "Invalid {}: expected RFC 3339 timestamp or YYYY-MM-DD date",
                name
            ))
        })
}

/// Parses an optional date query parameter, treating absent or blank values as `None`.
pub fn parse_optional_date_param(
    name: &str,
    value: Option<&str>,
) -> Result<Option<DateTime<Utc>>, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => parse_date_param(name, v).map(Some),
        _ => Ok(None),
    }
}

/// Validates a month-count query parameter, applying `default` when absent or zero.
///
/// # Returns
/// - `Ok(u32)` - Positive month count
/// - `Err(AppError::BadRequest)` - Value is negative or too large
pub fn parse_months(value: Option<i64>, default: u32) -> Result<u32, AppError> {
    match value {
        None | Some(0) => Ok(default),
        Some(months) if months > 0 => u32::try_from(months)
            .map_err(|_| AppError::BadRequest("months is too large".to_string())),
        Some(_) => Err(AppError::BadRequest(
            "months must be a positive integer".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_rfc3339_timestamp() {
        let parsed = parse_date_param("startDate", "2024-03-01T10:30:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap());
    }

    #[test]
    fn parses_plain_date_as_midnight_utc() {
        let parsed = parse_date_param("endDate", "2024-01-31").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap());
    }

    #[test]
    fn rejects_malformed_date() {
        let result = parse_date_param("startDate", "31/01/2024");
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn blank_optional_date_is_none() {
        assert!(parse_optional_date_param("startDate", Some("  "))
            .unwrap()
            .is_none());
        assert!(parse_optional_date_param("startDate", None).unwrap().is_none());
    }

    #[test]
    fn months_defaults_and_validates() {
        assert_eq!(parse_months(None, 12).unwrap(), 12);
        assert_eq!(parse_months(Some(3), 12).unwrap(), 3);
        assert!(matches!(parse_months(Some(-4), 12), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn zero_months_falls_back_to_default() {
        assert_eq!(parse_months(Some(0), 12).unwrap(), 12);
        assert_eq!(parse_months(Some(0), 6).unwrap(), 6);
    }
}
