use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{ChartError, ChartResult};

#[must_use]
pub fn datetime_to_axis_millis(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64
}

/// Maps an axis coordinate in epoch milliseconds back to a UTC timestamp.
///
/// Returns `None` for non-finite values and values outside chrono's range.
#[must_use]
pub fn axis_millis_to_datetime(raw_value: f64) -> Option<DateTime<Utc>> {
    if !raw_value.is_finite() || raw_value.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(raw_value.round() as i64)
}

/// Formats a timestamp as `YYYY-MM-DDTHH:mm:ssZ`.
#[must_use]
pub fn format_iso_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parses a category label as a number.
///
/// Blank strings and non-finite results are rejected so that labels such as
/// `"NaN"` or `"inf"` keep their textual form.
#[must_use]
pub fn parse_number_value(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|number| number.is_finite())
}

pub fn require_finite(value: f64, field_name: &str) -> ChartResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChartError::InvalidData(format!("{field_name} must be finite")))
    }
}
