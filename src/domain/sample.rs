// Sample domain models - wire format, parsed points, load errors
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// One entry of the wire payload. The producer enforces nothing, so every
/// field is re-validated before it reaches the chart.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSample {
    pub timestamp: String,
    pub value: f64,
}

/// A validated sample: `x` is a real instant and `y` is finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: DateTime<Utc>,
    pub y: f64,
}

impl Point {
    /// Parse a wire sample. Returns None when the timestamp is not a valid
    /// date-time or the value is not finite.
    pub fn from_sample(sample: &RawSample) -> Option<Self> {
        let x = parse_timestamp(&sample.timestamp)?;
        if !sample.value.is_finite() {
            return None;
        }
        Some(Self {
            x,
            y: sample.value,
        })
    }
}

/// Parse a wire timestamp. RFC 3339 is the expected form, but producers also
/// send offset-less date-times and bare dates; those are read as UTC, a bare
/// date as midnight.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(instant) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(instant.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// Why the series is empty. Display yields the exact user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Data is not in expected format or empty")]
    UnexpectedFormat,
    #[error("Error fetching data")]
    Fetch,
}

/// Convert a raw payload into chart points.
///
/// The payload must be a non-empty JSON array. Entries that do not decode,
/// carry an unparseable timestamp, or a non-finite value are dropped with a
/// warning; surviving points keep payload order.
pub fn points_from_payload(payload: &Value) -> Result<Vec<Point>, LoadError> {
    let entries = match payload.as_array() {
        Some(entries) if !entries.is_empty() => entries,
        _ => return Err(LoadError::UnexpectedFormat),
    };

    let mut points = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let sample: RawSample = match serde_json::from_value(entry.clone()) {
            Ok(sample) => sample,
            Err(e) => {
                tracing::warn!("Dropping undecodable sample at index {}: {}", index, e);
                continue;
            }
        };
        match Point::from_sample(&sample) {
            Some(point) => points.push(point),
            None => {
                tracing::warn!(
                    "Dropping sample at index {} with invalid timestamp or value: {}",
                    index,
                    sample.timestamp
                );
            }
        }
    }
    Ok(points)
}
