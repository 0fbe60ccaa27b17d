//! Date canonicalization shared by both normalizers.
//!
//! JEX sends bare dates (`2020-01-01`) while Canvas sends full timestamps
//! (`2020-01-01T00:00:00Z`). Both are read into an instant and written back
//! as RFC 3339 with milliseconds and a numeric offset in one explicit zone.
//! Zone-less input is read as local time in that zone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone};
use chrono_tz::Tz;

use crate::error::AppError;

const OFFSET_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];
const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Widens reduced-precision forms (`2020`, `2020-01`, `2020-01-01T10`) to
/// ones chrono can parse.
fn pad_reduced(value: &str) -> Option<String> {
    match value.len() {
        4 => Some(format!("{}-01-01", value)),
        7 => Some(format!("{}-01", value)),
        13 if value.as_bytes()[10] == b'T' => Some(format!("{}:00", value)),
        _ => None,
    }
}

fn parse_naive(value: &str) -> Option<NaiveDateTime> {
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Parses one ISO-8601 value into an instant in `zone`.
pub fn parse_instant(
    field: &'static str,
    value: &str,
    zone: Tz,
) -> Result<DateTime<Tz>, AppError> {
    let invalid = || AppError::InvalidDate {
        field,
        value: value.to_string(),
    };
    let trimmed = value.trim();

    let with_offset = DateTime::parse_from_rfc3339(trimmed).ok().or_else(|| {
        OFFSET_DATE_TIME_FORMATS
            .iter()
            .find_map(|fmt| DateTime::parse_from_str(trimmed, fmt).ok())
    });
    if let Some(dt) = with_offset {
        return Ok(dt.with_timezone(&zone));
    }

    let naive = parse_naive(trimmed)
        .or_else(|| pad_reduced(trimmed).and_then(|padded| parse_naive(&padded)))
        .ok_or_else(invalid)?;

    // None only for wall-clock times skipped by a DST transition.
    zone.from_local_datetime(&naive).earliest().ok_or_else(invalid)
}

/// Canonical text for an optional date. Absent or blank input stays absent.
pub fn canonical_date(
    field: &'static str,
    value: Option<&str>,
    zone: Tz,
) -> Result<Option<String>, AppError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => {
            let instant = parse_instant(field, v, zone)?;
            Ok(Some(instant.to_rfc3339_opts(SecondsFormat::Millis, false)))
        }
        None => Ok(None),
    }
}
