pub mod course_updates;
pub mod courses;
pub mod generator_service;

use std::cmp::Ordering;

use chrono::DateTime;

pub use generator_service::{GenerateOptions, Generator, GeneratorService};

/// Orders canonical start dates by instant; undated rows sort last.
pub(crate) fn by_start_date(a: Option<&str>, b: Option<&str>) -> Ordering {
    let instant = |d: Option<&str>| d.and_then(|d| DateTime::parse_from_rfc3339(d).ok());
    match (instant(a), instant(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
