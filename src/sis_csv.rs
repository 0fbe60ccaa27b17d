//! Canvas SIS import CSV output.
//!
//! @link https://canvas.instructure.com/doc/api/file.sis_csv.html

use serde::Serialize;

use crate::error::AppError;
use crate::models::{CourseShell, SisCourse};

/// A row type with a fixed column layout. `HEADERS` must list the serialized
/// fields in declaration order.
pub trait SisCsvRecord: Serialize {
    const HEADERS: &'static [&'static str];
}

impl SisCsvRecord for SisCourse {
    const HEADERS: &'static [&'static str] = &[
        "course_id",
        "short_name",
        "long_name",
        "status",
        "start_date",
        "end_date",
    ];
}

impl SisCsvRecord for CourseShell {
    const HEADERS: &'static [&'static str] = &[
        "course_id",
        "short_name",
        "long_name",
        "term_id",
        "status",
        "start_date",
        "end_date",
        "blueprint_course_id",
    ];
}

/// Header line plus one line per row, `\n` separated with no trailing
/// newline. The header is written even when `rows` is empty.
pub fn to_sis_csv<R: SisCsvRecord>(rows: &[R]) -> Result<String, AppError> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    csv.write_record(R::HEADERS)?;
    for row in rows {
        csv.serialize(row)?;
    }

    let bytes = csv
        .into_inner()
        .map_err(|e| AppError::Csv(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|e| AppError::Csv(e.to_string()))?;

    Ok(match text.strip_suffix('\n') {
        Some(trimmed) => trimmed.to_string(),
        None => text,
    })
}
