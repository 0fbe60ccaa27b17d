use chrono::{DateTime, NaiveDate};
use tracing::{debug, info};

use crate::config::OutputSettings;
use crate::error::AppError;
use crate::jex::{JexClient, JexCourse};
use crate::models::CourseShell;
use crate::sis_csv::to_sis_csv;
use crate::sync::jex_course_to_sis;

use super::by_start_date;

/// `{year}-{term}`, e.g. `2020-SP`. Empty unless both parts are known.
fn term_id(course: &JexCourse) -> String {
    match (course.year, course.term.as_deref().map(str::trim)) {
        (Some(year), Some(term)) if !term.is_empty() => format!("{}-{}", year, term),
        _ => String::new(),
    }
}

/// JEX's own spelling of a date, blank treated as absent.
fn raw_date(value: &Option<String>) -> Option<String> {
    value.clone().filter(|d| !d.trim().is_empty())
}

/// One creation row per active JEX course that has not closed before
/// `today`, sorted by start date.
///
/// Dates are written as JEX sent them. They are still parsed, so a bad
/// date fails the run, and the parsed form drives filtering and order.
pub async fn course_shells(
    jex: &dyn JexClient,
    output: &OutputSettings,
    today: NaiveDate,
) -> Result<Vec<CourseShell>, AppError> {
    let jex_courses = jex.get_active_courses().await?;
    let zone = output.time_zone;

    let mut rows = Vec::with_capacity(jex_courses.len());
    for raw in &jex_courses {
        let course = raw.as_ref().ok_or(AppError::MissingArgument("jex_course"))?;
        let sis = jex_course_to_sis(Some(course), zone)?;
        let closed_on = sis
            .end_date
            .as_deref()
            .and_then(|d| DateTime::parse_from_rfc3339(d).ok())
            .map(|d| d.with_timezone(&zone).date_naive());
        if closed_on.is_some_and(|closed| closed < today) {
            debug!("Skipping course {} (closed {:?})", sis.course_id, closed_on);
            continue;
        }

        let shell = CourseShell {
            term_id: term_id(course),
            course_id: sis.course_id,
            short_name: sis.short_name,
            long_name: sis.long_name,
            status: sis.status,
            start_date: raw_date(&course.open_date),
            end_date: raw_date(&course.close_date),
            blueprint_course_id: output.blueprint_course_id.clone(),
        };
        rows.push((sis.start_date, shell));
    }

    rows.sort_by(|(a_start, a), (b_start, b)| {
        by_start_date(a_start.as_deref(), b_start.as_deref())
            .then_with(|| a.course_id.cmp(&b.course_id))
    });
    let shells: Vec<CourseShell> = rows.into_iter().map(|(_, shell)| shell).collect();
    info!("{} of {} JEX courses emitted as shells", shells.len(), jex_courses.len());
    Ok(shells)
}

pub async fn generate_courses(
    jex: &dyn JexClient,
    output: &OutputSettings,
    today: NaiveDate,
) -> Result<String, AppError> {
    let shells = course_shells(jex, output, today).await?;
    to_sis_csv(&shells)
}
