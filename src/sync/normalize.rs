use chrono_tz::Tz;

use crate::canvas::CanvasCourse;
use crate::error::AppError;
use crate::jex::JexCourse;
use crate::models::{CourseStatus, SisCourse};
use crate::sync::dates::canonical_date;

fn required_id(id: Option<&str>, name: &'static str) -> Result<String, AppError> {
    id.filter(|id| !id.trim().is_empty())
        .map(str::to_string)
        .ok_or(AppError::MissingArgument(name))
}

/// Maps a JEX course to the canonical record.
///
/// JEX has no separate short code, so the id doubles as `short_name`.
/// Status is always `active`: this path only ever sees JEX's active-course
/// listing.
pub fn jex_course_to_sis(course: Option<&JexCourse>, zone: Tz) -> Result<SisCourse, AppError> {
    let course = course.ok_or(AppError::MissingArgument("jex_course"))?;
    let course_id = required_id(course.id.as_deref(), "jex_course.id")?;

    Ok(SisCourse {
        short_name: course_id.clone(),
        course_id,
        long_name: course.name.clone().unwrap_or_default(),
        status: CourseStatus::Active,
        start_date: canonical_date("openDate", course.open_date.as_deref(), zone)?,
        end_date: canonical_date("closeDate", course.close_date.as_deref(), zone)?,
    })
}

/// Maps a Canvas course to the canonical record.
pub fn canvas_course_to_sis(
    course: Option<&CanvasCourse>,
    zone: Tz,
) -> Result<SisCourse, AppError> {
    let course = course.ok_or(AppError::MissingArgument("canvas_course"))?;
    let course_id = required_id(course.sis_course_id.as_deref(), "canvas_course.sis_course_id")?;

    Ok(SisCourse {
        course_id,
        short_name: course.course_code.clone().unwrap_or_default(),
        long_name: course.name.clone().unwrap_or_default(),
        status: CourseStatus::Active,
        start_date: canonical_date("start_date", course.start_date.as_deref(), zone)?,
        end_date: canonical_date("end_date", course.end_date.as_deref(), zone)?,
    })
}
