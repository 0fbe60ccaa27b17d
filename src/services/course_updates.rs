use tracing::{debug, info};

use crate::canvas::CanvasClient;
use crate::config::OutputSettings;
use crate::error::AppError;
use crate::jex::JexClient;
use crate::models::SisCourse;
use crate::sis_csv::to_sis_csv;
use crate::sync::{
    canvas_course_to_sis, changed_fields, compute_updates, index_by_id, jex_course_to_sis,
};

use super::by_start_date;

/// Courses that exist in both JEX and Canvas but disagree, as the JEX side,
/// sorted by start date.
pub async fn course_updates(
    jex: &dyn JexClient,
    canvas: &dyn CanvasClient,
    output: &OutputSettings,
) -> Result<Vec<SisCourse>, AppError> {
    let (jex_courses, canvas_courses) =
        tokio::try_join!(jex.get_active_courses(), canvas.get_courses())?;
    info!(
        "Fetched {} JEX courses, {} Canvas courses",
        jex_courses.len(),
        canvas_courses.len()
    );

    let zone = output.time_zone;
    let from_jex = jex_courses
        .iter()
        .map(|c| jex_course_to_sis(c.as_ref(), zone))
        .collect::<Result<Vec<_>, _>>()?;
    let from_canvas = canvas_courses
        .iter()
        .map(|c| canvas_course_to_sis(c.as_ref(), zone))
        .collect::<Result<Vec<_>, _>>()?;

    let jex_by_id = index_by_id(from_jex);
    let canvas_by_id = index_by_id(from_canvas);

    let mut updates = compute_updates(&jex_by_id, &canvas_by_id);
    for course in &updates {
        if let Some(current) = canvas_by_id.get(&course.course_id) {
            debug!(
                "Course {} differs from Canvas in {:?}",
                course.course_id,
                changed_fields(course, current)
            );
        }
    }

    updates.sort_by(|a, b| {
        by_start_date(a.start_date.as_deref(), b.start_date.as_deref())
            .then_with(|| a.course_id.cmp(&b.course_id))
    });
    info!("{} courses need updating", updates.len());
    Ok(updates)
}

pub async fn generate_course_updates(
    jex: &dyn JexClient,
    canvas: &dyn CanvasClient,
    output: &OutputSettings,
) -> Result<String, AppError> {
    let updates = course_updates(jex, canvas, output).await?;
    to_sis_csv(&updates)
}
