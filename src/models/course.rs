use serde::{Deserialize, Serialize};

/// Publication state written to the `status` column of the SIS import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    Active,
}

/// A course in the shape both systems are compared in.
///
/// Field order is the column order of the course-update CSV. Dates hold the
/// canonical ISO-8601 text produced by [`crate::sync::dates::canonical_date`],
/// so two records describing the same instant carry identical strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SisCourse {
    pub course_id: String,
    pub short_name: String,
    pub long_name: String,
    pub status: CourseStatus,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl PartialEq for SisCourse {
    fn eq(&self, other: &Self) -> bool {
        self.course_id == other.course_id
            && self.short_name == other.short_name
            && self.long_name == other.long_name
            && self.status == other.status
            && self.start_date == other.start_date
            && self.end_date == other.end_date
    }
}

impl Eq for SisCourse {}

/// A row of the course-creation CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseShell {
    pub course_id: String,
    pub short_name: String,
    pub long_name: String,
    pub term_id: String,
    pub status: CourseStatus,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub blueprint_course_id: String,
}
