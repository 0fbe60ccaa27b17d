use serde::{Deserialize, Serialize};

/// A course as returned by the Canvas courses API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasCourse {
    #[serde(default)]
    pub sis_course_id: Option<String>,
    #[serde(default)]
    pub course_code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "start_at")]
    pub start_date: Option<String>,
    #[serde(default, alias = "end_at")]
    pub end_date: Option<String>,
}
