use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::canvas::CanvasClient;
use crate::config::OutputSettings;
use crate::error::AppError;
use crate::jex::JexClient;
use crate::services::{course_updates, courses};

/// The CSV generators this tool can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Generator {
    /// Courses present in both systems whose Canvas copy is out of date
    CourseUpdates,
    /// Course shells for every active JEX course
    Courses,
}

impl Generator {
    pub const ALL: [Generator; 2] = [Generator::CourseUpdates, Generator::Courses];

    pub fn name(&self) -> &'static str {
        match self {
            Generator::CourseUpdates => "course-updates",
            Generator::Courses => "courses",
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Generator {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Generator::ALL
            .into_iter()
            .find(|g| g.name() == s)
            .ok_or_else(|| AppError::UnknownGenerator(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateOptions {
    /// Reference date for generators that filter by date. Defaults to the
    /// current date in the output time zone.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

pub struct GeneratorService {
    jex: Arc<dyn JexClient>,
    canvas: Arc<dyn CanvasClient>,
    output: Arc<OutputSettings>,
}

impl GeneratorService {
    pub fn new(
        jex: Arc<dyn JexClient>,
        canvas: Arc<dyn CanvasClient>,
        output: Arc<OutputSettings>,
    ) -> Self {
        Self { jex, canvas, output }
    }

    pub async fn run(
        &self,
        generator: Generator,
        options: &GenerateOptions,
    ) -> Result<String, AppError> {
        info!("Running generator {}", generator);
        match generator {
            Generator::CourseUpdates => {
                course_updates::generate_course_updates(
                    self.jex.as_ref(),
                    self.canvas.as_ref(),
                    &self.output,
                )
                .await
            }
            Generator::Courses => {
                let today = options.today.unwrap_or_else(|| {
                    Utc::now().with_timezone(&self.output.time_zone).date_naive()
                });
                courses::generate_courses(self.jex.as_ref(), &self.output, today).await
            }
        }
    }
}
