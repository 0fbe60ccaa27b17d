pub mod dto;

use async_trait::async_trait;
use reqwest::{Client, header::LINK};
use tracing::debug;

use crate::error::AppError;

pub use dto::CanvasCourse;

const PAGE_SIZE: u32 = 100;

#[derive(Clone, Debug)]
pub struct CanvasConfig {
    pub base_url: String,
    pub api_token: String,
    pub account_id: String,
}

/// Read access to the LMS whose courses are reconciled toward JEX.
#[async_trait]
pub trait CanvasClient: Send + Sync {
    async fn get_courses(&self) -> Result<Vec<Option<CanvasCourse>>, AppError>;
}

pub struct CanvasHttpClient {
    client: Client,
    config: CanvasConfig,
}

impl CanvasHttpClient {
    pub fn new(config: CanvasConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }

    async fn fetch_page(
        &self,
        url: &str,
    ) -> Result<(Vec<Option<CanvasCourse>>, Option<String>), AppError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.config.api_token)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::FetchFailure(format!("Canvas API error {}: {}", status, body)));
        }

        let next = response
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .and_then(next_page_url);

        let courses: Vec<Option<CanvasCourse>> = response.json().await?;
        Ok((courses, next))
    }
}

#[async_trait]
impl CanvasClient for CanvasHttpClient {
    async fn get_courses(&self) -> Result<Vec<Option<CanvasCourse>>, AppError> {
        let mut url = Some(format!(
            "{}/api/v1/accounts/{}/courses?per_page={}",
            self.config.base_url, self.config.account_id, PAGE_SIZE
        ));
        let mut courses = Vec::new();
        let mut pages = 0;

        while let Some(current) = url {
            let (page, next) = self.fetch_page(&current).await?;
            courses.extend(page);
            pages += 1;
            url = next;
        }

        // Courses created by hand in Canvas have no SIS id and are never
        // touched by SIS imports.
        let total = courses.len();
        courses.retain(|c| match c {
            Some(course) => has_sis_id(course),
            None => true,
        });
        debug!(
            "Canvas returned {} courses over {} pages, {} without sis_course_id dropped",
            total,
            pages,
            total - courses.len()
        );

        Ok(courses)
    }
}

fn has_sis_id(course: &CanvasCourse) -> bool {
    course
        .sis_course_id
        .as_deref()
        .is_some_and(|id| !id.trim().is_empty())
}

/// Extracts the `rel="next"` target from an RFC 8288 `Link` header.
pub fn next_page_url(header: &str) -> Option<String> {
    header.split(',').find_map(|link| {
        let mut parts = link.split(';');
        let target = parts.next()?.trim();
        let is_next = parts.any(|param| {
            let param = param.trim();
            param == "rel=\"next\"" || param == "rel=next"
        });
        if !is_next {
            return None;
        }
        target
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .map(str::to_string)
    })
}

/// Serves a fixed list of courses.
#[derive(Debug, Clone, Default)]
pub struct StaticCanvasClient {
    courses: Vec<Option<CanvasCourse>>,
}

impl StaticCanvasClient {
    pub fn new(courses: Vec<CanvasCourse>) -> Self {
        Self {
            courses: courses.into_iter().map(Some).collect(),
        }
    }

    pub fn with_raw(courses: Vec<Option<CanvasCourse>>) -> Self {
        Self { courses }
    }
}

#[async_trait]
impl CanvasClient for StaticCanvasClient {
    async fn get_courses(&self) -> Result<Vec<Option<CanvasCourse>>, AppError> {
        Ok(self.courses.clone())
    }
}
