pub mod dto;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::AppError;

pub use dto::JexCourse;

#[derive(Clone, Debug)]
pub struct JexConfig {
    pub base_url: String,
    pub api_token: String,
}

/// Read access to the scheduling system, the source of truth for courses.
///
/// Entries are `Option` because the endpoint may emit `null` array elements;
/// normalization rejects those rather than the fetch.
#[async_trait]
pub trait JexClient: Send + Sync {
    async fn get_active_courses(&self) -> Result<Vec<Option<JexCourse>>, AppError>;
}

pub struct JexHttpClient {
    client: Client,
    config: JexConfig,
}

impl JexHttpClient {
    pub fn new(config: JexConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl JexClient for JexHttpClient {
    async fn get_active_courses(&self) -> Result<Vec<Option<JexCourse>>, AppError> {
        let url = format!("{}/courses/active", self.config.base_url);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.config.api_token)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::FetchFailure(format!("JEX API error {}: {}", status, body)));
        }

        let courses: Vec<Option<JexCourse>> = response.json().await?;
        debug!("JEX returned {} active courses", courses.len());
        Ok(courses)
    }
}

/// Serves a fixed list of courses.
#[derive(Debug, Clone, Default)]
pub struct StaticJexClient {
    courses: Vec<Option<JexCourse>>,
}

impl StaticJexClient {
    pub fn new(courses: Vec<JexCourse>) -> Self {
        Self {
            courses: courses.into_iter().map(Some).collect(),
        }
    }

    pub fn with_raw(courses: Vec<Option<JexCourse>>) -> Self {
        Self { courses }
    }
}

#[async_trait]
impl JexClient for StaticJexClient {
    async fn get_active_courses(&self) -> Result<Vec<Option<JexCourse>>, AppError> {
        Ok(self.courses.clone())
    }
}
