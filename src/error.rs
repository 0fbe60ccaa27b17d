use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("invalid date in {field}: {value:?}")]
    InvalidDate { field: &'static str, value: String },

    #[error("fetch failed: {0}")]
    FetchFailure(String),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown generator: {0}")]
    UnknownGenerator(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::FetchFailure(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::UnknownGenerator(_) => StatusCode::NOT_FOUND,
            AppError::FetchFailure(_)
            | AppError::MissingArgument(_)
            | AppError::InvalidDate { .. } => StatusCode::BAD_GATEWAY,
            AppError::Csv(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!("request failed: {}", self);
        }

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}
