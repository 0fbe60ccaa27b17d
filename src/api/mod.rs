use axum::extract::{Path, Query};
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::{Json, Router, extract::State, http::StatusCode, routing::get};

use crate::error::AppError;
use crate::services::{GenerateOptions, Generator, GeneratorService};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/generators", get(list_generators))
        .route("/generators/{name}", get(run_generator))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn list_generators() -> Json<Vec<&'static str>> {
    Json(Generator::ALL.iter().map(Generator::name).collect())
}

async fn run_generator(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(options): Query<GenerateOptions>,
) -> Result<impl IntoResponse, AppError> {
    let generator: Generator = name.parse()?;
    let service = GeneratorService::new(
        state.jex.clone(),
        state.canvas.clone(),
        state.output.clone(),
    );
    let csv = service.run(generator, &options).await?;
    Ok(([(CONTENT_TYPE, "text/csv; charset=utf-8")], csv))
}
