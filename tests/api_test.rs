use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sis_sync::api::router;
use sis_sync::canvas::{CanvasCourse, StaticCanvasClient};
use sis_sync::config::OutputSettings;
use sis_sync::jex::{JexCourse, StaticJexClient};
use sis_sync::state::AppState;
use tower::ServiceExt; // oneshot

fn state(jex: Vec<Option<JexCourse>>, canvas: Vec<CanvasCourse>) -> AppState {
    AppState {
        jex: Arc::new(StaticJexClient::with_raw(jex)),
        canvas: Arc::new(StaticCanvasClient::new(canvas)),
        output: Arc::new(OutputSettings::default()),
    }
}

fn chemistry() -> JexCourse {
    JexCourse {
        id: Some("C1".to_string()),
        name: Some("Chemistry".to_string()),
        open_date: Some("2020-01-01".to_string()),
        ..Default::default()
    }
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.expect("oneshot failed");
    let status = resp.status();
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn health_is_ok() {
    let (status, _, _) = get(router(state(vec![], vec![])), "/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn lists_generator_names() {
    let (status, _, body) = get(router(state(vec![], vec![])), "/generators").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<String> = serde_json::from_str(&body).unwrap();
    assert_eq!(names, vec!["course-updates", "courses"]);
}

#[tokio::test]
async fn course_updates_returns_csv() {
    let canvas = CanvasCourse {
        sis_course_id: Some("C1".to_string()),
        course_code: Some("C1".to_string()),
        name: Some("Chem (old)".to_string()),
        start_date: Some("2020-01-01T00:00:00Z".to_string()),
        ..Default::default()
    };
    let app = router(state(vec![Some(chemistry())], vec![canvas]));
    let (status, content_type, body) = get(app, "/generators/course-updates").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/csv; charset=utf-8"));
    assert_eq!(
        body,
        "course_id,short_name,long_name,status,start_date,end_date\n\
         C1,C1,Chemistry,active,2020-01-01T00:00:00.000+00:00,"
    );
}

#[tokio::test]
async fn courses_accepts_today_query() {
    let (status, _, body) = get(
        router(state(vec![Some(chemistry())], vec![])),
        "/generators/courses?today=2020-01-01",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.lines().count(), 2);
}

#[tokio::test]
async fn unknown_generator_is_404() {
    let (status, _, body) = get(router(state(vec![], vec![])), "/generators/enroll-adds").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["message"], "unknown generator: enroll-adds");
}

#[tokio::test]
async fn bad_upstream_record_returns_error_not_csv() {
    let (status, _, body) =
        get(router(state(vec![None], vec![])), "/generators/course-updates").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(!body.contains("course_id,"));
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["message"], "missing required argument: jex_course");
}
