use crate::infra::{AppState, Services};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use campus_placement::error::AppError;
use campus_placement::workflows::placement::{placement_router, Job};
use serde::Deserialize;
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct JobImportRequest {
    /// CSV text with `title,company,description,skills` headers.
    pub(crate) csv: String,
}

pub(crate) fn with_placement_routes(services: Arc<Services>) -> Router {
    let import = Router::new()
        .route("/api/v1/jobs/import", post(import_jobs_endpoint))
        .with_state(services.clone());

    placement_router(services)
        .merge(import)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn import_jobs_endpoint(
    State(services): State<Arc<Services>>,
    Json(payload): Json<JobImportRequest>,
) -> Result<(StatusCode, Json<Vec<Job>>), AppError> {
    let reader = Cursor::new(payload.csv.into_bytes());
    let jobs = services.jobs.import_csv(reader)?;
    Ok((StatusCode::CREATED, Json(jobs)))
}
