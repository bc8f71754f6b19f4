use crate::infra::AppState;
use axum::body::Bytes;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use bmed_eval::error::AppError;
use bmed_eval::evaluation::taxonomy::GroupCatalogEntry;
use bmed_eval::evaluation::{catalog, EvaluationRequest, EvaluationSummary};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

#[derive(Debug, Serialize)]
pub(crate) struct NichesResponse {
    pub(crate) groups: Vec<GroupCatalogEntry>,
    pub(crate) total_niches: usize,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/niches", get(niches_endpoint))
        .route("/api/v1/evaluations", post(evaluation_endpoint))
        .layer(Extension(state))
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

pub(crate) async fn niches_endpoint() -> Json<NichesResponse> {
    let groups = catalog();
    let total_niches = groups.iter().map(|entry| entry.niches.len()).sum();
    Json(NichesResponse {
        groups,
        total_niches,
    })
}

/// Body is decoded by hand so a missing jurisdiction picks up the configured default.
pub(crate) async fn evaluation_endpoint(
    Extension(state): Extension<AppState>,
    body: Bytes,
) -> Result<Json<EvaluationSummary>, AppError> {
    let request = EvaluationRequest::from_json(&body, &state.evaluation.default_jurisdiction)?;
    let summary = request.evaluate(Utc::now()).map_err(|err| {
        warn!(niche = %request.niche, error = %err, "evaluation rejected");
        err
    })?;

    info!(
        niche = %summary.niche_label,
        total = summary.total,
        blocked = summary.blocked,
        "evaluation scored"
    );
    Ok(Json(summary))
}
