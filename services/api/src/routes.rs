use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use venture_ready::assessment::{
    assessment_router, AssessmentRepository, AssessmentService, ProfileRepository, ScoreNotifier,
};
use venture_ready::investor::{investor_router, ClassificationCache, InvestorClassifier};

use crate::infra::AppState;

/// Merge the assessment and investor routers with the operational endpoints.
pub(crate) fn with_platform_routes<R, P, N, C>(
    assessments: Arc<AssessmentService<R, P, N>>,
    classifier: Arc<InvestorClassifier<C>>,
) -> axum::Router
where
    R: AssessmentRepository + 'static,
    P: ProfileRepository + 'static,
    N: ScoreNotifier + 'static,
    C: ClassificationCache + 'static,
{
    assessment_router(assessments)
        .merge(investor_router(classifier))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
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
