use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde_json::json;

use super::clusters::CLUSTER_BANDS;
use super::domain::{AssessmentId, AssessmentSubmission, FounderId};
use super::repository::{AssessmentRepository, ProfileRepository, RepositoryError, ScoreNotifier};
use super::scoring::ScoringProfile;
use super::service::{AssessmentService, AssessmentServiceError};

/// Router builder exposing the assessment intake, score lookup, profile,
/// and cluster endpoints.
pub fn assessment_router<R, P, N>(service: Arc<AssessmentService<R, P, N>>) -> Router
where
    R: AssessmentRepository + 'static,
    P: ProfileRepository + 'static,
    N: ScoreNotifier + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(submit_handler::<R, P, N>))
        .route(
            "/api/v1/assessments/:assessment_id",
            get(score_handler::<R, P, N>),
        )
        .route(
            "/api/v1/assessments/:assessment_id/recommendations",
            get(recommendations_handler::<R, P, N>),
        )
        .route(
            "/api/v1/profiles/:founder_id/weights",
            put(save_profile_handler::<R, P, N>).get(profile_handler::<R, P, N>),
        )
        .route("/api/v1/clusters", get(clusters_handler))
        .with_state(service)
}

pub(crate) async fn submit_handler<R, P, N>(
    State(service): State<Arc<AssessmentService<R, P, N>>>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response
where
    R: AssessmentRepository + 'static,
    P: ProfileRepository + 'static,
    N: ScoreNotifier + 'static,
{
    match service.submit(submission) {
        Ok(record) => (StatusCode::ACCEPTED, axum::Json(record.score_view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn score_handler<R, P, N>(
    State(service): State<Arc<AssessmentService<R, P, N>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    P: ProfileRepository + 'static,
    N: ScoreNotifier + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.score_view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn recommendations_handler<R, P, N>(
    State(service): State<Arc<AssessmentService<R, P, N>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    P: ProfileRepository + 'static,
    N: ScoreNotifier + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.recommendations(&id).await {
        Ok(set) => (StatusCode::OK, axum::Json(set)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn save_profile_handler<R, P, N>(
    State(service): State<Arc<AssessmentService<R, P, N>>>,
    Path(founder_id): Path<String>,
    axum::Json(profile): axum::Json<ScoringProfile>,
) -> Response
where
    R: AssessmentRepository + 'static,
    P: ProfileRepository + 'static,
    N: ScoreNotifier + 'static,
{
    let founder = FounderId(founder_id);
    match service.save_profile(&founder, profile) {
        Ok(stored) => (StatusCode::OK, axum::Json(stored)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn profile_handler<R, P, N>(
    State(service): State<Arc<AssessmentService<R, P, N>>>,
    Path(founder_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    P: ProfileRepository + 'static,
    N: ScoreNotifier + 'static,
{
    let founder = FounderId(founder_id);
    match service.active_profile(&founder) {
        Ok(profile) => (StatusCode::OK, axum::Json(profile)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn clusters_handler() -> Response {
    (StatusCode::OK, axum::Json(CLUSTER_BANDS)).into_response()
}

fn error_response(err: AssessmentServiceError) -> Response {
    let status = match &err {
        AssessmentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_))
        | AssessmentServiceError::PersistFailed { .. } => StatusCode::SERVICE_UNAVAILABLE,
    };

    let payload = json!({
        "error": err.to_string(),
        "retryable": err.retryable(),
    });
    (status, axum::Json(payload)).into_response()
}
