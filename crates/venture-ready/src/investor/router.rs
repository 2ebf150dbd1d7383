use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::cache::ClassificationCache;
use super::classifier::InvestorClassifier;
use super::domain::InvestorIntake;

/// Router builder exposing the investor classification endpoint.
pub fn investor_router<C>(classifier: Arc<InvestorClassifier<C>>) -> Router
where
    C: ClassificationCache + 'static,
{
    Router::new()
        .route("/api/v1/investors/classify", post(classify_handler::<C>))
        .with_state(classifier)
}

pub(crate) async fn classify_handler<C>(
    State(classifier): State<Arc<InvestorClassifier<C>>>,
    axum::Json(intake): axum::Json<InvestorIntake>,
) -> Response
where
    C: ClassificationCache + 'static,
{
    match classifier.classify(&intake).await {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(err) => {
            let payload = json!({
                "error": err.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
