use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tracing::info;

use super::{InvestorProfile, RecommendationEngine};

/// Router exposing the engine to the presentation layer. The engine is shared
/// read-only state; every handler call is a pure transformation.
pub fn recommendation_router(engine: Arc<RecommendationEngine>) -> Router {
    Router::new()
        .route("/api/v1/recommendations", post(recommend_handler))
        .route("/api/v1/brokerages", get(catalog_handler))
        .with_state(engine)
}

pub(crate) async fn recommend_handler(
    State(engine): State<Arc<RecommendationEngine>>,
    axum::Json(profile): axum::Json<InvestorProfile>,
) -> Response {
    let outcome = engine.recommend(&profile);
    info!(
        account_category = outcome.account_type.category.label(),
        matches = outcome.matches.len(),
        "recommendation served"
    );
    (StatusCode::OK, axum::Json(outcome)).into_response()
}

pub(crate) async fn catalog_handler(
    State(engine): State<Arc<RecommendationEngine>>,
) -> Response {
    (StatusCode::OK, axum::Json(engine.catalog().entries().to_vec())).into_response()
}
