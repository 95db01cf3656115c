//! HTTP gateway (Axum) for similarity scoring.
//!
//! This module is primarily used by the `wordhint` server binary.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::calculate_handler;
pub use state::{HandlerState, ModelInfo};

use payload::{ConfigResponse, HealthResponse, ServiceResponse};
use wordhint::embedding::{EntailmentClassifier, TextEmbedder};

pub const WORDHINT_STATUS_HEADER: &str = "X-Wordhint-Status";
pub const WORDHINT_STATUS_HEALTHY: &str = "healthy";
pub const WORDHINT_STATUS_SCORED: &str = "scored";
pub const WORDHINT_STATUS_EXACT: &str = "exact_match";

const SERVICE_NAME: &str = "Wordhint Similarity Service";

const FEATURES: [&str; 5] = [
    "semantic_similarity",
    "relational_similarity",
    "formative_similarity",
    "contextual_hints",
    "relationship_analysis",
];

pub fn create_router_with_state<E, C>(state: HandlerState<E, C>) -> Router
where
    E: TextEmbedder + 'static,
    C: EntailmentClassifier + 'static,
{
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler::<E, C>))
        .route("/api/similarity/calculate", post(calculate_handler::<E, C>))
        .route("/api/config", get(config_handler::<E, C>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tracing::instrument]
pub async fn root_handler() -> Json<ServiceResponse> {
    Json(ServiceResponse {
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
        features: FEATURES,
    })
}

#[tracing::instrument(skip(state))]
pub async fn health_handler<E, C>(State(state): State<HandlerState<E, C>>) -> Response
where
    E: TextEmbedder + 'static,
    C: EntailmentClassifier + 'static,
{
    let mut headers = HeaderMap::new();
    headers.insert(
        WORDHINT_STATUS_HEADER,
        HeaderValue::from_static(WORDHINT_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse {
            status: WORDHINT_STATUS_HEALTHY,
            models_loaded: state.engine.models_loaded(),
        }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn config_handler<E, C>(State(state): State<HandlerState<E, C>>) -> Response
where
    E: TextEmbedder + 'static,
    C: EntailmentClassifier + 'static,
{
    Json(ConfigResponse {
        weights: state.engine.config().weights,
        models: &state.models,
        target_latency_ms: state.target_latency_ms,
    })
    .into_response()
}
