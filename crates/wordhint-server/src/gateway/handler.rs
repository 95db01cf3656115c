use std::time::Instant;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use wordhint::constants::round_to;
use wordhint::embedding::{EntailmentClassifier, TextEmbedder};

use crate::gateway::error::GatewayError;
use crate::gateway::payload::{SimilarityRequest, SimilarityResponse};
use crate::gateway::state::HandlerState;
use crate::gateway::{WORDHINT_STATUS_EXACT, WORDHINT_STATUS_HEADER, WORDHINT_STATUS_SCORED};

#[instrument(skip(state, payload), fields(request_id = tracing::field::Empty))]
pub async fn calculate_handler<E, C>(
    State(state): State<HandlerState<E, C>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, GatewayError>
where
    E: TextEmbedder + 'static,
    C: EntailmentClassifier + 'static,
{
    let request_id = Uuid::new_v4();
    tracing::Span::current().record("request_id", tracing::field::display(&request_id));

    let Json(request) = payload.map_err(|e| {
        GatewayError::InvalidRequest(format!("Malformed JSON body: {}", e.body_text()))
    })?;
    let request: SimilarityRequest = serde_json::from_value(request)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {}", e)))?;
    request.validate()?;

    debug!(
        user_input = %request.user_input,
        answer_len = request.answer.chars().count(),
        "Processing similarity request"
    );

    let started = Instant::now();
    let engine = state.engine.clone();
    let SimilarityRequest { user_input, answer } = request;

    let report = tokio::task::spawn_blocking(move || engine.evaluate(&user_input, &answer))
        .await
        .map_err(|e| GatewayError::InternalError(format!("scoring task failed: {}", e)))??;

    let processing_time_ms = round_to(started.elapsed().as_secs_f64() * 1000.0, 2);
    info!(
        score = report.score,
        exact_match = report.exact_match,
        processing_time_ms,
        "Similarity calculated"
    );

    let status = if report.exact_match {
        WORDHINT_STATUS_EXACT
    } else {
        WORDHINT_STATUS_SCORED
    };
    let mut headers = HeaderMap::new();
    headers.insert(WORDHINT_STATUS_HEADER, HeaderValue::from_static(status));

    let body = SimilarityResponse::from_report(report, processing_time_ms);
    Ok((StatusCode::OK, headers, Json(body)).into_response())
}
