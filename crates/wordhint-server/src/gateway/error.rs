use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use wordhint::scoring::ScoringError;

use super::WORDHINT_STATUS_HEADER;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("scoring failed: {0}")]
    ScoringFailed(#[from] ScoringError),

    #[error("internal error: {0}")]
    InternalError(String),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl GatewayError {
    /// HTTP status and `X-Wordhint-Status` value for this error.
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            GatewayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            GatewayError::ScoringFailed(ScoringError::InvalidInput { .. }) => {
                (StatusCode::BAD_REQUEST, "invalid_request")
            }
            GatewayError::ScoringFailed(e) if e.is_capability_failure() => {
                (StatusCode::SERVICE_UNAVAILABLE, "model_unavailable")
            }
            GatewayError::ScoringFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "scoring_error")
            }
            GatewayError::InternalError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, wordhint_status) = self.status();

        let mut headers = HeaderMap::new();
        headers.insert(
            WORDHINT_STATUS_HEADER,
            HeaderValue::from_static(wordhint_status),
        );

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
