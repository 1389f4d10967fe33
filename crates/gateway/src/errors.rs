use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors raised on the dispatch path. The gateway is a thin relay:
/// backend responses pass through untouched, so these cover only the
/// cases where no backend response exists to relay.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("unknown service: {0}")]
    UnknownService(String),
    #[error("upstream request failed: {0}")]
    Upstream(String),
    #[error("invalid request: {0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::UnknownService(_) => StatusCode::NOT_FOUND,
            GatewayError::Upstream(_) => StatusCode::BAD_GATEWAY,
            GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({"error": self.to_string()}))).into_response()
    }
}
