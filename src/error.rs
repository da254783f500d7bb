//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Request errors
    #[error("validation failed: {0}")]
    ValidationError(String),

    // Upstream answered with >= 400; status and body are passed through
    #[error("upstream rejected request with status {status}")]
    UpstreamRejected { status: u16, body: String },

    // Upstream answered but the payload lacked an expected field
    #[error("malformed upstream response: {0}")]
    MalformedUpstream(String),

    // Connect errors, per-call timeouts, undecodable bodies
    #[error("upstream transport error: {0}")]
    Transport(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, detail) = match &self {
            AppError::ValidationError(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg.as_str(), None)
            }
            AppError::UpstreamRejected { status, body } => {
                tracing::warn!("Upstream rejected request ({}): {}", status, body);
                let status = StatusCode::from_u16(*status)
                    .unwrap_or(StatusCode::BAD_GATEWAY);
                (status, "Upstream scan service rejected the request", Some(body.as_str()))
            }
            AppError::MalformedUpstream(msg) => {
                tracing::error!("Malformed upstream response: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error", None)
            }
            AppError::Transport(msg) => {
                tracing::error!("Upstream transport error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error", None)
            }
        };

        let mut body = json!({
            "error": error_message,
            "status": status.as_u16()
        });
        if let Some(detail) = detail {
            body["detail"] = json!(detail);
        }

        (status, Json(body)).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
