//! Health check handler

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    urlvalidator: bool,
}

pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse { urlvalidator: true })
}
