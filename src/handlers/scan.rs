//! URL scan handler

use axum::{extract::State, Json};
use validator::Validate;

use crate::models::{ScanRequest, ScanResponse};
use crate::{AppState, AppResult};

/// Submit a URL to the reputation service and wait for a verdict
pub async fn scan(
    State(state): State<AppState>,
    Json(req): Json<ScanRequest>,
) -> AppResult<Json<ScanResponse>> {
    req.validate()?;

    let response = state.scanner.scan(&req.url).await?;
    Ok(Json(response))
}
