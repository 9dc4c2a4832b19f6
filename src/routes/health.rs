use crate::error::{AppError, AppResult};
use crate::routes::types::HealthCheckResponse;
use axum::http::Uri;
use axum::response::IntoResponse;
use axum::Json;

/// Health check endpoint
pub async fn health_check() -> AppResult<impl IntoResponse> {
    let response = HealthCheckResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    };

    Ok(Json(response))
}

/// Fallback for every path without a route
pub async fn not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}
