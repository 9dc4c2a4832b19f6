use crate::cors::{apply_cors, CorsPolicy};
use crate::error::AppResult;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use super::health;

/// Create application router
///
/// The CORS layer for `policy` is installed last, making it the outermost
/// layer over every route and the fallback.
pub fn create_router(policy: &CorsPolicy) -> AppResult<axum::Router> {
    let router = axum::Router::new()
        .route("/_health", get(health::health_check))
        .fallback(health::not_found)
        .layer(TraceLayer::new_for_http());

    apply_cors(router, policy)
}
