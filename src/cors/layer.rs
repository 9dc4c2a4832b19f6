use super::policy::{CorsPolicy, WILDCARD};
use crate::error::{AppError, AppResult};
use axum::Router;
use http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build the `tower_http` CORS layer enforcing `policy`.
///
/// `CorsLayer` rejects a literal `*` alongside credentials, so wildcard
/// entries are installed as "mirror the request" instead. Any entry that is
/// not a valid origin, method or header name fails construction.
pub fn cors_layer(policy: &CorsPolicy) -> AppResult<CorsLayer> {
    let allow_origin = if policy.allows_any_origin() {
        tracing::warn!(
            "CORS allows any origin with credentials; request origins will be mirrored"
        );
        AllowOrigin::mirror_request()
    } else {
        let origins = policy
            .allowed_origins
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>().map_err(|_| AppError::InvalidCorsEntry {
                    field: "origin",
                    value: o.clone(),
                })
            })
            .collect::<AppResult<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    let allow_methods = if is_wildcard(&policy.allowed_methods) {
        AllowMethods::mirror_request()
    } else {
        let methods = policy
            .allowed_methods
            .iter()
            .map(|m| {
                Method::from_bytes(m.as_bytes()).map_err(|_| AppError::InvalidCorsEntry {
                    field: "method",
                    value: m.clone(),
                })
            })
            .collect::<AppResult<Vec<_>>>()?;
        AllowMethods::list(methods)
    };

    let allow_headers = if is_wildcard(&policy.allowed_headers) {
        AllowHeaders::mirror_request()
    } else {
        let headers = policy
            .allowed_headers
            .iter()
            .map(|h| {
                h.parse::<HeaderName>().map_err(|_| AppError::InvalidCorsEntry {
                    field: "header",
                    value: h.clone(),
                })
            })
            .collect::<AppResult<Vec<_>>>()?;
        AllowHeaders::list(headers)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(allow_methods)
        .allow_headers(allow_headers)
        .allow_credentials(policy.allow_credentials))
}

/// Install the CORS layer for `policy` around every route of `router`.
///
/// Must be the last layer added so it is outermost: preflight requests are
/// answered before any other middleware or routing runs.
pub fn apply_cors<S>(router: Router<S>, policy: &CorsPolicy) -> AppResult<Router<S>>
where
    S: Clone + Send + Sync + 'static,
{
    Ok(router.layer(cors_layer(policy)?))
}

fn is_wildcard(entries: &[String]) -> bool {
    entries.iter().any(|e| e == WILDCARD)
}
