//! Integration tests for the CORS layer installed by `create_router`.
//!
//! Requests are driven through the router in-process; no listener is bound.

use axum::body::Body;
use hoc_cors::config::{Config, CorsSettings};
use hoc_cors::cors::{self, CorsPolicy};
use hoc_cors::routes::create_router;
use http::{header, Method, Request, Response, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn explicit_policy() -> CorsPolicy {
    cors::resolve(&CorsSettings::new(
        strings(&["https://app.example.com"]),
        strings(&["GET"]),
        strings(&["Content-Type"]),
    ))
}

fn preflight(path: &str, origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri(path)
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap()
}

async fn send(policy: &CorsPolicy, request: Request<Body>) -> Response<Body> {
    let app = create_router(policy).expect("router should build");
    app.oneshot(request).await.unwrap()
}

fn header_str<'a>(response: &'a Response<Body>, name: header::HeaderName) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}

mod preflight_tests {
    use super::*;

    #[tokio::test]
    async fn test_configured_origin_is_allowed() {
        let response = send(&explicit_policy(), preflight("/_health", "https://app.example.com")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            header_str(&response, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("https://app.example.com")
        );
        assert_eq!(
            header_str(&response, header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
            Some("true")
        );
        assert_eq!(
            header_str(&response, header::ACCESS_CONTROL_ALLOW_METHODS),
            Some("GET")
        );
    }

    #[tokio::test]
    async fn test_unlisted_origin_gets_no_allow_origin() {
        let response = send(&explicit_policy(), preflight("/_health", "https://evil.test")).await;

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_wildcard_default_mirrors_any_origin() {
        let policy = cors::resolve(&CorsSettings::default());
        let response = send(&policy, preflight("/_health", "https://anywhere.test")).await;

        assert_eq!(
            header_str(&response, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("https://anywhere.test")
        );
        assert_eq!(
            header_str(&response, header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
            Some("true")
        );
    }

    #[tokio::test]
    async fn test_default_methods_and_headers_advertised() {
        let policy = cors::resolve(&CorsSettings::default());
        let response = send(&policy, preflight("/_health", "https://anywhere.test")).await;

        let methods = header_str(&response, header::ACCESS_CONTROL_ALLOW_METHODS).unwrap();
        for method in cors::DEFAULT_METHODS {
            assert!(methods.contains(method), "missing {} in {}", method, methods);
        }

        let headers = header_str(&response, header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap();
        assert!(headers.contains("x-ijt"));
        assert!(headers.contains("authorization"));
    }

    #[tokio::test]
    async fn test_preflight_answered_on_unrouted_path() {
        let response = send(&explicit_policy(), preflight("/no/such/route", "https://app.example.com")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            header_str(&response, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("https://app.example.com")
        );
    }
}

mod simple_request_tests {
    use super::*;

    fn get(path: &str, origin: &str) -> Request<Body> {
        Request::builder()
            .uri(path)
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_carries_cors_headers() {
        let response = send(&explicit_policy(), get("/_health", "https://app.example.com")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            header_str(&response, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("https://app.example.com")
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_fallback_is_json_not_found_with_cors() {
        let response = send(&explicit_policy(), get("/missing", "https://app.example.com")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            header_str(&response, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("https://app.example.com")
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "NOT_FOUND");
        assert!(json["message"].as_str().unwrap().contains("/missing"));
    }
}

mod startup_tests {
    use super::*;

    #[test]
    fn test_invalid_method_fails_router_construction() {
        let policy = cors::resolve(&CorsSettings::new(vec![], strings(&["NOT A METHOD"]), vec![]));
        assert!(create_router(&policy).is_err());
    }

    #[test]
    fn test_env_config_to_policy() {
        let config = Config::from_lookup(|key| match key {
            "CORS_ALLOWED_ORIGINS" => Some("https://app.example.com".to_string()),
            "CORS_ALLOWED_METHODS" => Some("GET".to_string()),
            "CORS_ALLOWED_HEADERS" => Some("Content-Type".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(cors::resolve(&config.cors), explicit_policy());
    }

    #[test]
    fn test_unset_env_resolves_to_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        let policy = cors::resolve(&config.cors);

        assert_eq!(policy.allowed_origins, vec!["*"]);
        assert_eq!(policy.allowed_methods.len(), 7);
        assert_eq!(policy.allowed_headers.len(), 10);
        assert!(policy.allow_credentials);
    }
}
