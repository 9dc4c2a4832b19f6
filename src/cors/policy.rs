use crate::config::CorsSettings;
use serde::{Deserialize, Serialize};

/// Matches any origin, method or header.
pub const WILDCARD: &str = "*";

/// Methods allowed when none are configured
pub const DEFAULT_METHODS: [&str; 7] = ["GET", "HEAD", "POST", "PATCH", "PUT", "OPTIONS", "DELETE"];

/// Request headers allowed when none are configured
pub const DEFAULT_HEADERS: [&str; 10] = [
    "Origin",
    "Referer",
    "User-Agent",
    "Cache-Control",
    "Content-Type",
    "Accept",
    "Authorization",
    "X-Requested-With",
    "X-Forwarded-For",
    "x-ijt",
];

/// The effective CORS policy installed on every route.
///
/// All three lists are non-empty once produced by [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CorsPolicy {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub allow_credentials: bool,
}

impl CorsPolicy {
    /// Whether the policy admits any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == WILDCARD)
    }
}

/// Resolve raw settings into the effective policy.
///
/// Empty lists fall back to their defaults, non-empty lists pass through
/// verbatim. Credentials are always allowed.
pub fn resolve(settings: &CorsSettings) -> CorsPolicy {
    CorsPolicy {
        allowed_origins: or_default(&settings.allowed_origins, &[WILDCARD]),
        allowed_methods: or_default(&settings.allowed_methods, &DEFAULT_METHODS),
        allowed_headers: or_default(&settings.allowed_headers, &DEFAULT_HEADERS),
        allow_credentials: true,
    }
}

fn or_default(configured: &[String], default: &[&str]) -> Vec<String> {
    if configured.is_empty() {
        default.iter().map(|s| s.to_string()).collect()
    } else {
        configured.to_vec()
    }
}
