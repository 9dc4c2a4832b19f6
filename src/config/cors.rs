use serde::{Deserialize, Serialize};

/// Raw CORS configuration as supplied by the environment.
///
/// Every list may be empty; empty means "use the default" when the
/// settings are resolved into a [`CorsPolicy`](crate::cors::CorsPolicy).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CorsSettings {
    /// Origins allowed to make cross-origin requests (`*` for any)
    pub allowed_origins: Vec<String>,

    /// HTTP methods allowed in cross-origin requests
    pub allowed_methods: Vec<String>,

    /// Request headers allowed in cross-origin requests
    pub allowed_headers: Vec<String>,
}

impl CorsSettings {
    pub fn new(
        allowed_origins: Vec<String>,
        allowed_methods: Vec<String>,
        allowed_headers: Vec<String>,
    ) -> Self {
        Self {
            allowed_origins,
            allowed_methods,
            allowed_headers,
        }
    }
}
