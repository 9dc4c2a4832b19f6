mod cors;
mod server;

pub use cors::CorsSettings;
pub use server::ServerConfig;

use crate::error::{AppError, AppResult};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsSettings,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// `from_env` delegates here; tests pass a map instead of mutating the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid SERVER_PORT".to_string()))?;

        // CORS config, unset means empty and falls back to defaults on resolve
        let cors = CorsSettings::new(
            parse_list(lookup("CORS_ALLOWED_ORIGINS")),
            parse_list(lookup("CORS_ALLOWED_METHODS")),
            parse_list(lookup("CORS_ALLOWED_HEADERS")),
        );

        Ok(Config {
            server: ServerConfig { host, port },
            cors,
        })
    }
}

/// Split a comma-separated value into trimmed, non-blank entries.
fn parse_list(raw: Option<String>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
