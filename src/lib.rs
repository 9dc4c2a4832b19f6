//! hoc-cors: resolve a CORS policy from configuration and install it on an
//! axum router ahead of every other layer.

pub mod config;
pub mod cors;
pub mod error;
pub mod routes;
pub mod server;
