//! Cross-origin resource sharing.
//!
//! [`resolve`] turns raw [`CorsSettings`] into the effective [`CorsPolicy`],
//! and [`cors_layer`] hands that policy to `tower_http`'s `CorsLayer`, which
//! does the per-request matching.

mod layer;
mod policy;

pub use crate::config::CorsSettings;
pub use layer::{apply_cors, cors_layer};
pub use policy::{resolve, CorsPolicy, DEFAULT_HEADERS, DEFAULT_METHODS, WILDCARD};
