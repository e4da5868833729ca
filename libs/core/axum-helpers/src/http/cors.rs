use axum::http::{HeaderValue, Method, header};
use std::time::Duration;
use tower_http::cors::CorsLayer;

/// Creates a CORS layer restricted to the given origins.
///
/// Allows the methods and headers a storefront client sends:
/// - GET, POST, OPTIONS
/// - Content-Type, Accept
/// - 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Creates a permissive CORS layer.
///
/// Any origin, method and header is accepted, and preflight requests are
/// answered without reaching the handlers.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
