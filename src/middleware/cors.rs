use tower_http::cors::{Any, CorsLayer};

/// Wildcard CORS: the API is unauthenticated and carries no cookies, so
/// any browser origin may call it.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
