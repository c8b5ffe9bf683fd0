use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

/// Falls back to the local frontend dev origins when `allowed` yields no valid header value.
pub fn cors_layer(allowed: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();

    let layer = if !origins.is_empty() {
        CorsLayer::new().allow_origin(origins)
    } else {
        CorsLayer::new().allow_origin([
            HeaderValue::from_static("http://localhost:5173"),
            HeaderValue::from_static("http://127.0.0.1:5173"),
        ])
    };
    layer.allow_methods(Any).allow_headers(Any)
}
