//! Cross-origin resource sharing middleware.

use tower_http::cors::CorsLayer;

/// Creates a CORS layer allowing any origin, method and header.
///
/// Browser front-ends served from another origin call the API directly.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
