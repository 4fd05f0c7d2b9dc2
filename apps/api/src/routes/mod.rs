pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::documents::{handlers as documents, MAX_DOCUMENT_BYTES};
use crate::generation::handlers;
use crate::state::AppState;

/// Multipart framing and the other form fields ride on top of the file itself.
const UPLOAD_BODY_LIMIT: usize = MAX_DOCUMENT_BYTES + 1024 * 1024;

/// Any origin may call the API; pre-flight `OPTIONS` is answered here and
/// never reaches a handler.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Plan → Kit pipeline
        .route("/api/v1/plans", post(handlers::handle_generate_plan))
        .route("/api/v1/kits", post(handlers::handle_generate_kit))
        .route("/api/v1/generate", post(handlers::handle_generate))
        // Fallback content
        .route("/api/v1/plans/fallback", post(handlers::handle_fallback_plan))
        .route("/api/v1/kits/fallback", post(handlers::handle_fallback_kit))
        .route(
            "/api/v1/kits/fallback/catalog",
            get(handlers::handle_fallback_catalog),
        )
        // Documents
        .route(
            "/api/v1/documents/extract",
            post(documents::handle_extract_document).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .layer(cors_layer())
        .with_state(state)
}
