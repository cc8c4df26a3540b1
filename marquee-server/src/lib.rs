//! Marquee content server
//!
//! Serves the catalog that feeds the home page rows and a title search
//! endpoint. The binary in `main.rs` wires configuration, logging and the
//! listener; [`create_app`] builds the router so tests can drive it directly.

pub mod handlers;
pub mod infra;

use axum::{Router, http::HeaderValue, routing::get};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::infra::{app_state::AppState, config::CorsConfig};

/// Route paths served by [`create_app`].
pub mod routes {
    pub const ROOT: &str = "/";
    pub const CONTENT: &str = "/api/content";
    pub const SEARCH: &str = "/api/search";
}

pub fn create_app(state: AppState) -> Router {
    let cors_layer = build_cors_layer(&state.config().cors);

    Router::new()
        .route(routes::ROOT, get(handlers::root_handler))
        .route(routes::CONTENT, get(handlers::content_handler))
        .route(routes::SEARCH, get(handlers::search_handler))
        .fallback(handlers::not_found_handler)
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(cors: &CorsConfig) -> CorsLayer {
    if cors.is_permissive() {
        return CorsLayer::permissive();
    }
    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
