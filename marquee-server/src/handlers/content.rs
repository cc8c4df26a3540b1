use axum::{Json, extract::State, http::Uri};

use marquee_model::ContentResponse;

use crate::infra::{app_state::AppState, errors::AppError};

pub const ROOT_BANNER: &str = "Marquee content server is running";

/// Plain-text liveness banner.
pub async fn root_handler() -> &'static str {
    ROOT_BANNER
}

/// Every catalog section, wrapped in the success envelope.
pub async fn content_handler(
    State(state): State<AppState>,
) -> Json<ContentResponse> {
    Json(ContentResponse::ok(state.catalog().clone()))
}

pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found(format!("No route for {}", uri.path()))
}
