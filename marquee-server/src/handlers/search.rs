use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use tracing::{debug, instrument};

use marquee_core::search::filter_items;
use marquee_model::SearchResponse;

use crate::infra::{app_state::AppState, errors::AppResult};

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Case-insensitive title search across every section.
///
/// Responses are held back by the configured search delay so clients can
/// exercise their loading states. A missing or empty `q` returns everything.
#[instrument(skip_all)]
pub async fn search_handler(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> AppResult<Json<SearchResponse>> {
    let Query(params) = params?;
    let query = params.q.unwrap_or_default();

    let delay = state.search_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let results = filter_items(state.catalog(), &query);
    debug!(query = %query, count = results.len(), "search served");
    Ok(Json(SearchResponse::ok(query, results)))
}
