use super::engine::{DEFAULT_LIMIT, search_recipes};
use super::types::{SearchParams, SearchResponse};
use crate::storage::RecipeStore;
use axum::extract::Query;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(store): Extension<Arc<RecipeStore>>,
) -> Json<SearchResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let offset = params.offset.unwrap_or(0);
    let page = search_recipes(&store, params.q.as_deref(), offset, limit);

    Json(SearchResponse {
        query: params.q,
        total_count: page.total_count,
        count: page.recipes.len(),
        results: page.recipes,
    })
}
