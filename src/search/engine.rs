use super::filter::build_title_filter;
use crate::recipes::types::Recipe;
use crate::storage::RecipeStore;

pub const DEFAULT_LIMIT: usize = 20;
pub const MAX_LIMIT: usize = 100;

pub struct SearchPage {
    pub total_count: usize,
    pub recipes: Vec<Recipe>,
}

/// Lists recipes whose title contains `query`, oldest first, one page at a time.
pub fn search_recipes(
    store: &RecipeStore,
    query: Option<&str>,
    offset: usize,
    limit: usize,
) -> SearchPage {
    let filter = build_title_filter(query.unwrap_or_default());
    let limit = limit.clamp(1, MAX_LIMIT);

    let matching: Vec<Recipe> = store
        .list()
        .into_iter()
        .filter(|recipe| filter.matches(&recipe.title))
        .collect();

    tracing::debug!(
        "Search {:?} matched {} recipes (offset {}, limit {})",
        filter.pattern(),
        matching.len(),
        offset,
        limit
    );

    let total_count = matching.len();
    let recipes = matching.into_iter().skip(offset).take(limit).collect();

    SearchPage {
        total_count,
        recipes,
    }
}
