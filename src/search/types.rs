use crate::recipes::types::Recipe;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: Option<String>,
    pub total_count: usize,
    pub count: usize,
    pub results: Vec<Recipe>,
}
