//! Recipe Sharing Backend Library
//!
//! This library crate holds the recipe backend used by the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`normalize`**: Ingredient-name normalization. Strips units and quantities, folds
//!   synonyms, singularizes and collapses multi-word terms into canonical tokens.
//! - **`inference`**: Best-effort category and tag heuristics from titles and ingredients.
//! - **`search`**: Escaped, case-insensitive title filtering and paged listing.
//! - **`recipes`**: The recipe document model and its create/update/get/delete handlers.
//! - **`storage`**: Concurrent in-memory document store persisted to a JSON snapshot.
//! - **`backfill`**: Idempotent maintenance pass recomputing derived fields for stored recipes.
//! - **`jobs`**: Single-worker queue for running maintenance passes out-of-band.
//! - **`seed`**: Sample recipes for local development.

pub mod backfill;
pub mod config;
pub mod error;
pub mod inference;
pub mod jobs;
pub mod normalize;
pub mod recipes;
pub mod search;
pub mod seed;
pub mod server;
pub mod storage;

/// Current system time in milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
