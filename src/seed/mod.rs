//! Sample data seeding.
//!
//! Inserts a fixed set of sample recipes. Re-running is safe: recipes carrying a
//! sample title are removed before the fresh copies go in.

pub mod samples;

use crate::storage::RecipeStore;
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SeedReport {
    pub removed: usize,
    pub inserted: usize,
}

pub fn seed(store: &RecipeStore) -> Result<SeedReport> {
    let titles = samples::sample_titles();
    let removed = store.remove_by_titles(&titles)?;
    if removed > 0 {
        tracing::info!("Removed {} existing sample recipes (by title match)", removed);
    }

    let mut inserted = 0;
    for recipe in samples::sample_recipes() {
        store.insert(recipe)?;
        inserted += 1;
    }

    tracing::info!("Inserted {} sample recipes", inserted);
    Ok(SeedReport { removed, inserted })
}
