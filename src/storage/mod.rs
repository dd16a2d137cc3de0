//! Recipe Storage Module
//!
//! The document store collaborator behind the write path, search and the backfill job.
//!
//! ## Core Concepts
//! - **Documents**: Recipes are kept whole in a concurrent `DashMap` keyed by id.
//! - **Persistence**: Creates, updates and deletes rewrite a JSON snapshot file so the store
//!   survives restarts. View counts and backfill repairs are deferred and flushed in batches.
//! - **Repository seam**: `RecipeRepository` exposes the scan/repair/commit calls that maintenance
//!   jobs need, letting them run against any backing store.

pub mod memory;

pub use memory::{RecipeRepository, RecipeStore};

#[cfg(test)]
mod tests;
