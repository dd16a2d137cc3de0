//! Normalization Backfill
//!
//! Maintenance pass that repairs recipes written before normalization existed.
//!
//! For every stored recipe it recomputes the normalized ingredient tokens, the inferred
//! categories and tags, and initializes a missing or malformed view counter. Only
//! recipes whose values actually differ are written back, so a second run over an
//! unchanged collection updates nothing.
//!
//! The pass is meant to run alone: offline through the `backfill` subcommand, or
//! through the single-worker job queue via `POST /admin/jobs`.

pub mod job;

pub use job::{BackfillReport, backfill_recipe, run_backfill};

use crate::jobs::registry::JobHandlerRegistry;
use crate::storage::RecipeStore;
use std::sync::Arc;

/// Name under which the backfill is registered with the job registry.
pub const BACKFILL_JOB: &str = "backfill";

/// Registers the backfill pass as a maintenance job over `store`.
pub fn register(registry: &JobHandlerRegistry, store: Arc<RecipeStore>) {
    registry.register(BACKFILL_JOB, move || {
        let store = store.clone();
        async move {
            let report = tokio::task::spawn_blocking(move || run_backfill(store.as_ref())).await??;
            Ok(serde_json::to_value(report)?)
        }
    });
}
