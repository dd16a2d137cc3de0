use crate::inference::{infer_categories, infer_tags};
use crate::normalize::normalize_ingredient_set;
use crate::now_ms;
use crate::recipes::types::Recipe;
use crate::storage::RecipeRepository;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Outcome of one pass over the collection.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackfillReport {
    pub scanned: usize,
    pub updated: usize,
    pub failed: usize,
}

/// Recomputes the derived fields of one recipe.
///
/// Returns the repaired document when anything differs from what is stored, or
/// `None` when the recipe has already converged.
pub fn backfill_recipe(recipe: &Recipe) -> Option<Recipe> {
    let mut repaired = recipe.clone();
    let mut changed = false;

    let normalized = normalize_ingredient_set(&recipe.ingredients);
    // An empty recomputation never clears tokens that are already stored.
    if !normalized.is_empty() && !same_set(&normalized, &recipe.normalized_ingredients) {
        repaired.normalized_ingredients = normalized;
        changed = true;
    }

    let categories = infer_categories(recipe);
    if !same_set(&categories, &recipe.categories) {
        repaired.categories = categories;
        changed = true;
    }

    let tags = infer_tags(recipe);
    if !same_set(&tags, &recipe.tags) {
        repaired.tags = tags;
        changed = true;
    }

    if recipe.view_count.is_none() {
        repaired.view_count = Some(0);
        changed = true;
    }

    if changed {
        repaired.updated_at = now_ms();
        Some(repaired)
    } else {
        None
    }
}

/// Scans every stored recipe once and repairs the ones whose derived fields changed.
///
/// Each repair is recomputed against the document as currently stored, so edits made
/// after the scan are kept. A failed repair is logged and counted, and the scan moves on
/// to the next record. Changes are committed once at the end of the pass.
pub fn run_backfill<R>(repository: &R) -> Result<BackfillReport>
where
    R: RecipeRepository + ?Sized,
{
    let mut report = BackfillReport::default();

    for recipe in repository.scan() {
        report.scanned += 1;

        // Cheap pre-check on the scanned copy; the live document is re-checked below.
        if backfill_recipe(&recipe).is_none() {
            continue;
        }

        let mut apply = |current: &mut Recipe| match backfill_recipe(current) {
            Some(repaired) => {
                *current = repaired;
                true
            }
            None => false,
        };

        match repository.repair(&recipe.id, &mut apply) {
            Ok(true) => {
                tracing::debug!("Backfilled recipe {} ({})", recipe.id, recipe.title);
                report.updated += 1;
            }
            Ok(false) => {
                tracing::debug!("Recipe {} changed or vanished since the scan", recipe.id);
            }
            Err(e) => {
                tracing::error!("Failed to backfill recipe {}: {:#}", recipe.id, e);
                report.failed += 1;
            }
        }
    }

    if report.updated > 0 {
        repository
            .commit()
            .context("failed to persist backfilled recipes")?;
    }

    tracing::info!(
        "Backfill complete: scanned={} updated={} failed={}",
        report.scanned,
        report.updated,
        report.failed
    );

    Ok(report)
}

/// Order-independent comparison. Duplicates count, so a stored list with repeated
/// entries never matches a deduplicated recomputation.
fn same_set(a: &[String], b: &[String]) -> bool {
    let mut a: Vec<&String> = a.iter().collect();
    let mut b: Vec<&String> = b.iter().collect();
    a.sort();
    b.sort();
    a == b
}
