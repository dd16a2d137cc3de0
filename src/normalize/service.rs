use super::tokenizer::{dedup_in_order, normalize_ingredient_name};
use crate::recipes::types::Ingredient;

/// Normalizes every ingredient name of a recipe into its token set.
///
/// Empty normalizations are dropped and duplicates collapse to their first
/// occurrence, so the same ingredient list always yields the same ordered set.
pub fn normalize_ingredient_set(ingredients: &[Ingredient]) -> Vec<String> {
    let normalized = ingredients
        .iter()
        .map(|ingredient| normalize_ingredient_name(&ingredient.name))
        .filter(|token| !token.is_empty())
        .collect();

    dedup_in_order(normalized)
}
