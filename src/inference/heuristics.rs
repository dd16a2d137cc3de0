use crate::normalize::tokenizer::dedup_in_order;
use crate::recipes::types::Recipe;

/// Title keyword -> category label.
pub const CATEGORY_KEYWORDS: &[(&str, &str)] = &[
    ("salad", "Salad"),
    ("soup", "Soup"),
    ("bowl", "Bowl"),
    ("pizza", "Baked"),
    ("taco", "Street Food"),
];

/// Ingredient keywords -> tag label.
pub const INGREDIENT_TAGS: &[(&[&str], &str)] = &[
    (&["shrimp", "prawn"], "seafood"),
    (&["lentil"], "fiber"),
    (&["avocado"], "healthy"),
];

pub const QUICK_TAG: &str = "quick";

/// Instructions shorter than this many characters earn the "quick" tag.
pub const QUICK_INSTRUCTIONS_MAX_CHARS: usize = 180;

/// Existing categories plus any inferred from title keywords.
pub fn infer_categories(recipe: &Recipe) -> Vec<String> {
    let title = recipe.title.to_lowercase();
    let inferred = CATEGORY_KEYWORDS
        .iter()
        .filter(|(keyword, _)| title.contains(keyword))
        .map(|(_, category)| category.to_string());

    merge_labels(&recipe.categories, inferred)
}

/// Existing tags plus any inferred from ingredient names and instruction length.
pub fn infer_tags(recipe: &Recipe) -> Vec<String> {
    let names: Vec<String> = recipe
        .ingredients
        .iter()
        .map(|ingredient| ingredient.name.to_lowercase())
        .collect();

    let mut inferred: Vec<String> = INGREDIENT_TAGS
        .iter()
        .filter(|(keywords, _)| {
            names
                .iter()
                .any(|name| keywords.iter().any(|keyword| name.contains(keyword)))
        })
        .map(|(_, tag)| tag.to_string())
        .collect();

    if recipe.instructions.chars().count() < QUICK_INSTRUCTIONS_MAX_CHARS {
        inferred.push(QUICK_TAG.to_string());
    }

    merge_labels(&recipe.tags, inferred)
}

fn merge_labels(existing: &[String], inferred: impl IntoIterator<Item = String>) -> Vec<String> {
    dedup_in_order(existing.iter().cloned().chain(inferred).collect())
}
