//! Ingredient Normalization Module
//!
//! Turns free-text ingredient names into canonical tokens so that "2 cups chopped
//! Tomatoes" and "tomato" land on the same vocabulary.
//!
//! ## Pipeline
//! 1. Lowercase, then strip unit words ("tbsp", "cups", "cloves", ...).
//! 2. Strip quantities (integers, decimals, fractions, ranges) and punctuation.
//! 3. Fold synonyms ("chilli" -> "chili"), then singularize ("berries" -> "berry").
//! 4. Collapse recognized pairs ("bell" + "pepper" -> "bell pepper") and deduplicate.
//!
//! ## Submodules
//! - **`tables`**: Unit vocabulary, synonym map, multi-word terms and compiled patterns.
//! - **`tokenizer`**: The per-name normalizer and its building blocks.
//! - **`service`**: Recipe-level token set used by the write path and the backfill job.

pub mod service;
pub mod tables;
pub mod tokenizer;

pub use service::normalize_ingredient_set;
pub use tokenizer::normalize_ingredient_name;
