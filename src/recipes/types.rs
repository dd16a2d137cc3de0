//! Recipe Data Types
//!
//! The stored recipe document and the payloads accepted by the write path.
//! Field names are camelCase on the wire so snapshots stay compatible with
//! documents written by earlier versions of the service.

use crate::error::AppError;
use crate::normalize::normalize_ingredient_set;
use crate::now_ms;

use serde::{Deserialize, Deserializer, Serialize};

/// A single ingredient line as entered by the author.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub quantity: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            quantity: quantity.into().trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
}

/// A recipe document as held by the store.
///
/// `normalized_ingredients` is derived from `ingredients` whenever they are created
/// or replaced. `view_count` is `None` when the stored field is absent or holds
/// something other than a non-negative integer; the backfill job repairs it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub normalized_ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<RecipeTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub created_at: u64,
    #[serde(default)]
    pub updated_at: u64,
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(serde_json::Value::as_u64))
}

impl Recipe {
    /// Builds a fresh recipe with a new id and its normalized ingredient tokens.
    pub fn new(
        title: impl Into<String>,
        ingredients: Vec<Ingredient>,
        instructions: impl Into<String>,
    ) -> Self {
        let now = now_ms();
        let normalized_ingredients = normalize_ingredient_set(&ingredients);

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into().trim().to_string(),
            ingredients,
            normalized_ingredients,
            instructions: instructions.into(),
            time: None,
            cover_image: None,
            categories: Vec::new(),
            cuisine: None,
            tags: Vec::new(),
            view_count: Some(0),
            created_at: now,
            updated_at: now,
        }
    }

    /// Validates a create payload and turns it into a new recipe.
    pub fn from_input(input: RecipeInput) -> Result<Self, AppError> {
        let title = required_text(input.title, "title")?;
        let instructions = required_text(input.instructions, "instructions")?;
        let ingredients = clean_ingredients(input.ingredients.unwrap_or_default());
        if ingredients.is_empty() {
            return Err(AppError::Validation(
                "at least one ingredient is required".to_string(),
            ));
        }

        let mut recipe = Recipe::new(title, ingredients, instructions);
        recipe.time = input.time;
        recipe.cover_image = input.cover_image;
        recipe.categories = input.categories.unwrap_or_default();
        recipe.cuisine = input.cuisine.map(|c| c.trim().to_string());
        recipe.tags = input.tags.unwrap_or_default();
        Ok(recipe)
    }

    /// Applies the fields present in an update payload.
    ///
    /// Replacing the ingredient list recomputes the normalized tokens; every other
    /// field leaves them untouched.
    pub fn apply_update(&mut self, input: RecipeInput) -> Result<(), AppError> {
        if let Some(title) = input.title {
            self.title = required_text(Some(title), "title")?;
        }
        if let Some(instructions) = input.instructions {
            self.instructions = required_text(Some(instructions), "instructions")?;
        }
        if let Some(ingredients) = input.ingredients {
            let ingredients = clean_ingredients(ingredients);
            if ingredients.is_empty() {
                return Err(AppError::Validation(
                    "at least one ingredient is required".to_string(),
                ));
            }
            self.normalized_ingredients = normalize_ingredient_set(&ingredients);
            self.ingredients = ingredients;
        }
        if input.time.is_some() {
            self.time = input.time;
        }
        if input.cover_image.is_some() {
            self.cover_image = input.cover_image;
        }
        if let Some(categories) = input.categories {
            self.categories = categories;
        }
        if let Some(cuisine) = input.cuisine {
            self.cuisine = Some(cuisine.trim().to_string());
        }
        if let Some(tags) = input.tags {
            self.tags = tags;
        }
        self.updated_at = now_ms();
        Ok(())
    }
}

fn required_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        _ => Err(AppError::Validation(format!("{field} is required"))),
    }
}

fn clean_ingredients(ingredients: Vec<Ingredient>) -> Vec<Ingredient> {
    ingredients
        .into_iter()
        .map(|ingredient| Ingredient::new(ingredient.name, ingredient.quantity))
        .filter(|ingredient| !ingredient.name.is_empty())
        .collect()
}

/// Create/update payload. Every field is optional so one type serves both paths.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInput {
    pub title: Option<String>,
    pub ingredients: Option<Vec<Ingredient>>,
    pub instructions: Option<String>,
    pub time: Option<RecipeTime>,
    pub cover_image: Option<String>,
    pub categories: Option<Vec<String>>,
    pub cuisine: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
