//! Recipe Write Path
//!
//! Create, read, update and delete for recipe documents.
//!
//! ## Workflow
//! 1. **Validate**: Title, instructions and at least one ingredient are required on create.
//! 2. **Normalize**: Ingredient names are reduced to canonical tokens whenever the list is
//!    created or replaced.
//! 3. **Store**: The document, tokens included, is written to the `RecipeStore`.

pub mod handlers;
pub mod types;
