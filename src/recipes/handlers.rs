use super::types::{MessageResponse, Recipe, RecipeInput};
use crate::error::AppError;
use crate::storage::RecipeStore;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

/// Runs a store operation that may rewrite the snapshot on the blocking pool.
async fn with_store<T, F>(store: Arc<RecipeStore>, op: F) -> Result<T, AppError>
where
    F: FnOnce(&RecipeStore) -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || op(&store))
        .await
        .map_err(anyhow::Error::from)?
}

pub async fn handle_create_recipe(
    Extension(store): Extension<Arc<RecipeStore>>,
    Json(input): Json<RecipeInput>,
) -> Result<(StatusCode, Json<Recipe>), AppError> {
    let recipe = Recipe::from_input(input)?;

    let stored = recipe.clone();
    with_store(store, move |store| Ok(store.insert(stored)?)).await?;
    tracing::info!(
        "Created recipe {} with {} normalized ingredients",
        recipe.id,
        recipe.normalized_ingredients.len()
    );

    Ok((StatusCode::CREATED, Json(recipe)))
}

pub async fn handle_get_recipe(
    Path(id): Path<String>,
    Extension(store): Extension<Arc<RecipeStore>>,
) -> Result<Json<Recipe>, AppError> {
    store
        .record_view(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Recipe {}", id)))
}

pub async fn handle_update_recipe(
    Path(id): Path<String>,
    Extension(store): Extension<Arc<RecipeStore>>,
    Json(input): Json<RecipeInput>,
) -> Result<Json<Recipe>, AppError> {
    let lookup = id.clone();
    let updated = with_store(store, move |store| {
        // Validated against a copy of the live document; a rejected payload changes nothing.
        store.try_update(&lookup, |recipe| {
            let mut candidate = recipe.clone();
            candidate.apply_update(input)?;
            *recipe = candidate;
            Ok(())
        })
    })
    .await?;

    match updated {
        Some(recipe) => {
            tracing::debug!("Updated recipe {}", recipe.id);
            Ok(Json(recipe))
        }
        None => Err(AppError::NotFound(format!("Recipe {}", id))),
    }
}

pub async fn handle_delete_recipe(
    Path(id): Path<String>,
    Extension(store): Extension<Arc<RecipeStore>>,
) -> Result<Json<MessageResponse>, AppError> {
    let lookup = id.clone();
    let removed = with_store(store, move |store| Ok(store.remove(&lookup)?)).await?;

    match removed {
        Some(_) => {
            tracing::info!("Deleted recipe {}", id);
            Ok(Json(MessageResponse {
                message: "Recipe deleted successfully".to_string(),
            }))
        }
        None => Err(AppError::NotFound(format!("Recipe {}", id))),
    }
}
