//! Storage Module Tests
//!
//! Validates the in-memory document map and its JSON snapshot persistence.
//!
//! ## Test Scopes
//! - **RecipeStore**: Insert/get/update/remove semantics, view counting and listing order.
//! - **Snapshots**: Round-tripping through the snapshot file, missing and malformed files,
//!   deferred writes for views and repairs.

#[cfg(test)]
mod tests {
    use crate::recipes::types::{Ingredient, Recipe};
    use crate::storage::{RecipeRepository, RecipeStore};
    use std::fs;

    fn sample(title: &str, created_at: u64) -> Recipe {
        let mut recipe = Recipe::new(title, vec![Ingredient::new("Onions", "2")], "Cook.");
        recipe.created_at = created_at;
        recipe
    }

    // ============================================================
    // IN-MEMORY OPERATIONS
    // ============================================================

    #[test]
    fn test_insert_and_get() {
        let store = RecipeStore::in_memory();
        let recipe = sample("Onion Soup", 1);

        store.insert(recipe.clone()).unwrap();

        assert_eq!(store.get(&recipe.id), Some(recipe));
        assert_eq!(store.len(), 1);
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_list_orders_by_creation_time() {
        let store = RecipeStore::in_memory();
        store.insert(sample("Third", 30)).unwrap();
        store.insert(sample("First", 10)).unwrap();
        store.insert(sample("Second", 20)).unwrap();

        let titles: Vec<String> = store.list().into_iter().map(|r| r.title).collect();

        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_try_update_existing_and_missing() {
        let store = RecipeStore::in_memory();
        let recipe = sample("Stew", 1);
        store.insert(recipe.clone()).unwrap();

        let updated: Result<_, anyhow::Error> = store.try_update(&recipe.id, |r| {
            r.title = "Beef Stew".to_string();
            Ok(())
        });

        assert_eq!(updated.unwrap().unwrap().title, "Beef Stew");
        assert_eq!(store.get(&recipe.id).unwrap().title, "Beef Stew");

        let missing: Result<_, anyhow::Error> = store.try_update("missing", |_| Ok(()));
        assert!(missing.unwrap().is_none());
    }

    #[test]
    fn test_try_update_error_is_returned() {
        let store = RecipeStore::in_memory();
        let recipe = sample("Stew", 1);
        store.insert(recipe.clone()).unwrap();

        let result = store.try_update(&recipe.id, |_| Err(anyhow::anyhow!("rejected")));

        assert!(result.is_err());
        assert_eq!(store.get(&recipe.id), Some(recipe));
    }

    #[test]
    fn test_record_view() {
        let store = RecipeStore::in_memory();
        let mut recipe = sample("Stew", 1);
        recipe.view_count = None;
        store.insert(recipe.clone()).unwrap();

        assert_eq!(store.record_view(&recipe.id).unwrap().view_count, Some(1));
        assert_eq!(store.record_view(&recipe.id).unwrap().view_count, Some(2));
        assert!(store.record_view("missing").is_none());
    }

    #[test]
    fn test_remove() {
        let store = RecipeStore::in_memory();
        let recipe = sample("Stew", 1);
        store.insert(recipe.clone()).unwrap();

        assert!(store.remove(&recipe.id).unwrap().is_some());
        assert!(store.remove(&recipe.id).unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_by_titles() {
        let store = RecipeStore::in_memory();
        store.insert(sample("Keep Me", 1)).unwrap();
        store.insert(sample("Drop Me", 2)).unwrap();
        store.insert(sample("Drop Me", 3)).unwrap();

        let removed = store.remove_by_titles(&["Drop Me"]).unwrap();

        assert_eq!(removed, 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].title, "Keep Me");
    }

    #[test]
    fn test_repository_repair_on_live_document() {
        let store = RecipeStore::in_memory();
        let recipe = sample("Curry", 1);
        store.insert(recipe.clone()).unwrap();

        let changed = store
            .repair(&recipe.id, &mut |r| {
                r.tags.push("spicy".to_string());
                true
            })
            .unwrap();
        let untouched = store.repair(&recipe.id, &mut |_| false).unwrap();
        let missing = store.repair("missing", &mut |_| true).unwrap();

        assert!(changed);
        assert!(!untouched);
        assert!(!missing);
        assert_eq!(store.scan()[0].tags, vec!["spicy"]);
        store.commit().unwrap();
    }

    // ============================================================
    // SNAPSHOT PERSISTENCE
    // ============================================================

    #[test]
    fn test_open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("recipes.json");

        let store = RecipeStore::open(&path).unwrap();

        assert!(store.is_empty());
        assert!(!path.exists(), "Nothing is written until the first mutation");
        assert_eq!(store.snapshot_path(), Some(path.as_path()));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");

        let recipe = sample("Tomato Salad", 5);
        {
            let store = RecipeStore::open(&path).unwrap();
            store.insert(recipe.clone()).unwrap();
        }

        assert!(path.exists());
        let reopened = RecipeStore::open(&path).unwrap();
        assert_eq!(reopened.get(&recipe.id), Some(recipe));
    }

    #[test]
    fn test_open_malformed_snapshot_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(RecipeStore::open(&path).is_err());
    }

    #[test]
    fn test_snapshot_with_legacy_documents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        fs::write(
            &path,
            r#"[
                {"id": "a", "title": "Old Soup", "ingredients": [{"name": "Onions"}], "instructions": "Boil."},
                {"id": "b", "title": "Odd Count", "instructions": "Mix.", "viewCount": "many"},
                {"id": "c", "title": "Counted", "instructions": "Mix.", "viewCount": 7}
            ]"#,
        )
        .unwrap();

        let store = RecipeStore::open(&path).unwrap();

        let old = store.get("a").unwrap();
        assert!(old.normalized_ingredients.is_empty());
        assert_eq!(old.ingredients[0].quantity, "");
        assert_eq!(old.view_count, None);
        assert_eq!(store.get("b").unwrap().view_count, None);
        assert_eq!(store.get("c").unwrap().view_count, Some(7));
    }

    #[test]
    fn test_views_are_persisted_lazily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        let store = RecipeStore::open(&path).unwrap();
        let recipe = sample("Stew", 1);
        store.insert(recipe.clone()).unwrap();

        store.record_view(&recipe.id).unwrap();
        assert!(store.is_dirty());
        let on_disk = RecipeStore::open(&path).unwrap();
        assert_eq!(on_disk.get(&recipe.id).unwrap().view_count, Some(0));

        assert!(store.flush_if_dirty().unwrap());
        assert!(!store.flush_if_dirty().unwrap());
        let on_disk = RecipeStore::open(&path).unwrap();
        assert_eq!(on_disk.get(&recipe.id).unwrap().view_count, Some(1));
    }

    #[test]
    fn test_repairs_reach_disk_on_commit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        let store = RecipeStore::open(&path).unwrap();
        let recipe = sample("Curry", 1);
        store.insert(recipe.clone()).unwrap();

        store
            .repair(&recipe.id, &mut |r| {
                r.tags = vec!["spicy".to_string()];
                true
            })
            .unwrap();
        assert!(RecipeStore::open(&path).unwrap().get(&recipe.id).unwrap().tags.is_empty());

        store.commit().unwrap();
        assert!(!store.is_dirty());
        let on_disk = RecipeStore::open(&path).unwrap();
        assert_eq!(on_disk.get(&recipe.id).unwrap().tags, vec!["spicy"]);
    }
}
