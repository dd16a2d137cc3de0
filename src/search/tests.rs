//! Search Module Tests
//!
//! Validates query sanitization, title matching and paging.
//!
//! ## Test Scopes
//! - **Filter**: Escaping of pattern metacharacters, case-insensitivity, empty queries.
//! - **Engine**: Filtering and paging over a store.
//! - **Handler**: Query parameter defaults and response shape.

#[cfg(test)]
mod tests {
    use crate::recipes::types::{Ingredient, Recipe};
    use crate::search::build_title_filter;
    use crate::search::engine::{MAX_LIMIT, search_recipes};
    use crate::search::handlers::handle_search;
    use crate::search::types::SearchParams;
    use crate::storage::RecipeStore;
    use axum::Extension;
    use axum::extract::Query;
    use serde_json::json;
    use std::sync::Arc;

    fn store_with(titles: &[&str]) -> RecipeStore {
        let store = RecipeStore::in_memory();
        for (i, title) in titles.iter().enumerate() {
            let mut recipe = Recipe::new(*title, vec![Ingredient::new("salt", "")], "Cook.");
            recipe.created_at = i as u64;
            store.insert(recipe).unwrap();
        }
        store
    }

    // ============================================================
    // FILTER TESTS
    // ============================================================

    #[test]
    fn test_empty_query_matches_everything() {
        for query in ["", "   ", "\t\n"] {
            let filter = build_title_filter(query);
            assert!(filter.is_any());
            assert!(filter.matches("Anything at all"));
            assert!(filter.matches(""));
            assert_eq!(filter.to_condition(), json!({}));
        }
    }

    #[test]
    fn test_case_insensitive_substring() {
        let filter = build_title_filter("SOUP");

        assert!(filter.matches("Lentil & Spinach Soup"));
        assert!(filter.matches("soupy noodles"));
        assert!(!filter.matches("Mango Salsa Fish Tacos"));
    }

    #[test]
    fn test_wildcards_only_match_literally() {
        let filter = build_title_filter("a.*b");

        assert!(!filter.matches("a big bowl"));
        assert!(!filter.matches("aXXb"));
        assert!(filter.matches("Recipe a.*b special"));
        assert!(filter.matches("A.*B"));
    }

    #[test]
    fn test_unbalanced_group_does_not_fail() {
        let filter = build_title_filter("(evil");

        assert!(filter.matches("The (Evil) Cake"));
        assert!(!filter.matches("evil cake"));
        assert_eq!(filter.pattern().as_deref(), Some(r"\(evil"));
    }

    #[test]
    fn test_other_metacharacters() {
        for query in ["[", "\\", "+?", "{2,}", "^$", "|", "(a+)+$"] {
            let filter = build_title_filter(query);
            let title = format!("before {} after", query);

            assert!(filter.matches(&title), "{query:?} should match its own literal text");
            assert!(!filter.matches("plain title"), "{query:?} should not act as a pattern");
        }
    }

    #[test]
    fn test_condition_carries_escaped_pattern() {
        let filter = build_title_filter("a.b");

        assert_eq!(
            filter.to_condition(),
            json!({ "title": { "$regex": r"a\.b", "$options": "i" } })
        );
    }

    #[test]
    fn test_surrounding_spaces_are_part_of_the_query() {
        let filter = build_title_filter(" pie");

        assert!(filter.matches("Apple Pie"));
        assert!(!filter.matches("Applepie"));
        assert_eq!(filter.pattern().as_deref(), Some(" pie"));
    }

    // ============================================================
    // ENGINE TESTS
    // ============================================================

    #[test]
    fn test_search_filters_titles() {
        let store = store_with(&["Buddha Bowl", "Shrimp Rice Bowl", "Margherita Pizza"]);

        let page = search_recipes(&store, Some("bowl"), 0, 10);

        assert_eq!(page.total_count, 2);
        let titles: Vec<&str> = page.recipes.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Buddha Bowl", "Shrimp Rice Bowl"]);
    }

    #[test]
    fn test_search_without_query_lists_all() {
        let store = store_with(&["One", "Two", "Three"]);

        let page = search_recipes(&store, None, 0, 10);

        assert_eq!(page.total_count, 3);
        assert_eq!(page.recipes.len(), 3);
    }

    #[test]
    fn test_search_paging() {
        let store = store_with(&["Soup 1", "Soup 2", "Soup 3", "Soup 4", "Soup 5"]);

        let page = search_recipes(&store, Some("soup"), 1, 2);

        assert_eq!(page.total_count, 5);
        let titles: Vec<&str> = page.recipes.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Soup 2", "Soup 3"]);
    }

    #[test]
    fn test_search_limit_is_clamped() {
        let titles: Vec<String> = (0..150).map(|i| format!("Soup {i}")).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let store = store_with(&refs);

        assert_eq!(search_recipes(&store, None, 0, 1000).recipes.len(), MAX_LIMIT);
        assert_eq!(search_recipes(&store, None, 0, 0).recipes.len(), 1);
    }

    // ============================================================
    // HANDLER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_handle_search_response() {
        let store = Arc::new(store_with(&["Lentil Soup", "Pizza"]));

        let response = handle_search(
            Query(SearchParams {
                q: Some("SOUP".to_string()),
                limit: None,
                offset: None,
            }),
            Extension(store),
        )
        .await;

        assert_eq!(response.query.as_deref(), Some("SOUP"));
        assert_eq!(response.total_count, 1);
        assert_eq!(response.count, 1);
        assert_eq!(response.results[0].title, "Lentil Soup");
    }
}
