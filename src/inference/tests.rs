#[cfg(test)]
mod tests {
    use crate::inference::heuristics::QUICK_INSTRUCTIONS_MAX_CHARS;
    use crate::inference::{infer_categories, infer_tags};
    use crate::recipes::types::{Ingredient, Recipe};

    fn recipe(title: &str, names: &[&str], instructions: &str) -> Recipe {
        let ingredients = names.iter().map(|name| Ingredient::new(*name, "1")).collect();
        Recipe::new(title, ingredients, instructions)
    }

    fn long_instructions() -> String {
        "Stir slowly. ".repeat(20)
    }

    // ============================================================
    // CATEGORIES
    // ============================================================

    #[test]
    fn test_title_keywords_map_to_categories() {
        let long = long_instructions();

        assert_eq!(infer_categories(&recipe("Mediterranean Quinoa Salad", &[], &long)), vec!["Salad"]);
        assert_eq!(infer_categories(&recipe("Classic Margherita PIZZA", &[], &long)), vec!["Baked"]);
        assert_eq!(infer_categories(&recipe("Mango Salsa Fish Tacos", &[], &long)), vec!["Street Food"]);
    }

    #[test]
    fn test_multiple_categories_apply() {
        let categories = infer_categories(&recipe("Soup Bowl", &[], "Heat."));

        assert_eq!(categories, vec!["Soup", "Bowl"]);
    }

    #[test]
    fn test_existing_categories_are_kept_first() {
        let mut r = recipe("Lentil Soup", &[], "Simmer.");
        r.categories = vec!["Dinner".to_string(), "Soup".to_string()];

        assert_eq!(infer_categories(&r), vec!["Dinner", "Soup"]);
    }

    #[test]
    fn test_no_keyword_no_category() {
        let r = recipe("Herb-Roasted Chicken Thighs", &["chicken thighs"], "Roast.");

        assert!(infer_categories(&r).is_empty());
    }

    // ============================================================
    // TAGS
    // ============================================================

    #[test]
    fn test_ingredient_keywords_map_to_tags() {
        let long = long_instructions();

        assert_eq!(infer_tags(&recipe("Scampi", &["Shrimp (peeled)"], &long)), vec!["seafood"]);
        assert_eq!(infer_tags(&recipe("Grill", &["king prawns"], &long)), vec!["seafood"]);
        assert_eq!(infer_tags(&recipe("Dal", &["brown lentils"], &long)), vec!["fiber"]);
        assert_eq!(infer_tags(&recipe("Toast", &["ripe avocado"], &long)), vec!["healthy"]);
    }

    #[test]
    fn test_short_instructions_are_quick() {
        let tags = infer_tags(&recipe("Toast", &["bread"], "Toast the bread."));

        assert_eq!(tags, vec!["quick"]);
    }

    #[test]
    fn test_quick_threshold_is_exclusive() {
        let at_limit = "a".repeat(QUICK_INSTRUCTIONS_MAX_CHARS);
        let below_limit = "a".repeat(QUICK_INSTRUCTIONS_MAX_CHARS - 1);

        assert!(infer_tags(&recipe("A", &["bread"], &at_limit)).is_empty());
        assert_eq!(infer_tags(&recipe("A", &["bread"], &below_limit)), vec!["quick"]);
    }

    #[test]
    fn test_existing_tags_are_never_removed() {
        let mut r = recipe("Bowl", &["shrimp", "avocado"], "Mix.");
        r.tags = vec!["fresh".to_string(), "seafood".to_string()];

        assert_eq!(infer_tags(&r), vec!["fresh", "seafood", "healthy", "quick"]);
    }
}
