use crate::recipes::types::{Ingredient, Recipe, RecipeTime};

struct Sample {
    title: &'static str,
    ingredients: &'static [(&'static str, &'static str)],
    instructions: &'static str,
    time: (&'static str, &'static str, &'static str),
    categories: &'static [&'static str],
    cuisine: &'static str,
    tags: &'static [&'static str],
}

const SAMPLES: &[Sample] = &[
    Sample {
        title: "Creamy Garlic Parmesan Pasta",
        ingredients: &[
            ("spaghetti", "300 g"),
            ("butter", "2 tbsp"),
            ("garlic cloves", "4 minced"),
            ("heavy cream", "1 cup"),
            ("parmesan cheese", "3/4 cup grated"),
            ("salt", "to taste"),
            ("black pepper", "to taste"),
            ("fresh parsley", "2 tbsp chopped"),
        ],
        instructions: "Cook pasta until al dente. Melt butter and sauté garlic. Pour in cream, simmer gently. Stir in parmesan until smooth. Toss pasta, adjust seasoning, garnish with parsley.",
        time: ("10m", "15m", "25m"),
        categories: &["Dinner", "Quick"],
        cuisine: "Italian",
        tags: &["creamy", "vegetarian", "comfort"],
    },
    Sample {
        title: "Spicy Chickpea Buddha Bowl",
        ingredients: &[
            ("chickpeas (cooked)", "2 cups"),
            ("smoked paprika", "1 tsp"),
            ("ground cumin", "1 tsp"),
            ("olive oil", "1 tbsp"),
            ("quinoa (cooked)", "1.5 cups"),
            ("baby spinach", "2 cups"),
            ("avocado", "1 sliced"),
            ("red cabbage", "1/2 cup shredded"),
            ("tahini", "2 tbsp"),
            ("lemon juice", "1 tbsp"),
        ],
        instructions: "Toss chickpeas with oil, paprika, cumin; roast or pan-toast. Arrange quinoa, greens, vegetables, chickpeas. Whisk tahini + lemon + water; drizzle.",
        time: ("12m", "8m", "20m"),
        categories: &["Lunch", "Healthy"],
        cuisine: "Fusion",
        tags: &["vegan", "high-protein", "bowl"],
    },
    Sample {
        title: "Classic Margherita Pizza",
        ingredients: &[
            ("pizza dough", "1 ball (300 g)"),
            ("tomato sauce", "1/2 cup"),
            ("fresh mozzarella", "120 g"),
            ("fresh basil leaves", "8-10"),
            ("olive oil", "1 tbsp"),
            ("sea salt", "pinch"),
        ],
        instructions: "Stretch dough. Spread thin layer tomato sauce. Add torn mozzarella. Bake on hot stone (250°C) until blistered. Finish with basil and olive oil.",
        time: ("15m", "10m", "25m"),
        categories: &["Dinner"],
        cuisine: "Italian",
        tags: &["baked", "vegetarian", "simple"],
    },
    Sample {
        title: "Thai Green Curry with Vegetables",
        ingredients: &[
            ("green curry paste", "2 tbsp"),
            ("coconut milk", "400 ml"),
            ("broccoli florets", "1 cup"),
            ("red bell pepper", "1 sliced"),
            ("zucchini", "1 sliced"),
            ("bamboo shoots", "1/2 cup"),
            ("thai basil", "handful"),
            ("lime juice", "1 tbsp"),
            ("soy sauce", "1 tbsp"),
        ],
        instructions: "Simmer curry paste in a little coconut milk. Add remaining coconut milk and vegetables; cook until tender-crisp. Season with soy + lime. Finish with Thai basil.",
        time: ("12m", "18m", "30m"),
        categories: &["Dinner"],
        cuisine: "Thai",
        tags: &["spicy", "gluten-free", "curry"],
    },
    Sample {
        title: "Lentil & Spinach Soup",
        ingredients: &[
            ("brown lentils", "1 cup rinsed"),
            ("onion", "1 diced"),
            ("garlic", "3 cloves minced"),
            ("carrot", "1 diced"),
            ("celery stalk", "1 diced"),
            ("vegetable broth", "5 cups"),
            ("cumin", "1 tsp"),
            ("baby spinach", "2 cups"),
        ],
        instructions: "Sauté onion, carrot, celery, garlic. Add lentils, broth, cumin. Simmer until tender. Stir in spinach to wilt, season.",
        time: ("10m", "30m", "40m"),
        categories: &["Dinner", "Healthy"],
        cuisine: "Middle Eastern",
        tags: &["soup", "vegan", "high-fiber"],
    },
    Sample {
        title: "Mango Salsa Fish Tacos",
        ingredients: &[
            ("white fish fillets", "400 g"),
            ("lime juice", "2 tbsp"),
            ("chili powder", "1 tsp"),
            ("cabbage (shredded)", "1 cup"),
            ("mango", "1 diced"),
            ("red onion", "2 tbsp minced"),
            ("cilantro", "2 tbsp chopped"),
            ("small tortillas", "8"),
        ],
        instructions: "Marinate fish with lime + chili. Cook until flaky. Mix mango, onion, cilantro, lime pinch. Assemble tortillas with fish, cabbage, salsa.",
        time: ("15m", "10m", "25m"),
        categories: &["Dinner"],
        cuisine: "Mexican",
        tags: &["tacos", "fresh", "seafood"],
    },
    Sample {
        title: "Garlic Butter Shrimp Rice Bowl",
        ingredients: &[
            ("shrimp (peeled)", "350 g"),
            ("garlic cloves", "4 minced"),
            ("butter", "2 tbsp"),
            ("paprika", "1/2 tsp"),
            ("cooked rice", "2 cups"),
            ("green onions", "2 tbsp sliced"),
            ("lemon juice", "1 tsp"),
        ],
        instructions: "Melt butter, sauté garlic. Add shrimp + paprika; cook until pink. Finish with lemon. Serve over rice, garnish green onions.",
        time: ("8m", "7m", "15m"),
        categories: &["Dinner", "Quick"],
        cuisine: "Fusion",
        tags: &["seafood", "one-bowl", "fast"],
    },
];

/// Titles of every sample recipe, used to clear previous seed runs.
pub fn sample_titles() -> Vec<&'static str> {
    SAMPLES.iter().map(|sample| sample.title).collect()
}

/// Builds fresh recipe documents (new ids, normalized tokens) for every sample.
pub fn sample_recipes() -> Vec<Recipe> {
    SAMPLES
        .iter()
        .map(|sample| {
            let ingredients = sample
                .ingredients
                .iter()
                .map(|(name, quantity)| Ingredient::new(*name, *quantity))
                .collect();

            let mut recipe = Recipe::new(sample.title, ingredients, sample.instructions);
            let (prep, cook, total) = sample.time;
            recipe.time = Some(RecipeTime {
                prep: Some(prep.to_string()),
                cook: Some(cook.to_string()),
                total: Some(total.to_string()),
            });
            recipe.categories = sample.categories.iter().map(|c| c.to_string()).collect();
            recipe.cuisine = Some(sample.cuisine.to_string());
            recipe.tags = sample.tags.iter().map(|t| t.to_string()).collect();
            recipe
        })
        .collect()
}
