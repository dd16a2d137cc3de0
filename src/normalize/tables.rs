//! Static Lookup Tables
//!
//! Read-only vocabulary consumed by the ingredient tokenizer. Every table is built
//! once on first use and shared by all callers (request handlers, the backfill job,
//! the seeder) without any coordination.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Measurement words removed from ingredient names, singular and plural forms.
pub const UNIT_WORDS: &[&str] = &[
    "tsp",
    "tsps",
    "teaspoon",
    "teaspoons",
    "tbsp",
    "tbsps",
    "tablespoon",
    "tablespoons",
    "cup",
    "cups",
    "g",
    "gram",
    "grams",
    "kg",
    "kilogram",
    "kilograms",
    "ml",
    "milliliter",
    "milliliters",
    "millilitre",
    "millilitres",
    "l",
    "liter",
    "liters",
    "litre",
    "litres",
    "oz",
    "ounce",
    "ounces",
    "lb",
    "lbs",
    "pound",
    "pounds",
    "clove",
    "cloves",
];

/// Whole-word synonym folding applied before singularization.
///
/// Values may contain a space ("bell pepper"); such values are kept as one token.
pub const SYNONYM_ENTRIES: &[(&str, &str)] = &[
    ("chilli", "chili"),
    ("chilies", "chili"),
    ("chiles", "chili"),
    ("capsicum", "bell pepper"),
    ("peppers", "pepper"),
    ("tomatoes", "tomato"),
    ("onions", "onion"),
    ("cloves", "clove"),
];

/// Adjacent word pairs collapsed into a single multi-word token.
pub const MULTI_WORD_TERMS: &[(&str, &str)] = &[("bell", "pepper")];

pub static SYNONYMS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| SYNONYM_ENTRIES.iter().copied().collect());

pub static UNIT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = UNIT_WORDS.join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b")).expect("unit vocabulary must compile")
});

/// Digits, decimal points, fraction slashes and range hyphens.
pub static QUANTITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9/.\-]+").expect("quantity pattern must compile"));

pub static NON_LETTER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z\s]").expect("letter pattern must compile"));

pub static WHITESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern must compile"));

/// Looks up the canonical form of a single word, if one is registered.
pub fn synonym_for(word: &str) -> Option<&'static str> {
    SYNONYMS.get(word).copied()
}

/// Returns the collapsed term for an adjacent pair, if the pair is recognized.
pub fn multi_word_term(first: &str, second: &str) -> Option<String> {
    MULTI_WORD_TERMS
        .iter()
        .find(|(a, b)| *a == first && *b == second)
        .map(|(a, b)| format!("{a} {b}"))
}
