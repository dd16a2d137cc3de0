use super::tables::{
    NON_LETTER_PATTERN, QUANTITY_PATTERN, UNIT_PATTERN, WHITESPACE_PATTERN, multi_word_term,
    synonym_for,
};
use std::collections::HashSet;

/// Reduces a free-text ingredient name to its canonical token string.
///
/// Units and quantities are stripped, words are folded through the synonym table,
/// singularized, and recognized pairs such as "bell pepper" are merged. The result is
/// a space-joined list of unique words in first-occurrence order, or an empty string
/// when nothing meaningful remains.
pub fn normalize_ingredient_name(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let without_units = UNIT_PATTERN.replace_all(&lowered, " ");
    let without_quantities = QUANTITY_PATTERN.replace_all(&without_units, " ");
    let letters_only = NON_LETTER_PATTERN.replace_all(&without_quantities, " ");
    let collapsed = WHITESPACE_PATTERN.replace_all(&letters_only, " ");
    let base = collapsed.trim();

    if base.is_empty() {
        return String::new();
    }

    let words: Vec<String> = base
        .split(' ')
        .map(|word| singularize(synonym_for(word).unwrap_or(word)))
        .filter(|word| !word.is_empty())
        .collect();

    dedup_in_order(collapse_multi_word_terms(words)).join(" ")
}

/// Strips common English plural suffixes.
///
/// "ies" becomes "y", "ses" loses its "es", and a trailing "s" (but not "ss") is
/// dropped. Mangles some singular words ending in "ses"; stored tokens depend on it.
pub fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if word.ends_with("ses") {
        return word[..word.len() - 2].to_string();
    }
    if word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

/// Merges recognized adjacent pairs, scanning left to right.
///
/// A word consumed by a merge is never considered for a second pair.
pub fn collapse_multi_word_terms(words: Vec<String>) -> Vec<String> {
    let mut collapsed = Vec::with_capacity(words.len());
    let mut i = 0;

    while i < words.len() {
        if let Some(next) = words.get(i + 1)
            && let Some(term) = multi_word_term(&words[i], next)
        {
            collapsed.push(term);
            i += 2;
            continue;
        }
        collapsed.push(words[i].clone());
        i += 1;
    }

    collapsed
}

pub(crate) fn dedup_in_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
