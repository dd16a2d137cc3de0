//! Title Filter
//!
//! Builds a case-insensitive substring predicate over recipe titles from a user query.
//! The query is always escaped before it reaches the regex engine, so metacharacters
//! such as `.*` or `(` only ever match themselves.

use regex::{Regex, RegexBuilder};
use serde_json::{Value, json};

/// Upper bound on the compiled program size for a single query.
const MAX_PATTERN_SIZE: usize = 1 << 20;

#[derive(Debug, Clone)]
pub enum TitleFilter {
    /// No query: every title matches.
    Any,
    /// Escaped, case-insensitive pattern.
    Pattern(Regex),
    /// Lowercased literal, used when the escaped pattern exceeds the size limit.
    Literal(String),
}

/// Builds the title predicate for `query`. Empty or whitespace-only queries match everything.
pub fn build_title_filter(query: &str) -> TitleFilter {
    if query.trim().is_empty() {
        return TitleFilter::Any;
    }

    // Surrounding spaces are part of the substring being searched for.
    let escaped = regex::escape(query);
    match RegexBuilder::new(&escaped)
        .case_insensitive(true)
        .size_limit(MAX_PATTERN_SIZE)
        .build()
    {
        Ok(pattern) => TitleFilter::Pattern(pattern),
        Err(e) => {
            tracing::warn!("Title query too large for a pattern, matching literally: {}", e);
            TitleFilter::Literal(query.to_lowercase())
        }
    }
}

impl TitleFilter {
    pub fn matches(&self, title: &str) -> bool {
        match self {
            TitleFilter::Any => true,
            TitleFilter::Pattern(pattern) => pattern.is_match(title),
            TitleFilter::Literal(needle) => title.to_lowercase().contains(needle.as_str()),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, TitleFilter::Any)
    }

    /// The escaped pattern source, if any.
    pub fn pattern(&self) -> Option<String> {
        match self {
            TitleFilter::Any => None,
            TitleFilter::Pattern(pattern) => Some(pattern.as_str().to_string()),
            TitleFilter::Literal(needle) => Some(regex::escape(needle)),
        }
    }

    /// Document-store filter condition equivalent to this predicate.
    ///
    /// `{}` for no filter, otherwise `{"title": {"$regex": <escaped>, "$options": "i"}}`.
    pub fn to_condition(&self) -> Value {
        match self.pattern() {
            None => json!({}),
            Some(pattern) => json!({ "title": { "$regex": pattern, "$options": "i" } }),
        }
    }
}
