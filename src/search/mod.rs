//! Recipe Search Module
//!
//! Serves the recipe listing, optionally narrowed by a free-text title query.
//!
//! ## Responsibilities
//! - **Sanitization**: User queries are regex-escaped before any pattern is compiled.
//! - **Filtering**: Titles are matched case-insensitively as substrings.
//! - **Paging**: Results are returned oldest first with `limit`/`offset` paging.
//!
//! ## Submodules
//! - **`filter`**: The escaped title predicate and its document-store condition form.
//! - **`engine`**: Applies the predicate to the store and pages the results.
//! - **`handlers`**: HTTP handler for the Axum web server.
//! - **`types`**: Query parameters and response DTOs.

pub mod engine;
pub mod filter;
pub mod handlers;
pub mod types;

pub use filter::{TitleFilter, build_title_filter};

#[cfg(test)]
mod tests;
