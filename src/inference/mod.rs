//! Category and tag inference.
//!
//! Best-effort enrichment used by the backfill job: labels are only ever added,
//! never removed, so running it repeatedly converges.

pub mod heuristics;

pub use heuristics::{infer_categories, infer_tags};

#[cfg(test)]
mod tests;
