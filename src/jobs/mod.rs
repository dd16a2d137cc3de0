//! Maintenance Job Module
//!
//! Runs administrative passes (such as the normalization backfill) out-of-band from
//! request handling.
//!
//! ## Architecture Overview
//! 1. **Submission**: `POST /admin/jobs` names a registered handler; the job is recorded as
//!    `Pending` in the `JobQueue` and its id is pushed onto a channel.
//! 2. **Execution**: A single `JobRunner` worker drains the channel in order, so two jobs never
//!    run at the same time.
//! 3. **Reporting**: The handler's JSON summary (or error) is stored on the entry and served by
//!    `GET /admin/jobs/:id`.
//!
//! ## Submodules
//! - **`types`**: Job ids, statuses and HTTP DTOs.
//! - **`registry`**: Maps handler names to executable async closures.
//! - **`queue`**: Job bookkeeping and the submission channel.
//! - **`runner`**: The worker loop.
//! - **`handlers`**: Admin HTTP endpoints.

pub mod handlers;
pub mod queue;
pub mod registry;
pub mod runner;
pub mod types;
