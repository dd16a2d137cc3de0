use serde::{Deserialize, Serialize};

/// Unique identifier for a maintenance job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct JobId(pub String);

impl JobId {
    /// Generates a new random UUID v4-based JobId.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle state of a job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum JobStatus {
    /// Submitted, waiting for the worker.
    Pending,
    /// Currently executing.
    Running,
    /// Finished; `summary` is whatever the handler reported.
    Completed { summary: serde_json::Value },
    /// The handler returned an `Err`.
    Failed { error: String },
}

/// A job as tracked by the `JobQueue`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobEntry {
    /// Name of the registered handler to invoke (e.g., "backfill").
    pub handler: String,
    pub status: JobStatus,
    /// Timestamp (ms) when the job was submitted.
    pub created_at: u64,
    /// Timestamp (ms) when the job reached `Completed` or `Failed`.
    pub finished_at: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitJobRequest {
    pub handler: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitJobResponse {
    pub job_id: String,
    pub handler: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JobStatusResponse {
    pub job_id: String,
    #[serde(flatten)]
    pub entry: JobEntry,
}
