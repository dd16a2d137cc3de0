//! Job Queue
//!
//! Tracks submitted maintenance jobs and hands their ids to the worker in
//! submission order. Status is kept in a `DashMap` so handlers can poll it while
//! the worker runs.

use super::types::*;
use crate::now_ms;

use anyhow::Result;
use dashmap::DashMap;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Finished jobs kept for status polling before the oldest are evicted.
pub const DEFAULT_FINISHED_RETENTION: usize = 100;

pub struct JobQueue {
    entries: DashMap<JobId, JobEntry>,
    sender: mpsc::UnboundedSender<JobId>,
    /// Finished job ids, oldest first.
    finished: Mutex<VecDeque<JobId>>,
    finished_retention: usize,
}

impl JobQueue {
    /// Creates the queue and the receiving end the `JobRunner` drains.
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<JobId>) {
        Self::with_retention(DEFAULT_FINISHED_RETENTION)
    }

    /// Like `new`, keeping at most `finished_retention` completed or failed jobs.
    pub fn with_retention(
        finished_retention: usize,
    ) -> (Arc<Self>, mpsc::UnboundedReceiver<JobId>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let queue = Arc::new(Self {
            entries: DashMap::new(),
            sender,
            finished: Mutex::new(VecDeque::new()),
            finished_retention,
        });
        (queue, receiver)
    }

    /// Records a pending job for `handler` and schedules it.
    pub fn submit(&self, handler: &str) -> Result<JobId> {
        let job_id = JobId::new();
        self.entries.insert(
            job_id.clone(),
            JobEntry {
                handler: handler.to_string(),
                status: JobStatus::Pending,
                created_at: now_ms(),
                finished_at: None,
            },
        );

        if let Err(e) = self.sender.send(job_id.clone()) {
            self.entries.remove(&job_id);
            return Err(anyhow::anyhow!("Job worker is not running: {}", e));
        }

        tracing::info!("Submitted job {} ({})", job_id.0, handler);
        Ok(job_id)
    }

    pub fn get(&self, job_id: &JobId) -> Option<JobEntry> {
        self.entries.get(job_id).map(|entry| entry.value().clone())
    }

    /// Marks a pending job as running and returns its handler name.
    pub fn start(&self, job_id: &JobId) -> Result<String> {
        let mut entry = self
            .entries
            .get_mut(job_id)
            .ok_or_else(|| anyhow::anyhow!("Job not found"))?;

        if entry.status != JobStatus::Pending {
            return Err(anyhow::anyhow!("Job {} is not pending", job_id.0));
        }

        entry.status = JobStatus::Running;
        Ok(entry.handler.clone())
    }

    /// Records the outcome of a finished job.
    pub fn complete(&self, job_id: &JobId, result: Result<serde_json::Value>) -> Result<()> {
        let mut entry = self
            .entries
            .get_mut(job_id)
            .ok_or_else(|| anyhow::anyhow!("Job not found"))?;

        entry.status = match result {
            Ok(summary) => JobStatus::Completed { summary },
            Err(e) => JobStatus::Failed {
                error: format!("{:#}", e),
            },
        };
        entry.finished_at = Some(now_ms());
        drop(entry);

        self.retire(job_id);
        Ok(())
    }

    /// Records `job_id` as finished and drops the oldest finished jobs beyond the limit.
    fn retire(&self, job_id: &JobId) {
        let Ok(mut finished) = self.finished.lock() else {
            tracing::error!("Finished-job list poisoned, skipping eviction");
            return;
        };

        finished.push_back(job_id.clone());
        while finished.len() > self.finished_retention {
            if let Some(oldest) = finished.pop_front() {
                self.entries.remove(&oldest);
                tracing::debug!("Evicted finished job {}", oldest.0);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
