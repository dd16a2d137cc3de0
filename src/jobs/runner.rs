//! Job Worker
//!
//! Drains the job queue with a single worker, one job at a time. Running jobs
//! strictly in sequence keeps maintenance passes such as the backfill from ever
//! overlapping with themselves.

use super::queue::JobQueue;
use super::registry::JobHandlerRegistry;
use super::types::JobId;

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct JobRunner {
    queue: Arc<JobQueue>,
    handlers: Arc<JobHandlerRegistry>,
}

impl JobRunner {
    pub fn new(queue: Arc<JobQueue>, handlers: Arc<JobHandlerRegistry>) -> Arc<Self> {
        Arc::new(Self { queue, handlers })
    }

    /// Spawns the worker. It exits once every `JobQueue` sender has been dropped.
    pub fn start(self: Arc<Self>, receiver: mpsc::UnboundedReceiver<JobId>) -> JoinHandle<()> {
        tracing::info!(
            "Starting job worker ({} handlers registered)",
            self.handlers.handler_count()
        );

        tokio::spawn(async move {
            self.worker_loop(receiver).await;
        })
    }

    async fn worker_loop(&self, mut receiver: mpsc::UnboundedReceiver<JobId>) {
        while let Some(job_id) = receiver.recv().await {
            self.run_job(&job_id).await;
        }

        tracing::info!("Job worker stopped");
    }

    /// Claims, executes and finalizes a single job.
    pub async fn run_job(&self, job_id: &JobId) {
        let handler = match self.queue.start(job_id) {
            Ok(handler) => handler,
            Err(e) => {
                tracing::warn!("Skipping job {}: {}", job_id.0, e);
                return;
            }
        };

        tracing::info!("Running job {} ({})", job_id.0, handler);
        let result = self.handlers.execute(&handler).await;

        if let Err(e) = &result {
            tracing::error!("Job {} ({}) failed: {:#}", job_id.0, handler, e);
        }

        match self.queue.complete(job_id, result) {
            Ok(()) => tracing::debug!("Job {} finalized", job_id.0),
            Err(e) => tracing::error!("Failed to finalize job {}: {}", job_id.0, e),
        }
    }
}
