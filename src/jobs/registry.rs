//! Job Handler Registry
//!
//! Maps job names (e.g., "backfill") to the async closures that implement them, so
//! the queue and its worker stay unaware of what any particular job does.

use anyhow::Result;
use dashmap::DashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type-erased async job. Resolves to a JSON summary of the work done.
pub type JobHandlerFn = Arc<
    dyn Fn() -> Pin<Box<dyn Future<Output = Result<serde_json::Value>> + Send>> + Send + Sync,
>;

#[derive(Default)]
pub struct JobHandlerRegistry {
    handlers: DashMap<String, JobHandlerFn>,
}

impl JobHandlerRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Registers `handler` under `name`, replacing any previous handler with that name.
    pub fn register<F, Fut>(&self, name: &str, handler: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<serde_json::Value>> + Send + 'static,
    {
        let handler_fn: JobHandlerFn = Arc::new(move || {
            Box::pin(handler()) as Pin<Box<dyn Future<Output = Result<serde_json::Value>> + Send>>
        });

        self.handlers.insert(name.to_string(), handler_fn);

        tracing::info!("Registered job handler: {}", name);
    }

    /// Runs the handler registered under `name`.
    ///
    /// # Returns
    /// * `Ok(summary)` if the handler succeeded.
    /// * `Err` if the handler failed or no handler exists for `name`.
    pub async fn execute(&self, name: &str) -> Result<serde_json::Value> {
        // Clone out of the map so the shard lock is not held across the await.
        let handler_fn = self.handlers.get(name).map(|entry| entry.value().clone());

        match handler_fn {
            Some(handler_fn) => {
                tracing::debug!("Executing job handler '{}'", name);
                handler_fn().await
            }
            None => {
                let error = format!("Unknown job handler: {}", name);
                tracing::error!("{}", error);
                Err(anyhow::anyhow!(error))
            }
        }
    }

    pub fn list_handlers(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .handlers
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();
        names
    }

    pub fn has_handler(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}
