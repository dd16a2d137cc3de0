use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    Extension, Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};
use tracing::info;

use crate::backfill;
use crate::jobs::handlers::{handle_job_status, handle_submit_job};
use crate::jobs::queue::JobQueue;
use crate::jobs::registry::JobHandlerRegistry;
use crate::jobs::runner::JobRunner;
use crate::recipes::handlers::{
    handle_create_recipe, handle_delete_recipe, handle_get_recipe, handle_update_recipe,
};
use crate::search::handlers::handle_search;
use crate::storage::RecipeStore;

pub fn build_router(
    store: Arc<RecipeStore>,
    queue: Arc<JobQueue>,
    registry: Arc<JobHandlerRegistry>,
) -> Router {
    Router::new()
        .route("/recipes", get(handle_search).post(handle_create_recipe))
        .route(
            "/recipes/:id",
            get(handle_get_recipe)
                .put(handle_update_recipe)
                .delete(handle_delete_recipe),
        )
        .route("/admin/jobs", post(handle_submit_job))
        .route("/admin/jobs/:id", get(handle_job_status))
        .layer(Extension(store))
        .layer(Extension(queue))
        .layer(Extension(registry))
}

/// Starts the HTTP server and the maintenance job worker; returns on Ctrl+C or SIGTERM.
pub async fn serve(
    store: Arc<RecipeStore>,
    bind_addr: SocketAddr,
    flush_interval: Duration,
) -> Result<()> {
    let registry = JobHandlerRegistry::new();
    backfill::register(&registry, store.clone());

    let (queue, receiver) = JobQueue::new();
    let runner = JobRunner::new(queue.clone(), registry.clone());
    let worker = runner.start(receiver);

    let flusher = spawn_snapshot_flusher(store.clone(), flush_interval);

    let app = build_router(store.clone(), queue, registry);

    info!("Binding to {bind_addr}");
    let listener = TcpListener::bind(bind_addr).await?;
    info!("Server running on {bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    worker.abort();
    flusher.abort();
    tokio::task::spawn_blocking(move || store.flush_if_dirty()).await??;
    info!("Server shut down");
    Ok(())
}

/// Periodically writes deferred store changes to the snapshot file.
pub fn spawn_snapshot_flusher(store: Arc<RecipeStore>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let store = store.clone();
            match tokio::task::spawn_blocking(move || store.flush_if_dirty()).await {
                Ok(Ok(true)) => tracing::debug!("Flushed deferred recipe changes"),
                Ok(Ok(false)) => {}
                Ok(Err(e)) => tracing::error!("Snapshot flush failed: {:#}", e),
                Err(e) => tracing::error!("Snapshot flush task failed: {}", e),
            }
        }
    })
}

async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => {},
        _ = terminate => {},
    }
}
