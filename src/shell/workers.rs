use crate::modules::events::use_cases::process_events::pool::{ShutdownOutcome, WorkerPool};
use crate::shared::infrastructure::event_bus::EventPublisher;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// The spawned HTTP server, resolving once its graceful shutdown completes.
pub type ServerHandle = JoinHandle<std::io::Result<()>>;

pub fn spawn_workers(
    count: usize,
    event_store: &dyn EventStore,
    publisher: Arc<dyn EventPublisher>,
    cancel: CancellationToken,
) -> WorkerPool {
    let pool = WorkerPool::start(count, event_store.feed(), publisher, cancel);
    tracing::info!(workers = pool.len(), "worker pool started");
    pool
}

/// Stops everything in order: signal cancellation, let the HTTP server drain,
/// close the store (which closes the feed), then wait for the pool. `timeout`
/// bounds the whole sequence, not each step.
pub async fn shutdown(
    cancel: &CancellationToken,
    server: Option<ServerHandle>,
    event_store: &dyn EventStore,
    pool: WorkerPool,
    timeout: Duration,
) -> ShutdownOutcome {
    let deadline = Instant::now() + timeout;
    cancel.cancel();

    if let Some(server) = server {
        match tokio::time::timeout_at(deadline, server).await {
            Ok(Ok(Ok(()))) => tracing::info!("HTTP server stopped"),
            Ok(Ok(Err(e))) => tracing::error!(error = %e, "HTTP server error"),
            Ok(Err(e)) => tracing::error!(error = %e, "HTTP server task failed"),
            Err(_) => tracing::warn!("HTTP server did not stop in time"),
        }
    }

    event_store.close().await;

    let outcome = pool
        .join(deadline.saturating_duration_since(Instant::now()))
        .await;
    match outcome {
        ShutdownOutcome::Clean => tracing::info!("all workers shut down successfully"),
        ShutdownOutcome::TimedOut { abandoned } => {
            tracing::warn!(abandoned, "shutdown timed out, abandoning remaining workers")
        }
    }
    outcome
}
