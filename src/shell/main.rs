use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{EnvFilter, fmt};

use event_processor::shared::infrastructure::event_bus::log_publisher::LogPublisher;
use event_processor::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use event_processor::shell::config::Config;
use event_processor::shell::http::router;
use event_processor::shell::state::AppState;
use event_processor::shell::workers::{shutdown, spawn_workers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();
    init_tracing(config.log_json);

    tracing::info!(?config, "starting event processor");

    let event_store = Arc::new(InMemoryEventStore::new(config.buffer_size.get()));
    let cancel = CancellationToken::new();

    let pool = spawn_workers(
        config.workers.get(),
        event_store.as_ref(),
        Arc::new(LogPublisher::new()),
        cancel.clone(),
    );

    let app = router(AppState::new(event_store.clone()), config.request_timeout());
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    tracing::info!(addr = %config.addr, "HTTP server listening");

    let server_cancel = cancel.clone();
    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(server_cancel.cancelled_owned())
            .await
    });

    match shutdown_signal().await {
        Ok(signal) => tracing::info!(signal, "received signal, initiating graceful shutdown"),
        Err(e) => tracing::error!(error = %e, "signal handling failed, shutting down"),
    }

    shutdown(
        &cancel,
        Some(server),
        event_store.as_ref(),
        pool,
        config.shutdown_timeout(),
    )
    .await;
    tracing::info!(stored = event_store.len().await, "application stopped");
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json {
        fmt().with_env_filter(filter).json().init();
    } else {
        fmt().with_env_filter(filter).init();
    }
}

#[cfg(unix)]
async fn shutdown_signal() -> anyhow::Result<&'static str> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = signal(SignalKind::terminate()).context("failed to install SIGTERM handler")?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result.context("failed to listen for ctrl-c")?;
            Ok("SIGINT")
        }
        _ = terminate.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() -> anyhow::Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for ctrl-c")?;
    Ok("ctrl-c")
}
