// Command line client for exercising a running event processor.
//
// `smoke` posts a handful of events one by one and lists them back.
// `load` hammers POST /events from many concurrent clients and reports
// throughput, then checks /health.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing_subscriber::{EnvFilter, fmt};
use uuid::Uuid;

use event_processor::modules::events::core::event::Event;
use event_processor::shared::core::clock::now_unix;

const SMOKE_PAYLOADS: &[&str] = &[
    "Hello, world!",
    "Event processing is fun",
    "Cloud native applications",
    "Distributed systems",
    "Concurrent processing",
    "Microservices architecture",
    "Event-driven design",
    "Stream processing",
];

const LOAD_PAYLOADS: &[&str] = &[
    "small payload",
    "This is a medium sized payload with some more text to process",
    "This is a larger payload that contains more data to process and would take slightly more CPU time to transform. It simulates a more realistic event payload that might contain various fields and information that needs processing.",
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Vestibulum eget ligula eu lectus finibus condimentum. Mauris vestibulum iaculis eros, eu venenatis enim vehicula at. Integer nec orci in mi vulputate dictum quis in nisl. Nulla facilisi.",
];

#[derive(Parser)]
#[command(name = "load_client", about = "Exercise a running event processor over HTTP")]
struct Cli {
    /// Base URL of the event processor
    #[arg(long, env = "EVENT_PROCESSOR_URL", default_value = "http://localhost:8081", global = true)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Send a few events sequentially and list them back
    Smoke(SmokeArgs),
    /// Send many events concurrently and report throughput
    Load(LoadArgs),
}

#[derive(Args)]
struct SmokeArgs {
    #[arg(long, default_value_t = 20)]
    events: usize,

    /// Delay between requests in milliseconds
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,
}

#[derive(Args)]
struct LoadArgs {
    #[arg(long, default_value_t = 50)]
    clients: usize,

    #[arg(long, default_value_t = 100)]
    events_per_client: usize,

    /// Maximum number of requests in flight
    #[arg(long, default_value_t = 50)]
    max_in_flight: usize,

    /// Per-request timeout in milliseconds
    #[arg(long, default_value_t = 2000)]
    timeout_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct LoadSummary {
    succeeded: usize,
    failed: usize,
    elapsed: Duration,
}

impl LoadSummary {
    fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    fn percent(&self, count: usize) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        count as f64 * 100.0 / self.total() as f64
    }

    fn requests_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.total() as f64 / secs
    }
}

fn make_event(payloads: &[&str], n: usize) -> Event {
    Event::new(
        Uuid::now_v7().to_string(),
        now_unix(),
        payloads[n % payloads.len()],
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let base_url = cli.base_url.trim_end_matches('/').to_string();
    match cli.command {
        Command::Smoke(args) => smoke(&base_url, args).await,
        Command::Load(args) => load(&base_url, args).await,
    }
}

async fn smoke(base_url: &str, args: SmokeArgs) -> anyhow::Result<()> {
    let client = Client::builder().timeout(Duration::from_secs(5)).build()?;
    let events_url = format!("{base_url}/events");
    tracing::info!(events = args.events, url = %events_url, "starting smoke test");

    for n in 0..args.events {
        let event = make_event(SMOKE_PAYLOADS, n);
        match client.post(&events_url).json(&event).send().await {
            Ok(response) if response.status() == StatusCode::CREATED => {
                tracing::info!(event_id = %event.id, "event sent");
            }
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                tracing::warn!(event_id = %event.id, %status, %body, "event rejected");
            }
            Err(e) => tracing::warn!(event_id = %event.id, error = %e, "request failed"),
        }
        tokio::time::sleep(Duration::from_millis(args.delay_ms)).await;
    }

    let events: Vec<Event> = client
        .get(&events_url)
        .send()
        .await
        .context("failed to list events")?
        .error_for_status()?
        .json()
        .await
        .context("failed to decode events")?;

    tracing::info!(count = events.len(), "retrieved events");
    for (i, event) in events.iter().enumerate() {
        println!("{}. ID: {}, Payload: {}", i + 1, event.id, event.payload);
    }
    Ok(())
}

async fn load(base_url: &str, args: LoadArgs) -> anyhow::Result<()> {
    let client = Client::builder()
        .timeout(Duration::from_millis(args.timeout_ms))
        .build()?;
    let events_url = format!("{base_url}/events");
    tracing::info!(
        clients = args.clients,
        events_per_client = args.events_per_client,
        "starting load test"
    );

    let succeeded = Arc::new(AtomicUsize::new(0));
    let failed = Arc::new(AtomicUsize::new(0));
    let in_flight = Arc::new(Semaphore::new(args.max_in_flight.max(1)));
    let started = Instant::now();

    let tasks: Vec<_> = (0..args.clients)
        .map(|client_id| {
            let client = client.clone();
            let events_url = events_url.clone();
            let succeeded = succeeded.clone();
            let failed = failed.clone();
            let in_flight = in_flight.clone();
            let events_per_client = args.events_per_client;
            tokio::spawn(async move {
                for n in 0..events_per_client {
                    let Ok(_permit) = in_flight.acquire().await else {
                        return;
                    };
                    let event = make_event(LOAD_PAYLOADS, n);
                    match client.post(&events_url).json(&event).send().await {
                        Ok(response) if response.status() == StatusCode::CREATED => {
                            succeeded.fetch_add(1, Ordering::Relaxed);
                        }
                        Ok(response) => {
                            tracing::warn!(client_id, status = %response.status(), "failed response");
                            failed.fetch_add(1, Ordering::Relaxed);
                        }
                        Err(e) => {
                            tracing::warn!(client_id, error = %e, "request error");
                            failed.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                }
            })
        })
        .collect();

    for task in tasks {
        task.await.context("client task panicked")?;
    }

    let summary = LoadSummary {
        succeeded: succeeded.load(Ordering::Relaxed),
        failed: failed.load(Ordering::Relaxed),
        elapsed: started.elapsed(),
    };
    println!("=== Load Test Results ===");
    println!("Duration: {:.2} seconds", summary.elapsed.as_secs_f64());
    println!("Total Requests: {}", summary.total());
    println!(
        "Successful Requests: {} ({:.2}%)",
        summary.succeeded,
        summary.percent(summary.succeeded)
    );
    println!(
        "Failed Requests: {} ({:.2}%)",
        summary.failed,
        summary.percent(summary.failed)
    );
    println!("Requests per Second: {:.2}", summary.requests_per_second());
    println!("=========================");

    match client.get(format!("{base_url}/health")).send().await {
        Ok(response) if response.status() == StatusCode::OK => tracing::info!("server health: OK"),
        Ok(response) => tracing::warn!(status = %response.status(), "server health: NOT OK"),
        Err(e) => tracing::warn!(error = %e, "error checking server health"),
    }
    Ok(())
}
