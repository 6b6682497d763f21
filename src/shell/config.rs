use clap::Parser;
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "event_processor", about = "Ingests events over HTTP and processes them in the background")]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "EVENT_PROCESSOR_ADDR", default_value = "0.0.0.0:8081")]
    pub addr: SocketAddr,

    /// Number of background workers
    #[arg(long, env = "EVENT_PROCESSOR_WORKERS", default_value = "3")]
    pub workers: NonZeroUsize,

    /// Capacity of the hand-off queue between the store and the workers
    #[arg(long, env = "EVENT_PROCESSOR_BUFFER_SIZE", default_value = "100")]
    pub buffer_size: NonZeroUsize,

    /// Seconds to wait for workers to stop before giving up
    #[arg(long, env = "EVENT_PROCESSOR_SHUTDOWN_TIMEOUT_SECS", default_value_t = 10)]
    pub shutdown_timeout_secs: u64,

    /// Seconds an HTTP request may take before it is answered with 408
    #[arg(long, env = "EVENT_PROCESSOR_REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    pub request_timeout_secs: u64,

    /// Emit logs as JSON
    #[arg(long, env = "LOG_JSON")]
    pub log_json: bool,
}

impl Config {
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
