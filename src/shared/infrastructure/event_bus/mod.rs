use async_trait::async_trait;
use thiserror::Error;

use crate::modules::events::core::transformed_event::TransformedEvent;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PublishError {
    #[error("publisher unavailable: {0}")]
    Unavailable(String),
}

/// Sink for processed events. Implementations must return promptly; the
/// calling worker does not pick up its next event until `publish` returns.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: TransformedEvent) -> Result<(), PublishError>;
}

pub mod in_memory;
pub mod log_publisher;
