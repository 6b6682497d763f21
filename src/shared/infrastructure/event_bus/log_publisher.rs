use async_trait::async_trait;

use crate::modules::events::core::transformed_event::TransformedEvent;
use crate::shared::infrastructure::event_bus::{EventPublisher, PublishError};

/// Publishes by emitting one log record per event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPublisher;

impl LogPublisher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: TransformedEvent) -> Result<(), PublishError> {
        tracing::info!(
            target: "event_processor::published",
            worker_id = %event.processor_id,
            event_id = %event.id,
            original_time = event.original_time,
            processed_at = %event.processed_at.to_rfc3339(),
            payload = %event.payload,
            "[PUBLISHED] worker {} processed event {}",
            event.processor_id,
            event.id,
        );
        Ok(())
    }
}
