// Recording publisher for tests and local runs.
//
// Keeps every published event in arrival order. `toggle_offline` makes
// publishing fail so callers can exercise their error path.

use crate::modules::events::core::transformed_event::TransformedEvent;
use crate::shared::infrastructure::event_bus::{EventPublisher, PublishError};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryPublisher {
    published: Mutex<Vec<TransformedEvent>>,
    is_offline: bool,
}

impl InMemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn published(&self) -> Vec<TransformedEvent> {
        self.published.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.published.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait::async_trait]
impl EventPublisher for InMemoryPublisher {
    async fn publish(&self, event: TransformedEvent) -> Result<(), PublishError> {
        if self.is_offline {
            return Err(PublishError::Unavailable("Publisher offline".into()));
        }
        self.published.lock().await.push(event);
        Ok(())
    }
}
