// In memory implementation of the EventStore port.
//
// The map and the feed sender sit behind one RwLock. Adds take the write
// lock, so the duplicate check, the insert and the hand-off happen as one
// step. tokio's RwLock queues readers and writers fairly.

use crate::modules::events::core::event::Event;
use crate::shared::infrastructure::event_store::{EventFeed, EventStore, EventStoreError};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tokio::sync::mpsc::{self, error::TrySendError};

struct Inner {
    events: HashMap<String, Event>,
    sender: Option<mpsc::Sender<Event>>,
}

pub struct InMemoryEventStore {
    inner: RwLock<Inner>,
    feed: EventFeed,
}

impl InMemoryEventStore {
    /// `buffer_size` is the capacity of the hand-off queue; 0 is treated as 1.
    pub fn new(buffer_size: usize) -> Self {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        Self {
            inner: RwLock::new(Inner {
                events: HashMap::new(),
                sender: Some(sender),
            }),
            feed: EventFeed::new(receiver),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.events.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn add(&self, event: Event) -> Result<(), EventStoreError> {
        if event.id.is_empty() {
            return Err(EventStoreError::MissingId);
        }

        let mut inner = self.inner.write().await;
        let Some(sender) = inner.sender.clone() else {
            return Err(EventStoreError::Closed);
        };
        if inner.events.contains_key(&event.id) {
            return Err(EventStoreError::DuplicateId(event.id));
        }

        inner.events.insert(event.id.clone(), event.clone());
        match sender.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                tracing::debug!(event_id = %event.id, "feed full, hand-off dropped");
            }
            Err(TrySendError::Closed(event)) => {
                tracing::debug!(event_id = %event.id, "feed receiver gone, hand-off dropped");
            }
        }
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Event, EventStoreError> {
        self.inner
            .read()
            .await
            .events
            .get(id)
            .cloned()
            .ok_or_else(|| EventStoreError::NotFound(id.to_string()))
    }

    async fn get_all(&self) -> Vec<Event> {
        self.inner.read().await.events.values().cloned().collect()
    }

    fn feed(&self) -> EventFeed {
        self.feed.clone()
    }

    async fn close(&self) {
        let mut inner = self.inner.write().await;
        if inner.sender.take().is_none() {
            tracing::debug!("event store already closed");
            return;
        }
        tracing::info!(stored = inner.events.len(), "event store closed");
    }
}
