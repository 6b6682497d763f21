use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, mpsc};

use crate::modules::events::core::event::Event;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventStoreError {
    #[error("missing event ID")]
    MissingId,

    #[error("duplicate event ID: {0}")]
    DuplicateId(String),

    #[error("event not found: {0}")]
    NotFound(String),

    #[error("event store is closed")]
    Closed,
}

#[async_trait]
pub trait EventStore: Send + Sync {
    /// Stores the event and offers it to the feed. A full feed drops the
    /// hand-off silently; the event is still stored.
    async fn add(&self, event: Event) -> Result<(), EventStoreError>;

    async fn get(&self, id: &str) -> Result<Event, EventStoreError>;

    /// Snapshot of every stored event, in no particular order.
    async fn get_all(&self) -> Vec<Event>;

    fn feed(&self) -> EventFeed;

    /// Closes the feed. Calling it again has no effect.
    async fn close(&self);
}

/// Consumer side of the hand-off queue. Clones share one queue, so each
/// event is delivered to exactly one of them.
#[derive(Clone)]
pub struct EventFeed {
    receiver: Arc<Mutex<mpsc::Receiver<Event>>>,
}

impl EventFeed {
    pub fn new(receiver: mpsc::Receiver<Event>) -> Self {
        Self {
            receiver: Arc::new(Mutex::new(receiver)),
        }
    }

    /// Waits for the next event. Returns `None` once the feed is closed and
    /// drained; every later call returns `None` immediately.
    pub async fn recv(&self) -> Option<Event> {
        self.receiver.lock().await.recv().await
    }
}

pub mod in_memory;
