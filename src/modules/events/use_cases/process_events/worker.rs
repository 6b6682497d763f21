// A worker drains the shared event feed, upper-cases each payload and hands
// the result to the publisher. It stops when cancelled or when the feed
// closes; an event already received is always published before it stops.

use crate::modules::events::core::event::Event;
use crate::modules::events::core::transformed_event::transform;
use crate::shared::core::clock::now;
use crate::shared::infrastructure::event_bus::EventPublisher;
use crate::shared::infrastructure::event_store::EventFeed;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Cancelled,
    FeedClosed,
}

pub struct Worker<TPublisher>
where
    TPublisher: EventPublisher + ?Sized + 'static,
{
    id: String,
    feed: EventFeed,
    publisher: Arc<TPublisher>,
}

impl<TPublisher> Worker<TPublisher>
where
    TPublisher: EventPublisher + ?Sized + 'static,
{
    pub fn new(feed: EventFeed, publisher: Arc<TPublisher>) -> Self {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(8);
        Self::with_id(id, feed, publisher)
    }

    pub fn with_id(id: impl Into<String>, feed: EventFeed, publisher: Arc<TPublisher>) -> Self {
        Self {
            id: id.into(),
            feed,
            publisher,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub async fn run(self, cancel: CancellationToken) -> ExitReason {
        tracing::info!(worker_id = %self.id, "starting worker");
        loop {
            let event = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::info!(worker_id = %self.id, "worker shutting down");
                    return ExitReason::Cancelled;
                }
                next = self.feed.recv() => match next {
                    Some(event) => event,
                    None => {
                        tracing::info!(worker_id = %self.id, "event feed closed, worker shutting down");
                        return ExitReason::FeedClosed;
                    }
                },
            };
            self.process(event).await;
        }
    }

    async fn process(&self, event: Event) {
        let transformed = transform(&event, &self.id, now());
        if let Err(e) = self.publisher.publish(transformed).await {
            tracing::warn!(worker_id = %self.id, event_id = %event.id, error = %e, "publish failed");
        }
    }
}
