use crate::modules::events::use_cases::process_events::worker::Worker;
use crate::shared::infrastructure::event_bus::EventPublisher;
use crate::shared::infrastructure::event_store::EventFeed;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    Clean,
    /// Workers still running when the timeout elapsed. They are left to
    /// finish on their own.
    TimedOut { abandoned: usize },
}

pub struct WorkerPool {
    handles: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawns `count` workers on the same feed.
    pub fn start<TPublisher>(
        count: usize,
        feed: EventFeed,
        publisher: Arc<TPublisher>,
        cancel: CancellationToken,
    ) -> Self
    where
        TPublisher: EventPublisher + ?Sized + 'static,
    {
        let handles = (0..count)
            .map(|_| {
                let worker = Worker::new(feed.clone(), publisher.clone());
                let cancel = cancel.clone();
                tokio::spawn(async move {
                    let worker_id = worker.id().to_string();
                    let reason = worker.run(cancel).await;
                    tracing::debug!(worker_id = %worker_id, ?reason, "worker exited");
                })
            })
            .collect();
        Self { handles }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Waits for every worker to exit, giving up after `timeout`.
    pub async fn join(mut self, timeout: Duration) -> ShutdownOutcome {
        let all_done = tokio::time::timeout(timeout, async {
            for handle in self.handles.iter_mut() {
                if let Err(e) = handle.await {
                    tracing::error!(error = %e, "worker task failed");
                }
            }
        })
        .await;

        match all_done {
            Ok(()) => ShutdownOutcome::Clean,
            Err(_) => {
                let abandoned = self.handles.iter().filter(|h| !h.is_finished()).count();
                ShutdownOutcome::TimedOut { abandoned }
            }
        }
    }
}

#[cfg(test)]
mod worker_pool_tests {
    use super::*;
    use crate::modules::events::core::transformed_event::TransformedEvent;
    use crate::shared::infrastructure::event_bus::PublishError;
    use crate::shared::infrastructure::event_bus::in_memory::InMemoryPublisher;
    use crate::shared::infrastructure::event_store::EventStore;
    use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
    use crate::tests::fixtures::events::EventBuilder;
    use async_trait::async_trait;
    use rstest::rstest;
    use std::collections::HashSet;

    /// Never returns from `publish`, pinning its worker mid-event.
    struct StuckPublisher;

    #[async_trait]
    impl EventPublisher for StuckPublisher {
        async fn publish(&self, _event: TransformedEvent) -> Result<(), PublishError> {
            std::future::pending().await
        }
    }

    #[rstest]
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn it_should_process_each_event_exactly_once_across_workers() {
        let store = InMemoryEventStore::new(100);
        let publisher = Arc::new(InMemoryPublisher::new());
        let pool = WorkerPool::start(3, store.feed(), publisher.clone(), CancellationToken::new());
        assert_eq!(pool.len(), 3);

        for i in 0..50 {
            store
                .add(EventBuilder::new().id(format!("e{i}")).payload("abc").build())
                .await
                .unwrap();
        }
        store.close().await;

        assert_eq!(pool.join(Duration::from_secs(5)).await, ShutdownOutcome::Clean);
        let published = publisher.published().await;
        assert_eq!(published.len(), 50);
        let ids: HashSet<_> = published.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), 50);
        assert!(published.iter().all(|e| e.payload == "ABC"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_shut_down_cleanly_on_cancellation() {
        let store = InMemoryEventStore::new(10);
        let cancel = CancellationToken::new();
        let pool = WorkerPool::start(
            4,
            store.feed(),
            Arc::new(InMemoryPublisher::new()),
            cancel.clone(),
        );

        cancel.cancel();

        assert_eq!(pool.join(Duration::from_secs(1)).await, ShutdownOutcome::Clean);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_a_timeout_for_workers_that_do_not_finish() {
        let store = InMemoryEventStore::new(10);
        let cancel = CancellationToken::new();
        let pool = WorkerPool::start(2, store.feed(), Arc::new(StuckPublisher), cancel.clone());
        store.add(EventBuilder::new().id("stuck").build()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        cancel.cancel();
        store.close().await;

        assert_eq!(
            pool.join(Duration::from_millis(200)).await,
            ShutdownOutcome::TimedOut { abandoned: 1 }
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_join_an_empty_pool_immediately() {
        let store = InMemoryEventStore::new(1);
        let pool = WorkerPool::start(
            0,
            store.feed(),
            Arc::new(InMemoryPublisher::new()),
            CancellationToken::new(),
        );
        assert!(pool.is_empty());
        assert_eq!(pool.join(Duration::from_millis(10)).await, ShutdownOutcome::Clean);
    }
}
