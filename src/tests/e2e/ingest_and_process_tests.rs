use crate::modules::events::use_cases::ingest_event::handler::{
    ApplicationError, IngestEventHandler,
};
use crate::modules::events::use_cases::process_events::pool::ShutdownOutcome;
use crate::shared::core::clock::{now, now_unix};
use crate::shared::infrastructure::event_bus::in_memory::InMemoryPublisher;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use crate::shell::workers::{shutdown, spawn_workers};
use crate::tests::fixtures::commands::IngestEventBuilder;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn ingests_looks_up_and_rejects_duplicates() {
    let store = Arc::new(InMemoryEventStore::new(10));
    let handler = IngestEventHandler::new(store.clone());
    let before = now_unix();

    handler
        .handle(IngestEventBuilder::new().id("e1").timestamp(0).payload("hello").build())
        .await
        .unwrap();

    let stored = store.get("e1").await.unwrap();
    assert_eq!(stored.payload, "hello");
    assert!(stored.timestamp >= before);

    let duplicate = handler
        .handle(IngestEventBuilder::new().id("e1").payload("x").build())
        .await;
    assert_eq!(
        duplicate,
        Err(ApplicationError::Store(EventStoreError::DuplicateId("e1".into())))
    );
    assert_eq!(store.get("e1").await.unwrap().payload, "hello");

    assert_eq!(
        store.get("missing").await,
        Err(EventStoreError::NotFound("missing".into()))
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn ingested_events_are_processed_by_the_pool_and_shutdown_is_clean() {
    let store = Arc::new(InMemoryEventStore::new(100));
    let publisher = Arc::new(InMemoryPublisher::new());
    let cancel = CancellationToken::new();
    let pool = spawn_workers(3, store.as_ref(), publisher.clone(), cancel.clone());
    let handler = IngestEventHandler::new(store.clone());
    let started = now();

    for i in 0..20 {
        handler
            .handle(
                IngestEventBuilder::new()
                    .id(format!("e{i}"))
                    .payload(format!("payload {i}"))
                    .build(),
            )
            .await
            .unwrap();
    }

    tokio::time::timeout(Duration::from_secs(5), async {
        while publisher.len().await < 20 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("workers did not drain the feed");

    let outcome = shutdown(&cancel, None, store.as_ref(), pool, Duration::from_secs(2)).await;
    assert_eq!(outcome, ShutdownOutcome::Clean);

    let published = publisher.published().await;
    assert_eq!(published.len(), 20);
    for transformed in &published {
        let source = store.get(&transformed.id).await.unwrap();
        assert_eq!(transformed.payload, source.payload.to_uppercase());
        assert_eq!(transformed.original_time, source.timestamp);
        assert!(transformed.processed_at >= started);
        assert!(!transformed.processor_id.is_empty());
    }
    assert_eq!(store.get_all().await.len(), 20);
}
