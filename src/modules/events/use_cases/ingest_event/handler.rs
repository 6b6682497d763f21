use crate::modules::events::core::event::{EventError, validate};
use crate::modules::events::use_cases::ingest_event::command::IngestEvent;
use crate::shared::core::clock::now_unix;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] EventError),

    #[error(transparent)]
    Store(#[from] EventStoreError),
}

pub struct IngestEventHandler<TEventStore>
where
    TEventStore: EventStore + ?Sized + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> IngestEventHandler<TEventStore>
where
    TEventStore: EventStore + ?Sized + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    /// Validates and stores the event, returning its ID.
    pub async fn handle(&self, command: IngestEvent) -> Result<String, ApplicationError> {
        let event = validate(command.into(), now_unix())?;
        let id = event.id.clone();
        self.event_store.add(event).await?;
        tracing::info!(event_id = %id, "received event");
        Ok(id)
    }
}
