use crate::modules::events::use_cases::ingest_event::handler::IngestEventHandler;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub event_store: Arc<dyn EventStore>,
    pub ingest_handler: Arc<IngestEventHandler<dyn EventStore>>,
}

impl AppState {
    pub fn new(event_store: Arc<dyn EventStore>) -> Self {
        let ingest_handler = Arc::new(IngestEventHandler::new(event_store.clone()));
        Self {
            event_store,
            ingest_handler,
        }
    }
}
