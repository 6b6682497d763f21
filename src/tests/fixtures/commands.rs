// Shared test fixture for the IngestEvent command. Compiled only under cfg(test).

use crate::modules::events::use_cases::ingest_event::command::IngestEvent;
use crate::tests::fixtures::events::EventBuilder;

pub struct IngestEventBuilder {
    inner: IngestEvent,
}

impl Default for IngestEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl IngestEventBuilder {
    pub fn new() -> Self {
        let event = EventBuilder::new().build();
        Self {
            inner: IngestEvent {
                id: event.id,
                timestamp: event.timestamp,
                payload: event.payload,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn timestamp(mut self, v: i64) -> Self {
        self.inner.timestamp = v;
        self
    }

    pub fn payload(mut self, v: impl Into<String>) -> Self {
        self.inner.payload = v.into();
        self
    }

    pub fn build(self) -> IngestEvent {
        self.inner
    }
}
