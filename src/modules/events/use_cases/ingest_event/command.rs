use crate::modules::events::core::event::Event;

/// Request to store a new event. `timestamp` of 0 means "not supplied".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestEvent {
    pub id: String,
    pub timestamp: i64,
    pub payload: String,
}

impl From<IngestEvent> for Event {
    fn from(command: IngestEvent) -> Self {
        Event::new(command.id, command.timestamp, command.payload)
    }
}
