use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventError {
    #[error("missing event ID")]
    MissingId,
}

/// An incoming event. Immutable once it has been added to a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub timestamp: i64,
    pub payload: String,
}

impl Event {
    pub fn new(id: impl Into<String>, timestamp: i64, payload: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            timestamp,
            payload: payload.into(),
        }
    }
}

/// Checks required fields and fills in a zero timestamp with `now` (epoch seconds).
pub fn validate(mut event: Event, now: i64) -> Result<Event, EventError> {
    if event.id.is_empty() {
        return Err(EventError::MissingId);
    }
    if event.timestamp == 0 {
        event.timestamp = now;
    }
    Ok(event)
}
