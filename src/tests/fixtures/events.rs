// Shared test fixture for events. Compiled only under cfg(test).

use crate::modules::events::core::event::Event;

pub struct EventBuilder {
    inner: Event,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventBuilder {
    pub fn new() -> Self {
        Self {
            inner: Event {
                id: "event-fixed-0001".to_string(),
                timestamp: 1_700_000_000,
                payload: "test payload".to_string(),
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

    pub fn build(self) -> Event {
        self.inner
    }
}

#[cfg(test)]
mod event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let event = EventBuilder::new().id("e-1").timestamp(42).payload("p").build();
        assert_eq!(event, Event::new("e-1", 42, "p"));
    }

    #[rstest]
    fn default_delegates_to_new() {
        assert_eq!(EventBuilder::default().build(), EventBuilder::new().build());
    }
}
