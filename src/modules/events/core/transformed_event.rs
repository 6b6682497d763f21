use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::events::core::event::Event;

/// Result of processing an [`Event`]. Never stored; handed straight to a publisher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformedEvent {
    pub id: String,
    pub original_time: i64,
    pub processed_at: DateTime<Utc>,
    pub payload: String,
    pub processor_id: String,
}

pub fn transform(event: &Event, processor_id: &str, processed_at: DateTime<Utc>) -> TransformedEvent {
    TransformedEvent {
        id: event.id.clone(),
        original_time: event.timestamp,
        processed_at,
        payload: simple_uppercase(&event.payload),
        processor_id: processor_id.to_string(),
    }
}

/// Unicode simple (1:1) upper-case mapping.
fn simple_uppercase(input: &str) -> String {
    input.chars().map(simple_uppercase_char).collect()
}

fn simple_uppercase_char(c: char) -> char {
    // Greek iota subscript forms: the full mapping splits them into two
    // letters, the simple mapping goes to the matching iota adscript form.
    let simple = match c {
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(c as u32 + 8)
        }
        '\u{1FB3}' => Some('\u{1FBC}'),
        '\u{1FC3}' => Some('\u{1FCC}'),
        '\u{1FF3}' => Some('\u{1FFC}'),
        _ => None,
    };
    if let Some(upper) = simple {
        return upper;
    }

    // Everywhere else the full mapping is either a single char equal to the
    // simple one, or an expansion whose simple mapping is the char itself.
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
