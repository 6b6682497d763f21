use chrono::{DateTime, Utc};

/// Current wall-clock time as epoch seconds.
pub fn now_unix() -> i64 {
    Utc::now().timestamp()
}

pub fn now() -> DateTime<Utc> {
    Utc::now()
}
