//! Time utilities: minute durations and time-of-day rendering.

use chrono::{DateTime, Local, Utc};

/// Placeholder shown for a timestamp that is not set.
pub const EMPTY_FIELD: &str = "—";

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Local time of day for a server timestamp, `—` when absent.
pub fn format_time_of_day(ts: Option<DateTime<Utc>>, fmt: &str) -> String {
    match ts {
        Some(t) => t.with_timezone(&Local).format(fmt).to_string(),
        None => EMPTY_FIELD.to_string(),
    }
}
