//! Worked-time computation for one attendance day.
//!
//! Shared by the today panel and every history row. Rules:
//! - a missing check-in or check-out means nothing was worked;
//! - a break is only subtracted when its end is strictly after its start;
//! - a non-positive total collapses to zero;
//! - seconds are truncated, never rounded.

use crate::utils::time::format_minutes;
use chrono::{DateTime, TimeZone};

const MS_PER_MINUTE: i64 = 60_000;

/// Whole minutes worked between check-in and check-out, minus the break.
pub fn worked_minutes<Tz: TimeZone>(
    check_in: Option<DateTime<Tz>>,
    check_out: Option<DateTime<Tz>>,
    break_start: Option<DateTime<Tz>>,
    break_end: Option<DateTime<Tz>>,
) -> i64 {
    let (Some(start), Some(end)) = (check_in, check_out) else {
        return 0;
    };

    let mut total_ms = (end - start).num_milliseconds();

    if let (Some(bs), Some(be)) = (break_start, break_end) {
        let break_ms = (be - bs).num_milliseconds();
        if break_ms > 0 {
            total_ms -= break_ms;
        }
    }

    if total_ms <= 0 {
        return 0;
    }

    total_ms / MS_PER_MINUTE
}

/// Same as [`worked_minutes`], rendered as zero-padded `HH:MM`.
pub fn total_hours<Tz: TimeZone>(
    check_in: Option<DateTime<Tz>>,
    check_out: Option<DateTime<Tz>>,
    break_start: Option<DateTime<Tz>>,
    break_end: Option<DateTime<Tz>>,
) -> String {
    format_minutes(worked_minutes(check_in, check_out, break_start, break_end))
}
