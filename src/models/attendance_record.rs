use crate::core::calculator::worked;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One user's attendance for one calendar day, as returned by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "de_calendar_date")]
    pub date: NaiveDate, // ⇔ "YYYY-MM-DD" (or the date part of an ISO timestamp)
    #[serde(default)]
    pub check_in: Option<DateTime<Utc>>,
    #[serde(default)]
    pub break_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub break_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub check_out: Option<DateTime<Utc>>,
}

impl AttendanceRecord {
    /// Empty record for `date` (nothing stamped yet).
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: None,
            date,
            check_in: None,
            break_start: None,
            break_end: None,
            check_out: None,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Worked minutes for this day, break excluded.
    pub fn worked_minutes(&self) -> i64 {
        worked::worked_minutes(
            self.check_in,
            self.check_out,
            self.break_start,
            self.break_end,
        )
    }

    /// Worked time rendered as `HH:MM`.
    pub fn total_hours(&self) -> String {
        worked::total_hours(
            self.check_in,
            self.check_out,
            self.break_start,
            self.break_end,
        )
    }

    pub fn is_for(&self, day: NaiveDate) -> bool {
        self.date == day
    }
}

/// Accepts a plain `YYYY-MM-DD` or a full ISO timestamp and keeps only the
/// calendar date as written by the server (no timezone shift).
fn de_calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid calendar date '{raw}'")))
}

pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let head = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}
