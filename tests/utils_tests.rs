mod common;
use common::temp_file;

use chrono::{NaiveDate, TimeZone, Utc};
use rattendance::core::activity::{self, ActivityEntry};
use rattendance::errors::AppError;
use rattendance::utils::colors::colorize_in_out;
use rattendance::utils::date::{
    self, format_calendar_date, format_server_date, last_day_of_month, parse_instant, resolve_period,
};
use rattendance::utils::formatting::strip_ansi;
use rattendance::utils::table::{Column, Table};
use rattendance::utils::time::{format_minutes, format_time_of_day};
use std::fs;
use std::path::Path;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

#[test]
fn test_period_single_day() {
    assert_eq!(
        resolve_period("2025-03-10").expect("day"),
        (d(2025, 3, 10), d(2025, 3, 10))
    );
}

#[test]
fn test_period_month_and_year() {
    assert_eq!(
        resolve_period("2024-02").expect("month"),
        (d(2024, 2, 1), d(2024, 2, 29))
    );
    assert_eq!(
        resolve_period("2025").expect("year"),
        (d(2025, 1, 1), d(2025, 12, 31))
    );
}

#[test]
fn test_period_range() {
    assert_eq!(
        resolve_period("2025-01:2025-03").expect("range"),
        (d(2025, 1, 1), d(2025, 3, 31))
    );
    assert_eq!(
        resolve_period("2025-03-01:2025-03-15").expect("range"),
        (d(2025, 3, 1), d(2025, 3, 15))
    );
}

#[test]
fn test_period_errors() {
    assert!(matches!(
        resolve_period("2025-03-15:2025-03-01"),
        Err(AppError::InvalidPeriod(_))
    ));
    assert!(matches!(resolve_period("march"), Err(AppError::InvalidPeriod(_))));
    assert!(matches!(resolve_period("2025-02-30"), Err(AppError::InvalidPeriod(_))));
}

#[test]
fn test_last_day_of_month() {
    assert_eq!(last_day_of_month(2025, 12), Some(d(2025, 12, 31)));
    assert_eq!(last_day_of_month(2023, 2), Some(d(2023, 2, 28)));
}

#[test]
fn test_time_helpers() {
    assert_eq!(format_minutes(495), "08:15");
    assert_eq!(format_minutes(0), "00:00");
    assert_eq!(format_minutes(-5), "-00:05");
    assert_eq!(format_time_of_day(None, "%H:%M"), "—");
    assert_eq!(format_calendar_date(d(2025, 3, 10)), "10/03/2025");
}

#[test]
fn test_table_aligns_coloured_cells() {
    let mut table = Table::new(vec![Column::new("Date"), Column::new("In")]);
    table.add_row(vec!["10/03/2025".to_string(), colorize_in_out("09:00", true)]);
    table.add_row(vec!["11/03/2025".to_string(), colorize_in_out("—", true)]);

    let plain = strip_ansi(&table.render());
    let lines: Vec<&str> = plain.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Date       In    ");
    assert_eq!(lines[1], "---------- ----- ");
    assert_eq!(lines[2], "10/03/2025 09:00 ");
    assert_eq!(lines[3], "11/03/2025 —     ");
}

#[test]
fn test_activity_log_appends_and_reads_back() {
    let path = temp_file("activity_roundtrip", "log");
    let path = Path::new(&path);

    activity::ttlog(path, "login", "u-1", "Session started").expect("log login");
    activity::ttlog(path, "checkin", "", "Checked in at 09:00").expect("log checkin");

    let entries = activity::read_entries(path).expect("read");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].operation, "login");
    assert_eq!(entries[1].message, "Checked in at 09:00");

    let lines = activity::render(&entries);
    assert!(strip_ansi(&lines[0]).contains("login (u-1)"));
    assert!(strip_ansi(&lines[1]).ends_with("=> Checked in at 09:00"));
}

#[test]
fn test_activity_log_skips_garbage_lines() {
    let path = temp_file("activity_garbage", "log");
    let entry = ActivityEntry {
        date: "2025-03-10T09:00:00+01:00".to_string(),
        operation: "logout".to_string(),
        target: String::new(),
        message: "Session ended".to_string(),
    };
    let body = format!(
        "not json\n\n{}\n",
        serde_json::to_string(&entry).expect("encode")
    );
    fs::write(&path, body).expect("write");

    let entries = activity::read_entries(Path::new(&path)).expect("read");
    assert_eq!(entries, vec![entry]);
}

#[test]
fn test_missing_activity_log_is_empty() {
    let path = temp_file("activity_missing", "log");
    assert!(activity::read_entries(Path::new(&path)).expect("read").is_empty());
}

#[test]
fn test_user_message_prefers_server_text() {
    let with = AppError::Remote {
        status: 400,
        message: Some("Already checked out".to_string()),
    };
    let without = AppError::Remote {
        status: 500,
        message: None,
    };
    assert_eq!(with.user_message("fallback"), "Already checked out");
    assert_eq!(without.user_message("fallback"), "fallback");
    assert_eq!(
        AppError::Other("boom".to_string()).user_message("fallback"),
        "fallback"
    );
    assert!(AppError::Unauthorized("expired".to_string()).is_unauthorized());
}

#[test]
fn test_today_is_the_utc_calendar_day() {
    // record dates are written as UTC calendar days
    let before = Utc::now().date_naive();
    let today = date::today();
    let after = Utc::now().date_naive();
    assert!(today == before || today == after);
}

#[test]
fn test_parse_instant_accepts_timestamps_and_bare_dates() {
    let noon = Utc
        .with_ymd_and_hms(2025, 3, 31, 12, 0, 0)
        .single()
        .expect("valid timestamp");
    assert_eq!(parse_instant("2025-03-31T12:00:00.000Z"), Some(noon));
    assert_eq!(parse_instant("2025-03-31T14:00:00+02:00"), Some(noon));
    assert_eq!(
        parse_instant("2025-03-31").map(|t| t.date_naive()),
        Some(d(2025, 3, 31))
    );
    assert_eq!(parse_instant("soon"), None);
}

#[test]
fn test_format_server_date() {
    assert_eq!(format_server_date(Some("2025-03-31T23:00:00Z")), "31/03/2025");
    assert_eq!(format_server_date(None), "—");
    assert_eq!(format_server_date(Some("n/a")), "—");
}
