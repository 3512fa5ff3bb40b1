mod common;
use common::{at, at_s, day};

use chrono::{FixedOffset, TimeZone};
use rattendance::core::calculator::worked::{total_hours, worked_minutes};
use rattendance::models::attendance_record::AttendanceRecord;

#[test]
fn test_full_day_without_break() {
    assert_eq!(total_hours(Some(at(9, 0)), Some(at(17, 30)), None, None), "08:30");
}

#[test]
fn test_break_is_subtracted() {
    let out = total_hours(
        Some(at(9, 0)),
        Some(at(18, 0)),
        Some(at(13, 0)),
        Some(at(13, 45)),
    );
    assert_eq!(out, "08:15");
}

#[test]
fn test_inverted_break_is_ignored() {
    let out = total_hours(
        Some(at(9, 0)),
        Some(at(17, 0)),
        Some(at(13, 45)),
        Some(at(13, 0)),
    );
    assert_eq!(out, "08:00");
}

#[test]
fn test_zero_length_break_is_ignored() {
    let out = total_hours(
        Some(at(9, 0)),
        Some(at(17, 0)),
        Some(at(12, 0)),
        Some(at(12, 0)),
    );
    assert_eq!(out, "08:00");
}

#[test]
fn test_missing_check_in_yields_zero() {
    assert_eq!(total_hours(None, Some(at(17, 0)), None, None), "00:00");
    assert_eq!(
        total_hours(None, Some(at(17, 0)), Some(at(12, 0)), Some(at(13, 0))),
        "00:00"
    );
}

#[test]
fn test_missing_check_out_yields_zero_regardless_of_break() {
    assert_eq!(
        total_hours(Some(at(9, 0)), None, Some(at(12, 0)), Some(at(13, 0))),
        "00:00"
    );
}

#[test]
fn test_half_open_break_is_not_subtracted() {
    assert_eq!(
        total_hours(Some(at(9, 0)), Some(at(17, 0)), Some(at(12, 0)), None),
        "08:00"
    );
}

#[test]
fn test_check_out_equal_to_check_in_is_zero() {
    assert_eq!(total_hours(Some(at(9, 0)), Some(at(9, 0)), None, None), "00:00");
}

#[test]
fn test_check_out_before_check_in_collapses_to_zero() {
    assert_eq!(total_hours(Some(at(17, 0)), Some(at(9, 0)), None, None), "00:00");
    assert_eq!(worked_minutes(Some(at(17, 0)), Some(at(9, 0)), None, None), 0);
}

#[test]
fn test_break_longer_than_span_collapses_to_zero() {
    let out = total_hours(
        Some(at(9, 0)),
        Some(at(10, 0)),
        Some(at(8, 0)),
        Some(at(11, 0)),
    );
    assert_eq!(out, "00:00");
}

#[test]
fn test_seconds_are_truncated_not_rounded() {
    assert_eq!(
        total_hours(Some(at(9, 0)), Some(at_s(17, 29, 59)), None, None),
        "08:29"
    );
    assert_eq!(
        total_hours(Some(at(9, 0)), Some(at_s(9, 0, 59)), None, None),
        "00:00"
    );
}

#[test]
fn test_same_inputs_same_output() {
    let args = (
        Some(at(8, 12)),
        Some(at(16, 47)),
        Some(at(12, 5)),
        Some(at(12, 40)),
    );
    let first = total_hours(args.0, args.1, args.2, args.3);
    let _other = total_hours(Some(at(1, 0)), Some(at(2, 0)), None, None);
    let second = total_hours(args.0, args.1, args.2, args.3);
    assert_eq!(first, second);
    assert_eq!(first, "08:00");
}

#[test]
fn test_minutes_match_hhmm() {
    let mins = worked_minutes(Some(at(9, 0)), Some(at(18, 0)), Some(at(13, 0)), Some(at(13, 45)));
    assert_eq!(mins, 8 * 60 + 15);
}

#[test]
fn test_works_across_offsets() {
    let plus_two = FixedOffset::east_opt(2 * 3600).expect("offset");
    let check_in = plus_two.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).single();
    let check_out = plus_two.with_ymd_and_hms(2025, 3, 10, 19, 0, 0).single();
    assert_eq!(total_hours(check_in, check_out, None, None), "10:00");
}

#[test]
fn test_record_uses_the_same_computation() {
    let mut record = AttendanceRecord::new(day());
    record.check_in = Some(at(9, 0));
    record.break_start = Some(at(13, 0));
    record.break_end = Some(at(13, 45));
    record.check_out = Some(at(18, 0));

    assert_eq!(record.total_hours(), "08:15");
    assert_eq!(record.worked_minutes(), 495);

    record.check_out = None;
    assert_eq!(record.total_hours(), "00:00");
}
