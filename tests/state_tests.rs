mod common;
use common::{at, day};

use rattendance::models::action::{ActionPermissions, AttendanceAction};
use rattendance::models::attendance_record::{AttendanceRecord, parse_calendar_date};
use rattendance::models::state::AttendanceState;

fn record(
    check_in: Option<u32>,
    break_start: Option<u32>,
    break_end: Option<u32>,
    check_out: Option<u32>,
) -> AttendanceRecord {
    let mut r = AttendanceRecord::new(day());
    r.check_in = check_in.map(|h| at(h, 0));
    r.break_start = break_start.map(|h| at(h, 0));
    r.break_end = break_end.map(|h| at(h, 0));
    r.check_out = check_out.map(|h| at(h, 0));
    r
}

fn flags(p: ActionPermissions) -> [bool; 4] {
    [
        p.can_check_in,
        p.can_start_break,
        p.can_end_break,
        p.can_check_out,
    ]
}

#[test]
fn test_state_follows_recorded_fields() {
    assert_eq!(AttendanceState::of(None), AttendanceState::NotCheckedIn);

    let cases = [
        (record(None, None, None, None), AttendanceState::NotCheckedIn),
        (record(Some(9), None, None, None), AttendanceState::CheckedIn),
        (record(Some(9), Some(12), None, None), AttendanceState::OnBreak),
        (record(Some(9), Some(12), Some(13), None), AttendanceState::BreakEnded),
        (record(Some(9), Some(12), Some(13), Some(17)), AttendanceState::CheckedOut),
        (record(Some(9), Some(12), None, Some(17)), AttendanceState::CheckedOut),
    ];
    for (r, expected) in cases {
        assert_eq!(AttendanceState::of(Some(&r)), expected, "record {:?}", r);
    }
}

#[test]
fn test_permissions_without_record() {
    let p = ActionPermissions::for_record(None);
    assert_eq!(flags(p), [true, false, false, false]);
}

#[test]
fn test_permissions_per_state() {
    let cases = [
        (record(Some(9), None, None, None), [false, true, false, true]),
        (record(Some(9), Some(12), None, None), [false, false, true, true]),
        (record(Some(9), Some(12), Some(13), None), [false, false, false, true]),
        (record(Some(9), Some(12), Some(13), Some(17)), [false, false, false, false]),
    ];
    for (r, expected) in cases {
        assert_eq!(flags(ActionPermissions::for_record(Some(&r))), expected);
    }
}

#[test]
fn test_break_can_still_start_after_check_out() {
    let r = record(Some(9), None, None, Some(17));
    let p = ActionPermissions::for_record(Some(&r));
    assert!(p.can_start_break);
    assert!(!p.can_check_out);
}

#[test]
fn test_allows_matches_flags() {
    let r = record(Some(9), Some(12), None, None);
    let p = ActionPermissions::for_record(Some(&r));
    for action in AttendanceAction::ALL {
        assert_eq!(p.allows(action), action.is_permitted(Some(&r)));
    }
}

#[test]
fn test_refusal_reasons() {
    let empty = record(None, None, None, None);
    assert_eq!(
        AttendanceAction::StartBreak.refusal(Some(&empty)),
        Some("not checked in yet")
    );
    assert_eq!(
        AttendanceAction::EndBreak.refusal(None),
        Some("no break in progress")
    );

    let done = record(Some(9), Some(12), Some(13), Some(17));
    assert_eq!(
        AttendanceAction::CheckIn.refusal(Some(&done)),
        Some("already checked in today")
    );
    assert_eq!(
        AttendanceAction::EndBreak.refusal(Some(&done)),
        Some("break already ended today")
    );
    assert_eq!(AttendanceAction::CheckIn.refusal(None), None);
}

#[test]
fn test_endpoints_and_stamps() {
    let endpoints: Vec<_> = AttendanceAction::ALL.iter().map(|a| a.endpoint()).collect();
    assert_eq!(endpoints, vec!["checkin", "breakin", "breakout", "checkout"]);

    let r = record(Some(9), Some(12), Some(13), Some(17));
    assert_eq!(AttendanceAction::EndBreak.stamp(&r), Some(at(13, 0)));
    assert_eq!(AttendanceAction::CheckOut.stamp(&r), Some(at(17, 0)));
}

#[test]
fn test_record_from_server_json() {
    let json = r#"{
        "_id": "65a1",
        "user": "u-1",
        "date": "2025-03-10T00:00:00.000Z",
        "checkIn": "2025-03-10T09:00:00.000Z",
        "breakStart": "2025-03-10T13:00:00.000Z",
        "breakEnd": null,
        "checkOut": null
    }"#;
    let r: AttendanceRecord = serde_json::from_str(json).expect("parse record");

    assert_eq!(r.id.as_deref(), Some("65a1"));
    assert_eq!(r.date, day());
    assert_eq!(r.check_in, Some(at(9, 0)));
    assert_eq!(r.break_start, Some(at(13, 0)));
    assert!(r.break_end.is_none());
    assert!(r.check_out.is_none());
    assert_eq!(AttendanceState::of(Some(&r)), AttendanceState::OnBreak);
}

#[test]
fn test_record_with_plain_date_and_missing_fields() {
    let r: AttendanceRecord =
        serde_json::from_str(r#"{"date":"2025-03-10"}"#).expect("parse record");
    assert_eq!(r, AttendanceRecord::new(day()));
    assert_eq!(r.date_str(), "2025-03-10");
}

#[test]
fn test_record_with_bad_date_is_rejected() {
    let err = serde_json::from_str::<AttendanceRecord>(r#"{"date":"10/03/2025"}"#);
    assert!(err.is_err());
}

#[test]
fn test_calendar_date_keeps_server_day() {
    // late evening UTC stays on the written day
    assert_eq!(parse_calendar_date("2025-03-10T23:59:00.000Z"), Some(day()));
    assert_eq!(parse_calendar_date("2025-03-10"), Some(day()));
    assert_eq!(parse_calendar_date(""), None);
    assert_eq!(parse_calendar_date("yesterday"), None);
}

#[test]
fn test_state_labels() {
    assert_eq!(AttendanceState::OnBreak.label(), "On break");
    assert_eq!(AttendanceState::CheckedOut.label(), "Checked out");
}
