use super::attendance_record::AttendanceRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The four forward transitions of an attendance day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttendanceAction {
    CheckIn,
    StartBreak,
    EndBreak,
    CheckOut,
}

impl AttendanceAction {
    pub const ALL: [AttendanceAction; 4] = [
        AttendanceAction::CheckIn,
        AttendanceAction::StartBreak,
        AttendanceAction::EndBreak,
        AttendanceAction::CheckOut,
    ];

    /// Path segment under `/attendance/`.
    pub fn endpoint(&self) -> &'static str {
        match self {
            AttendanceAction::CheckIn => "checkin",
            AttendanceAction::StartBreak => "breakin",
            AttendanceAction::EndBreak => "breakout",
            AttendanceAction::CheckOut => "checkout",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceAction::CheckIn => "check in",
            AttendanceAction::StartBreak => "start break",
            AttendanceAction::EndBreak => "end break",
            AttendanceAction::CheckOut => "check out",
        }
    }

    /// Banner text when the server gives no message of its own.
    pub fn failure_message(&self) -> &'static str {
        match self {
            AttendanceAction::CheckIn | AttendanceAction::CheckOut => "Check-in/out action failed",
            AttendanceAction::StartBreak | AttendanceAction::EndBreak => "Break action failed",
        }
    }

    /// Field-level guard. Break state never blocks check-out.
    pub fn is_permitted(&self, record: Option<&AttendanceRecord>) -> bool {
        self.refusal(record).is_none()
    }

    /// Reason the action is blocked, if it is.
    pub fn refusal(&self, record: Option<&AttendanceRecord>) -> Option<&'static str> {
        let check_in = record.and_then(|r| r.check_in).is_some();
        let break_start = record.and_then(|r| r.break_start).is_some();
        let break_end = record.and_then(|r| r.break_end).is_some();
        let check_out = record.and_then(|r| r.check_out).is_some();

        match self {
            AttendanceAction::CheckIn if check_in => Some("already checked in today"),
            AttendanceAction::StartBreak if !check_in => Some("not checked in yet"),
            AttendanceAction::StartBreak if break_start => Some("break already started today"),
            AttendanceAction::EndBreak if !break_start => Some("no break in progress"),
            AttendanceAction::EndBreak if break_end => Some("break already ended today"),
            AttendanceAction::CheckOut if !check_in => Some("not checked in yet"),
            AttendanceAction::CheckOut if check_out => Some("already checked out today"),
            _ => None,
        }
    }

    /// The timestamp this action writes on the record.
    pub fn stamp(&self, record: &AttendanceRecord) -> Option<DateTime<Utc>> {
        match self {
            AttendanceAction::CheckIn => record.check_in,
            AttendanceAction::StartBreak => record.break_start,
            AttendanceAction::EndBreak => record.break_end,
            AttendanceAction::CheckOut => record.check_out,
        }
    }
}

/// The four "is this button enabled" flags for the today panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionPermissions {
    pub can_check_in: bool,
    pub can_start_break: bool,
    pub can_end_break: bool,
    pub can_check_out: bool,
}

impl ActionPermissions {
    pub fn for_record(record: Option<&AttendanceRecord>) -> Self {
        Self {
            can_check_in: AttendanceAction::CheckIn.is_permitted(record),
            can_start_break: AttendanceAction::StartBreak.is_permitted(record),
            can_end_break: AttendanceAction::EndBreak.is_permitted(record),
            can_check_out: AttendanceAction::CheckOut.is_permitted(record),
        }
    }

    pub fn allows(&self, action: AttendanceAction) -> bool {
        match action {
            AttendanceAction::CheckIn => self.can_check_in,
            AttendanceAction::StartBreak => self.can_start_break,
            AttendanceAction::EndBreak => self.can_end_break,
            AttendanceAction::CheckOut => self.can_check_out,
        }
    }
}
