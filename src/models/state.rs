use super::attendance_record::AttendanceRecord;
use serde::Serialize;

/// Where the day stands, derived from which fields of the record are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttendanceState {
    NotCheckedIn,
    CheckedIn,
    OnBreak,
    BreakEnded,
    CheckedOut,
}

impl AttendanceState {
    /// `None` means there is no record for the day yet.
    pub fn of(record: Option<&AttendanceRecord>) -> Self {
        let Some(r) = record else {
            return AttendanceState::NotCheckedIn;
        };

        if r.check_in.is_none() {
            AttendanceState::NotCheckedIn
        } else if r.check_out.is_some() {
            AttendanceState::CheckedOut
        } else if r.break_start.is_some() && r.break_end.is_none() {
            AttendanceState::OnBreak
        } else if r.break_end.is_some() {
            AttendanceState::BreakEnded
        } else {
            AttendanceState::CheckedIn
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceState::NotCheckedIn => "Not checked in",
            AttendanceState::CheckedIn => "Checked in",
            AttendanceState::OnBreak => "On break",
            AttendanceState::BreakEnded => "Back from break",
            AttendanceState::CheckedOut => "Checked out",
        }
    }
}
