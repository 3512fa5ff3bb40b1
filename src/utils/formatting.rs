//! Formatting utilities used for CLI outputs.

use crate::models::state::AttendanceState;
use regex::Regex;
use std::sync::LazyLock;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// Text and ANSI colour describing where the day stands.
pub fn describe_state(state: AttendanceState) -> (String, &'static str) {
    let color = match state {
        AttendanceState::NotCheckedIn => "\x1b[90m",
        AttendanceState::CheckedIn => "\x1b[32m",
        AttendanceState::OnBreak => "\x1b[33m",
        AttendanceState::BreakEnded => "\x1b[36m",
        AttendanceState::CheckedOut => "\x1b[34m",
    };
    (state.label().to_string(), color)
}

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern"));

/// Remove ANSI colour escapes, leaving only the visible text.
pub fn strip_ansi(s: &str) -> String {
    ANSI_ESCAPE.replace_all(s, "").into_owned()
}
