/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

fn is_blank(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v == "—" || v == "00:00"
}

/// Grey for unset fields and empty totals, untouched otherwise.
pub fn colorize_optional(value: &str) -> String {
    if is_blank(value) {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Check-in green, check-out red, unset grey.
pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if is_blank(value) {
        return format!("{GREY}{value}{RESET}");
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}

/// Break timestamps in yellow.
pub fn colorize_break(value: &str) -> String {
    if is_blank(value) {
        format!("{GREY}{value}{RESET}")
    } else {
        format!("{YELLOW}{value}{RESET}")
    }
}

/// Enabled actions green, disabled grey.
pub fn colorize_permission(label: &str, allowed: bool) -> String {
    if allowed {
        format!("{GREEN}{label}{RESET}")
    } else {
        format!("{GREY}{label}{RESET}")
    }
}
