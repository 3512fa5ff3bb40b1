//! Project and task helpers: deadline countdown and status filtering.

use crate::models::project::Project;
use crate::utils::date::parse_instant;
use chrono::{DateTime, Utc};

const DAY_MS: i64 = 86_400_000;

/// Whole days until `deadline`, rounded up. Negative once it has passed;
/// anything later today still counts as one day left.
pub fn days_remaining(deadline: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let diff = (deadline - now).num_milliseconds();
    let days = diff.div_euclid(DAY_MS);
    if diff.rem_euclid(DAY_MS) > 0 { days + 1 } else { days }
}

pub fn deadline_label(days: i64) -> String {
    match days {
        d if d < 0 => format!("{} days overdue", d.unsigned_abs()),
        0 => "Due today".to_string(),
        d => format!("{} days left", d),
    }
}

/// Countdown text for a project, `None` when it has no readable deadline.
pub fn project_deadline(project: &Project, now: DateTime<Utc>) -> Option<String> {
    let deadline = parse_instant(project.deadline.as_deref()?)?;
    Some(deadline_label(days_remaining(deadline, now)))
}

fn normalize_status(s: &str) -> String {
    s.trim().replace(['-', '_'], " ").to_lowercase()
}

/// Projects whose status matches `status` ("in-progress" matches
/// "In Progress"). `None` or "all" keeps everything.
pub fn filter_projects<'a>(projects: &'a [Project], status: Option<&str>) -> Vec<&'a Project> {
    let wanted = status.map(normalize_status).filter(|s| s != "all");
    projects
        .iter()
        .filter(|p| match &wanted {
            None => true,
            Some(w) => p.status.as_deref().map(normalize_status).as_ref() == Some(w),
        })
        .collect()
}
