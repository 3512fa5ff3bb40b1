use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Today's calendar day in UTC, the same key the server writes into
/// `AttendanceRecord::date`.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// `DD/MM/YYYY`, as shown in the today panel and the history table.
pub fn format_calendar_date(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

/// First and last day covered by a period expression:
/// `YYYY-MM-DD`, `YYYY-MM`, `YYYY`, or `start:end` built from those.
pub fn resolve_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let p = p.trim();

    if let Some((start, end)) = p.split_once(':') {
        let (from, _) = period_bounds(start)?;
        let (_, to) = period_bounds(end)?;
        if from > to {
            return Err(AppError::InvalidPeriod(format!(
                "{p} (start is after end)"
            )));
        }
        return Ok((from, to));
    }

    period_bounds(p)
}

fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        return last_day_of_month(first.year(), first.month())
            .map(|last| (first, last))
            .ok_or_else(|| AppError::InvalidPeriod(p.to_string()));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(AppError::InvalidPeriod(p.to_string()))
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}

/// Instant for a server date field: RFC 3339, or a bare `YYYY-MM-DD` read as
/// UTC midnight.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)
        .map(|n| n.and_utc())
}

/// `DD/MM/YYYY` for an optional server date, `—` when absent or unreadable.
pub fn format_server_date(raw: Option<&str>) -> String {
    raw.and_then(parse_instant)
        .map(|d| format_calendar_date(d.date_naive()))
        .unwrap_or_else(|| crate::utils::time::EMPTY_FIELD.to_string())
}
