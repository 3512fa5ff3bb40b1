use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::core::tracker::AttendanceTracker;
use crate::errors::AppResult;
use crate::models::attendance_record::AttendanceRecord;
use crate::ui::messages;
use crate::utils::colors::{colorize_break, colorize_in_out, colorize_optional};
use crate::utils::date::{self, format_calendar_date, resolve_period};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_time_of_day;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    let Commands::History { period } = cmd else {
        return Ok(());
    };

    // Validate the filter before touching the network.
    let bounds = period.as_deref().map(resolve_period).transpose()?;

    let client = ctx.client()?;
    let mut tracker = AttendanceTracker::new(&client, &ctx.session, date::today());
    if let Err(e) = tracker.load() {
        return Err(ctx.report(e, tracker.error_message()));
    }

    let rows: Vec<&AttendanceRecord> = tracker
        .history()
        .iter()
        .filter(|r| bounds.is_none_or(|(from, to)| r.date >= from && r.date <= to))
        .collect();

    messages::header("Attendance history");
    if rows.is_empty() {
        println!("No attendance records found.");
        return Ok(());
    }

    print!("{}", render_table(&rows, &ctx.cfg.time_format));
    Ok(())
}

pub fn render_table(records: &[&AttendanceRecord], time_format: &str) -> String {
    let mut table = Table::new(vec![
        Column::new("Date"),
        Column::new("Check In"),
        Column::new("Check Out"),
        Column::new("Break Start"),
        Column::new("Break End"),
        Column::new("Total Hours"),
    ]);

    for r in records {
        let t = |ts| format_time_of_day(ts, time_format);
        table.add_row(vec![
            format_calendar_date(r.date),
            colorize_in_out(&t(r.check_in), true),
            colorize_in_out(&t(r.check_out), false),
            colorize_break(&t(r.break_start)),
            colorize_break(&t(r.break_end)),
            colorize_optional(&r.total_hours()),
        ]);
    }

    table.render()
}
