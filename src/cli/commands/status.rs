use crate::api::AttendanceApi;
use crate::cli::commands::Context;
use crate::core::tracker::AttendanceTracker;
use crate::errors::AppResult;
use crate::models::action::AttendanceAction;
use crate::ui::messages;
use crate::utils::colors::{colorize_break, colorize_in_out, colorize_optional, colorize_permission};
use crate::utils::date::{self, format_calendar_date};
use crate::utils::describe_state;
use crate::utils::formatting::bold;
use crate::utils::time::format_time_of_day;

/// `status`: load the history and print today's panel.
pub fn handle(ctx: &Context) -> AppResult<()> {
    let client = ctx.client()?;
    let mut tracker = AttendanceTracker::new(&client, &ctx.session, date::today());

    if let Err(e) = tracker.load() {
        return Err(ctx.report(e, tracker.error_message()));
    }

    print_today(&tracker, &ctx.cfg.time_format);
    Ok(())
}

/// The today panel: date, the four stamps, total hours, permitted actions.
pub fn print_today<A: AttendanceApi + ?Sized>(tracker: &AttendanceTracker<'_, A>, time_format: &str) {
    let record = tracker.today_record();
    let stamp = |ts| format_time_of_day(ts, time_format);

    let (state, color) = describe_state(tracker.state());
    messages::header(format!("Attendance {}", format_calendar_date(tracker.today())));
    println!("Status      : {}{}\x1b[0m", color, state);
    println!("Clock in    : {}", colorize_in_out(&stamp(record.and_then(|r| r.check_in)), true));
    println!("Break in    : {}", colorize_break(&stamp(record.and_then(|r| r.break_start))));
    println!("Break out   : {}", colorize_break(&stamp(record.and_then(|r| r.break_end))));
    println!("Clock out   : {}", colorize_in_out(&stamp(record.and_then(|r| r.check_out)), false));
    println!(
        "Total hours : {}",
        bold(&colorize_optional(&tracker.today_total_hours()))
    );

    let permissions = tracker.permissions();
    let actions: Vec<String> = AttendanceAction::ALL
        .iter()
        .map(|a| colorize_permission(a.label(), permissions.allows(*a)))
        .collect();
    println!("Actions     : {}", actions.join(" | "));
}
