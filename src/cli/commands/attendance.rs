use crate::cli::commands::{Context, status};
use crate::core::tracker::AttendanceTracker;
use crate::errors::AppResult;
use crate::models::action::AttendanceAction;
use crate::ui::messages;
use crate::utils::date;
use crate::utils::time::format_time_of_day;

/// `checkin`, `checkout`, `break-start`, `break-end`.
///
/// Today's record is fetched first so the same gating as the panel applies;
/// the timestamp printed is the one the server stored.
pub fn handle(action: AttendanceAction, ctx: &Context) -> AppResult<()> {
    let client = ctx.client()?;
    let mut tracker = AttendanceTracker::new(&client, &ctx.session, date::today());

    if let Err(e) = tracker.load() {
        return Err(ctx.report(e, tracker.error_message()));
    }

    let outcome = tracker.perform(action).map(|record| {
        (
            format_time_of_day(action.stamp(record), &ctx.cfg.time_format),
            record.date_str(),
        )
    });
    let (stamp, day) = match outcome {
        Ok(done) => done,
        Err(e) => return Err(ctx.report(e, tracker.error_message())),
    };

    messages::success(format!("{} recorded at {}", capitalize(action.label()), stamp));
    ctx.record_activity(action.endpoint(), &day, &format!("{} at {}", action.label(), stamp));

    println!();
    status::print_today(&tracker, &ctx.cfg.time_format);
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
