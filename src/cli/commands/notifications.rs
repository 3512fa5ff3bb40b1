use crate::api::NotificationApi;
use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::core::notifications::NotificationInbox;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::yes_no;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_time_of_day;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    let Commands::Notifications { read, delete } = cmd else {
        return Ok(());
    };

    let token = ctx.session.token()?;
    let user_id = ctx.session.user_id();
    let client = ctx.client()?;

    if let Some(id) = read {
        client
            .mark_notification_read(token, id)
            .map_err(|e| ctx.fail(e, "Error marking notification as read"))?;
        messages::success(format!("Notification {} marked as read", id));
        return Ok(());
    }

    if let Some(id) = delete {
        client
            .delete_notification(token, user_id.as_deref(), id)
            .map_err(|e| ctx.fail(e, "Error deleting notification"))?;
        messages::success(format!("Notification {} deleted", id));
        return Ok(());
    }

    let mut inbox = NotificationInbox::new();
    inbox.replace_all(
        client
            .list_notifications(token, user_id.as_deref())
            .map_err(|e| ctx.fail(e, "Error fetching notifications"))?,
    );

    messages::header(format!("Notifications ({} unread)", inbox.unread_count()));
    if inbox.items().is_empty() {
        println!("No notifications.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("Id"),
        Column::new("Type"),
        Column::new("From"),
        Column::new("Message"),
        Column::new("Received"),
        Column::new("Read"),
    ]);
    for n in inbox.items() {
        table.add_row(vec![
            n.id.clone(),
            n.kind.clone().unwrap_or_else(|| "—".to_string()),
            colorize_optional(n.sender_name.as_deref().unwrap_or("—")),
            n.message.clone(),
            format_time_of_day(n.created_at, &ctx.cfg.time_format),
            yes_no(n.read).to_string(),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}
