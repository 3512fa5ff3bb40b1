use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::core::activity;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        let path = ctx.cfg.activity_log_path();

        if !*print {
            messages::info(format!("Activity log: {}", path.display()));
            return Ok(());
        }

        let entries = activity::read_entries(&path)?;
        if entries.is_empty() {
            messages::info("The activity log is empty");
            return Ok(());
        }

        println!("📜 Activity log:\n");
        for line in activity::render(&entries) {
            println!("{}", line);
        }
    }
    Ok(())
}
