use crate::cli::commands::Context;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with default values (kept if already present)
pub fn handle(ctx: &Context) -> AppResult<()> {
    let path = Config::init_all(ctx.is_test)?;

    messages::info("Initializing rattendance…");
    println!("📄 Config file : {}", path.display());
    println!("🌐 Backend     : {}{}", ctx.cfg.base_url, ctx.cfg.api_prefix);
    println!("🔑 Session     : {}", ctx.session_path.display());

    ctx.record_activity("init", "", &format!("Configuration initialized at {}", path.display()));

    messages::success("rattendance initialization completed!");
    Ok(())
}
