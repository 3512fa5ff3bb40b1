//! rattendance library root.
//! Exposes the CLI parser, the high-level run() function, and the attendance
//! core (tracker, worked-time calculator, token and session handling).

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use crate::cli::commands::{self, Context};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::models::action::AttendanceAction;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(ctx),
        Commands::Config { .. } => commands::config::handle(&cli.command, ctx),
        Commands::Login { .. } => commands::session::login(&cli.command, cli.token.as_deref(), ctx),
        Commands::Logout => commands::session::logout(ctx),
        Commands::Whoami => commands::session::whoami(ctx),
        Commands::Status => commands::status::handle(ctx),
        Commands::Checkin => commands::attendance::handle(AttendanceAction::CheckIn, ctx),
        Commands::Checkout => commands::attendance::handle(AttendanceAction::CheckOut, ctx),
        Commands::BreakStart => commands::attendance::handle(AttendanceAction::StartBreak, ctx),
        Commands::BreakEnd => commands::attendance::handle(AttendanceAction::EndBreak, ctx),
        Commands::History { .. } => commands::history::handle(&cli.command, ctx),
        Commands::Notifications { .. } => commands::notifications::handle(&cli.command, ctx),
        Commands::Projects { .. } => commands::projects::handle(&cli.command, ctx),
        Commands::Performance { .. } => commands::performance::handle(&cli.command, ctx),
        Commands::Log { .. } => commands::log::handle(&cli.command, ctx),
    }
}

/// Diagnostics go to stderr. `RUST_LOG` wins over the configured level.
fn init_logging(cfg: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once, then apply command-line overrides
    let mut cfg = Config::load()?;
    if let Some(url) = &cli.base_url {
        cfg.base_url = url.clone();
    }
    init_logging(&cfg);

    // 3️⃣ session: stored one, unless --token replaces it for this run
    let session_path: PathBuf = match &cli.session {
        Some(p) => expand_tilde(p),
        None => cfg.session_path(),
    };
    let session = match cli.token.as_deref().map(str::trim) {
        Some(token) if !token.is_empty() => Session::begin(token),
        _ => Session::load(&session_path)?,
    };

    let ctx = Context {
        cfg,
        session,
        session_path,
        is_test: cli.test,
    };

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &ctx)
}
