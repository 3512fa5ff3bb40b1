use crate::api::AuthApi;
use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

const LOGIN_FAILURE: &str = "Login failed";

/// `login`: either exchange credentials with the backend, or adopt the token
/// passed through the global `--token` flag.
pub fn login(cmd: &Commands, token_flag: Option<&str>, ctx: &Context) -> AppResult<()> {
    let Commands::Login { email, password } = cmd else {
        return Ok(());
    };

    let session = match (email, password, token_flag) {
        (Some(email), Some(password), _) => {
            let client = ctx.client()?;
            let token = client
                .login(email, password)
                .map_err(|e| AppError::Banner(e.user_message(LOGIN_FAILURE)))?;
            Session::begin(token)
        }
        (_, _, Some(token)) if !token.trim().is_empty() => Session::begin(token.trim()),
        _ => {
            return Err(AppError::Other(
                "login needs --email and --password, or an existing token via --token".into(),
            ));
        }
    };

    session.save(&ctx.session_path)?;

    match session.user_id() {
        Some(id) => messages::success(format!("Login successful (user id {})", id)),
        None => messages::success("Login successful"),
    }
    ctx.record_activity(
        "login",
        session.user_id().as_deref().unwrap_or(""),
        "Session started",
    );
    Ok(())
}

pub fn logout(ctx: &Context) -> AppResult<()> {
    let mut session = Session::load(&ctx.session_path)?;
    let was_active = session.is_active();
    let user = session.user_id().unwrap_or_default();

    session.end();
    Session::remove(&ctx.session_path)?;

    if was_active {
        messages::success("Logged out");
        ctx.record_activity("logout", &user, "Session ended");
    } else {
        messages::info("No active session");
    }
    Ok(())
}

pub fn whoami(ctx: &Context) -> AppResult<()> {
    if !ctx.session.is_active() {
        messages::info("Not logged in");
        return Ok(());
    }

    match ctx.session.user_id() {
        Some(id) => println!("User id: {}", id),
        None => messages::warning("The current token carries no user id"),
    }
    Ok(())
}
