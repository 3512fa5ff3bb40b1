pub mod attendance;
pub mod config;
pub mod history;
pub mod init;
pub mod log;
pub mod notifications;
pub mod performance;
pub mod projects;
pub mod session;
pub mod status;

use crate::api::http::HttpClient;
use crate::config::Config;
use crate::core::activity;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::path::PathBuf;
use tracing::debug;

/// Everything a command handler needs, built once in `run()`.
pub struct Context {
    pub cfg: Config,
    pub session: Session,
    pub session_path: PathBuf,
    pub is_test: bool,
}

impl Context {
    pub fn client(&self) -> AppResult<HttpClient> {
        HttpClient::from_config(&self.cfg)
    }

    /// Append to the activity log. Never fails the command.
    pub fn record_activity(&self, operation: &str, target: &str, message: &str) {
        if self.is_test {
            return;
        }
        if let Err(e) = activity::ttlog(&self.cfg.activity_log_path(), operation, target, message)
        {
            messages::warning(format!("Failed to write activity log: {}", e));
        }
    }

    /// Turn a failed remote step into the error shown to the user: the
    /// tracker's banner text when there is one, the raw error otherwise.
    pub fn report(&self, err: AppError, banner: Option<&str>) -> AppError {
        self.drop_session_on_unauthorized(&err);
        match banner {
            Some(text) => AppError::Banner(text.to_string()),
            None => err,
        }
    }

    /// `report` with the banner built from `fallback` unless the server
    /// explained the failure itself.
    pub fn fail(&self, err: AppError, fallback: &str) -> AppError {
        let text = err.user_message(fallback);
        self.report(err, Some(text.as_str()))
    }

    /// A rejected credential ends the stored session: the next run asks for
    /// a fresh login instead of replaying a dead token.
    pub fn drop_session_on_unauthorized(&self, err: &AppError) {
        if !err.is_unauthorized() {
            return;
        }
        debug!(path = %self.session_path.display(), "credential rejected, ending session");
        if let Err(e) = Session::remove(&self.session_path) {
            messages::warning(format!("Failed to clear session: {}", e));
        }
    }
}
