//! Unified application error type.
//! All modules (api, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Remote API
    // ---------------------------
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No authentication token found")]
    MissingCredential,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Remote error {status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Remote {
        status: u16,
        message: Option<String>,
    },

    // ---------------------------
    // Tracker logic
    // ---------------------------
    #[error("Cannot {action}: {reason}")]
    ActionNotPermitted {
        action: &'static str,
        reason: &'static str,
    },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    /// Already phrased for the user (the error banner text).
    #[error("{0}")]
    Banner(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Text shown in the error banner.
    ///
    /// Remote failures carry the server's own `message` when it sent one;
    /// transport and decoding failures collapse to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Remote {
                message: Some(m), ..
            } => m.clone(),
            AppError::Remote { message: None, .. } => fallback.to_string(),
            AppError::Unauthorized(m) | AppError::Banner(m) => m.clone(),
            AppError::MissingCredential | AppError::ActionNotPermitted { .. } => {
                self.to_string()
            }
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Unauthorized(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
