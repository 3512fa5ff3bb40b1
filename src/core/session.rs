//! Explicit session context.
//!
//! Holds the bearer credential and the derived user id. A session starts at
//! login (`begin`) and ends at logout (`end`); between runs it lives in the
//! session file configured in `Config::session_file`.

use crate::core::token;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    user_id: Option<String>,
}

impl Session {
    /// No credential: every remote call fails before reaching the network.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Start a session for `token`, remembering the id it carries (if any).
    pub fn begin(token: impl Into<String>) -> Self {
        let token = token.into();
        let user_id = token::subject_id(&token);
        Self {
            token: Some(token),
            user_id,
        }
    }

    /// Tear the session down; the credential and derived id are forgotten.
    pub fn end(&mut self) {
        self.token = None;
        self.user_id = None;
    }

    pub fn is_active(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn token(&self) -> AppResult<&str> {
        self.token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(AppError::MissingCredential)
    }

    /// Stored id first, otherwise whatever the token payload yields.
    pub fn user_id(&self) -> Option<String> {
        self.user_id
            .clone()
            .or_else(|| self.token.as_deref().and_then(token::subject_id))
    }

    /// Load from `path`; a missing file is an anonymous session.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::anonymous());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::anonymous());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Delete the persisted session, if any.
    pub fn remove(path: &Path) -> AppResult<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
