use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "RATTENDANCE_CONFIG_DIR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
    #[serde(default = "default_session_file")]
    pub session_file: String,
    #[serde(default = "default_activity_log")]
    pub activity_log: String,
    #[serde(default = "default_time_format")]
    pub time_format: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}
fn default_api_prefix() -> String {
    "/employee".to_string()
}
fn default_session_file() -> String {
    Config::config_dir()
        .join("session.json")
        .to_string_lossy()
        .to_string()
}
fn default_activity_log() -> String {
    Config::config_dir()
        .join("activity.log")
        .to_string_lossy()
        .to_string()
}
fn default_time_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_prefix: default_api_prefix(),
            session_file: default_session_file(),
            activity_log: default_activity_log(),
            time_format: default_time_format(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(CONFIG_DIR_ENV)
            && !dir.trim().is_empty()
        {
            return expand_tilde(&dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write the default configuration file (unless one exists already).
    /// Returns the path of the configuration file.
    pub fn init_all(is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if !is_test && !path.exists() {
            let yaml = serde_yaml::to_string(&Config::default())?;
            let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
        }

        Ok(path)
    }

    pub fn session_path(&self) -> PathBuf {
        expand_tilde(&self.session_file)
    }

    pub fn activity_log_path(&self) -> PathBuf {
        expand_tilde(&self.activity_log)
    }
}
