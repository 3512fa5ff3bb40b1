//! Path utilities: expand ~ in configured file locations.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return home;
    }
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}
