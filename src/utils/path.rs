//! Path utilities: expand ~ in user-supplied paths.

use crate::errors::AppResult;
use std::env;
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `--db` value as an absolute path: `~` expanded, relative paths taken from
/// the current directory.
pub fn resolve_db_path(path: &str) -> AppResult<PathBuf> {
    let p = expand_tilde(path);
    if p.is_absolute() {
        return Ok(p);
    }
    Ok(env::current_dir()?.join(p))
}
