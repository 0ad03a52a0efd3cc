use crate::core::error::{Result, StatuslineError};
use std::path::{Path, PathBuf};

pub const CACHE_FILE_NAME: &str = ".statusline_cache";

pub fn get_home_directory() -> Result<PathBuf> {
    dirs::home_dir().ok_or(StatuslineError::HomeDirectoryNotFound)
}

/// `~/.statusline_cache`
pub fn get_default_cache_file(home: &Path) -> PathBuf {
    home.join(CACHE_FILE_NAME)
}

/// `~/.claude/.env`
pub fn get_default_env_file(home: &Path) -> PathBuf {
    home.join(".claude").join(".env")
}
