//! Runtime configuration.
//!
//! Settings come from a flat `KEY=value` env file (by default
//! `~/.claude/.env`) plus command line overrides. The result is an explicit
//! [`StatuslineConfig`] record handed to the cache and notification
//! constructors, so nothing below `main` reads process-global state.

use crate::core::cache::TtlCache;
use crate::core::dirs::{get_default_cache_file, get_default_env_file, get_home_directory};
use crate::core::error::{Result, StatuslineError};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const GITHUB_TOKEN_KEY: &str = "GITHUB_TOKEN";
pub const SHOW_NOTIFICATIONS_KEY: &str = "SHOW_GITHUB_NOTIFICATIONS";
pub const CACHE_FILE_KEY: &str = "STATUSLINE_CACHE_FILE";
pub const CACHE_TTL_KEY: &str = "STATUSLINE_CACHE_TTL";
pub const API_URL_KEY: &str = "GITHUB_API_URL";

/// Value shipped in the sample env file; treated as "no token"
pub const PLACEHOLDER_TOKEN: &str = "your_github_token_here";
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Parsed `KEY=value` file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvFile {
    values: HashMap<String, String>,
}

impl EnvFile {
    /// Parse env file content. Blank lines, `#` comments and lines without
    /// `=` are skipped; keys and values are trimmed and the first `=` splits.
    pub fn parse(content: &str) -> Self {
        let values = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
            .collect();

        Self { values }
    }

    /// Load an env file; a missing or unreadable file is an empty one
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                log::debug!("No env file at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// Command line overrides applied on top of the env file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub env_file: Option<PathBuf>,
    pub cache_file: Option<PathBuf>,
}

#[derive(Clone)]
pub struct StatuslineConfig {
    pub home_dir: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    pub cache_file: Option<PathBuf>,
    pub cache_ttl: Duration,
    pub github_token: Option<String>,
    pub show_notifications: bool,
    pub api_base_url: String,
}

impl StatuslineConfig {
    /// Resolve the home directory, read the env file and apply overrides.
    ///
    /// Never fails: a missing home directory only disables the features that
    /// need a default path.
    pub fn load(overrides: &ConfigOverrides) -> Self {
        let home_dir = match get_home_directory() {
            Ok(home) => Some(home),
            Err(e) => {
                log::warn!("{e}");
                None
            }
        };

        let env_file = overrides
            .env_file
            .clone()
            .or_else(|| home_dir.as_deref().map(get_default_env_file));
        let env = env_file
            .as_deref()
            .map(EnvFile::load)
            .unwrap_or_default();

        Self::from_parts(home_dir, env_file, &env, overrides)
    }

    pub fn from_parts(
        home_dir: Option<PathBuf>,
        env_file: Option<PathBuf>,
        env: &EnvFile,
        overrides: &ConfigOverrides,
    ) -> Self {
        let cache_file = overrides
            .cache_file
            .clone()
            .or_else(|| env.get(CACHE_FILE_KEY).filter(|v| !v.is_empty()).map(PathBuf::from))
            .or_else(|| home_dir.as_deref().map(get_default_cache_file));

        let cache_ttl = match env.get(CACHE_TTL_KEY) {
            Some(value) => parse_ttl(value).unwrap_or_else(|e| {
                log::warn!("{e}, using {}s", DEFAULT_CACHE_TTL.as_secs());
                DEFAULT_CACHE_TTL
            }),
            None => DEFAULT_CACHE_TTL,
        };

        let api_base_url = env
            .get(API_URL_KEY)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        Self {
            home_dir,
            env_file,
            cache_file,
            cache_ttl,
            github_token: env.get(GITHUB_TOKEN_KEY).and_then(usable_token),
            show_notifications: env.get(SHOW_NOTIFICATIONS_KEY) == Some("true"),
            api_base_url,
        }
    }

    /// The notification cache, if a cache path could be resolved
    pub fn cache(&self) -> Option<TtlCache> {
        self.cache_file
            .as_ref()
            .map(|path| TtlCache::new(path, self.cache_ttl))
    }

    /// Home directory as a string for path shortening, empty when unknown
    pub fn home_dir_str(&self) -> String {
        self.home_dir
            .as_deref()
            .map(|home| home.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl fmt::Debug for StatuslineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatuslineConfig")
            .field("home_dir", &self.home_dir)
            .field("env_file", &self.env_file)
            .field("cache_file", &self.cache_file)
            .field("cache_ttl", &self.cache_ttl)
            .field("github_token", &self.github_token.as_ref().map(|_| "[REDACTED]"))
            .field("show_notifications", &self.show_notifications)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

fn usable_token(token: &str) -> Option<String> {
    if token.is_empty() || token == PLACEHOLDER_TOKEN {
        None
    } else {
        Some(token.to_string())
    }
}

/// TTL in whole seconds
fn parse_ttl(value: &str) -> Result<Duration> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| StatuslineError::invalid_config_value(CACHE_TTL_KEY, value))
}
