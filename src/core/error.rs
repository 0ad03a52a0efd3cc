//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`StatuslineError`] which covers every failure the
//! statusline can report. Most subsystems degrade instead of failing, so in
//! practice only input decoding and cache writes surface these errors to a
//! caller.
//!
//! # Public API
//! - [`StatuslineError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, StatuslineError>`
//!
//! # Error Categories
//! - **Input**: Unreadable or malformed JSON descriptor on stdin
//! - **Cache**: Serialization, file system and rewrite failures
//! - **Git**: Repository discovery and subprocess failures
//! - **Configuration**: Home directory lookup, invalid values

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for statusline
#[derive(Error, Debug)]
pub enum StatuslineError {
    // Input errors
    #[error("Error reading stdin: {source}")]
    InputRead { source: std::io::Error },

    #[error("Error parsing JSON: {source}")]
    InputParse { source: serde_json::Error },

    // Git errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("git {command} failed: {message}")]
    GitCommandFailed { command: String, message: String },

    // Cache errors
    #[error("Failed to create cache directory '{path}': {source}")]
    CacheDirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize cache entry: {source}")]
    CacheSerializationFailed { source: serde_json::Error },

    #[error("Failed to write cache file '{path}': {source}")]
    CacheWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // Configuration errors
    #[error("Could not determine home directory")]
    HomeDirectoryNotFound,

    #[error("Invalid value for {key}: '{value}'")]
    InvalidConfigValue { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using StatuslineError
pub type Result<T> = std::result::Result<T, StatuslineError>;

impl StatuslineError {
    /// Create an input read error
    pub fn input_read(source: std::io::Error) -> Self {
        Self::InputRead { source }
    }

    /// Create an input parse error
    pub fn input_parse(source: serde_json::Error) -> Self {
        Self::InputParse { source }
    }

    /// Create a git command failure from the command name and its stderr
    pub fn git_command_failed(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::GitCommandFailed {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Create a cache directory creation failed error
    pub fn cache_directory_creation_failed(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::CacheDirectoryCreationFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a cache serialization failed error
    pub fn cache_serialization_failed(source: serde_json::Error) -> Self {
        Self::CacheSerializationFailed { source }
    }

    /// Create a cache write failed error
    pub fn cache_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid configuration value error
    pub fn invalid_config_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Whether this error comes from decoding stdin, the only fatal category
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InputRead { .. } | Self::InputParse { .. })
    }
}
