//! Core functionality for the statusline tool.
//!
//! This module provides the building blocks for one status line render:
//! the TTL cache, git status classification, the notification gateway,
//! configuration, and output formatting.

pub mod cache;
pub mod colors;
pub mod config;
pub mod dirs;
pub mod error;
pub mod git;
pub mod git_status;
pub mod github;
pub mod input;
pub mod notifications;
pub mod output;
pub mod templates;

// === Error handling ===
pub use error::{Result, StatuslineError};

// === Cache ===
// Append-only JSON lines store with TTL expiry
pub use cache::{CacheEntry, TtlCache};

// === Configuration ===
pub use config::{ConfigOverrides, EnvFile, StatuslineConfig};

// === Git ===
// Repository queries and porcelain/shortstat classification
pub use git::{change_summary, current_branch, is_repository, GitRepo};
pub use git_status::{
    parse_porcelain, parse_shortstat, ChangeCounts, ChangeKind, DiffStat, GitChangeSummary,
};

// === Notifications ===
pub use github::{FetchError, GithubClient, Notification, NotificationSource};
pub use notifications::{NotificationCount, NotificationGateway, NOTIFICATION_CACHE_KEY};

// === Input ===
pub use input::StatusLineInput;

// === Rendering ===
pub use templates::{
    render_status_line, render_status_line_plain, shorten_path, strip_ansi_codes,
    StatusLineContext,
};

// === Output formatting ===
pub use output::{print_error, print_failure, print_info, print_section_header, print_success};
