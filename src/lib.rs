//! Statusline - single-line git and notification status for coding assistant prompts.
//!
//! The binary reads a JSON session descriptor on stdin and prints one
//! ANSI-colored line: an optional GitHub notification badge, the current
//! branch, staged and unstaged change summaries, and a shortened path.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - A file-backed TTL cache ([`TtlCache`])
//! - Git status classification ([`GitChangeSummary`])
//! - Cache-first notification lookup ([`NotificationGateway`])
//! - Configuration, error types, and rendering helpers

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    // Git
    change_summary,
    current_branch,
    is_repository,
    parse_porcelain,
    parse_shortstat,
    // Rendering
    render_status_line,
    render_status_line_plain,
    shorten_path,
    strip_ansi_codes,

    CacheEntry,
    ChangeCounts,
    ChangeKind,
    ConfigOverrides,
    DiffStat,
    EnvFile,
    FetchError,
    GitChangeSummary,
    GitRepo,
    GithubClient,
    Notification,
    NotificationCount,
    NotificationGateway,
    NotificationSource,
    Result,
    StatusLineContext,
    StatusLineInput,
    StatuslineConfig,
    // Error handling
    StatuslineError,
    // Cache
    TtlCache,

    NOTIFICATION_CACHE_KEY,
};
