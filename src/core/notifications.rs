//! Cache-first notification count lookup.
//!
//! The GitHub API is rate limited and the status line is re-rendered many
//! times a second, so the count is served from the [`TtlCache`] whenever a
//! live entry exists. Staleness is bounded by the cache TTL.

use crate::core::cache::TtlCache;
use crate::core::github::NotificationSource;

/// Cache key for the notification count
pub const NOTIFICATION_CACHE_KEY: &str = "github_notifications";

/// Result of a count lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationCount {
    /// No token, or the fetch failed
    Unavailable,
    Count(u64),
}

impl NotificationCount {
    /// Count to show as a badge; zero and unavailable both show nothing
    pub fn badge(&self) -> Option<u64> {
        match self {
            NotificationCount::Count(n) if *n > 0 => Some(*n),
            _ => None,
        }
    }
}

pub struct NotificationGateway<S> {
    cache: TtlCache,
    source: S,
    token: Option<String>,
}

impl<S: NotificationSource> NotificationGateway<S> {
    pub fn new(cache: TtlCache, source: S, token: Option<String>) -> Self {
        Self {
            cache,
            source,
            token,
        }
    }

    pub fn count(&self) -> NotificationCount {
        let Some(token) = self.token.as_deref().filter(|t| !t.is_empty()) else {
            log::debug!("No GitHub token configured");
            return NotificationCount::Unavailable;
        };

        if let Some(cached) = self.cache.get(NOTIFICATION_CACHE_KEY) {
            match serde_json::from_str::<u64>(&cached) {
                Ok(count) => return NotificationCount::Count(count),
                Err(e) => log::debug!("Ignoring unreadable cached count '{cached}': {e}"),
            }
        }

        let notifications = match self.source.fetch(token) {
            Ok(notifications) => notifications,
            Err(e) => {
                log::debug!("Notification fetch failed: {e}");
                return NotificationCount::Unavailable;
            }
        };

        let count = notifications.len() as u64;
        match serde_json::to_string(&count) {
            Ok(payload) => {
                if let Err(e) = self.cache.set(NOTIFICATION_CACHE_KEY, &payload) {
                    log::warn!("Notification cache write failed: {e}");
                }
            }
            Err(e) => log::warn!("Could not serialize notification count: {e}"),
        }

        NotificationCount::Count(count)
    }
}
