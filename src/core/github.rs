//! Minimal GitHub notifications client.
//!
//! Only the one endpoint the status line needs: the caller's unread,
//! participating notifications. Requests are blocking and bounded by a
//! timeout because rendering sits on the shell prompt's hot path.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = "statusline-cli";
const ACCEPT: &str = "application/vnd.github+json";
const NOTIFICATIONS_QUERY: &str = "notifications?all=false&participating=true";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryRef {
    #[serde(default)]
    pub full_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub subject: Subject,
    #[serde(default)]
    pub repository: RepositoryRef,
    #[serde(default)]
    pub unread: bool,
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("GitHub token not provided")]
    MissingToken,

    #[error("GitHub rejected the token (HTTP {status})")]
    Auth { status: u16 },

    #[error("GitHub API rate limit exceeded")]
    RateLimited,

    #[error("GitHub API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to parse JSON: {0}")]
    Payload(#[source] serde_json::Error),
}

/// Anything that can list notifications for a token
pub trait NotificationSource {
    fn fetch(&self, token: &str) -> Result<Vec<Notification>, FetchError>;
}

pub struct GithubClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl GithubClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn notifications_url(&self) -> String {
        format!("{}/{}", self.base_url, NOTIFICATIONS_QUERY)
    }
}

impl NotificationSource for GithubClient {
    fn fetch(&self, token: &str) -> Result<Vec<Notification>, FetchError> {
        if token.is_empty() {
            return Err(FetchError::MissingToken);
        }

        let url = self.notifications_url();
        log::debug!("Fetching notifications from {url}");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, format!("token {token}"))
            .header(reqwest::header::ACCEPT, ACCEPT)
            .send()?;

        let status = response.status().as_u16();
        let rate_limit_exhausted = response
            .headers()
            .get("x-ratelimit-remaining")
            .is_some_and(|remaining| remaining.as_bytes() == b"0");
        let body = response.text()?;

        decode_response(status, rate_limit_exhausted, &body)
    }
}

/// Map an HTTP status and body to notifications or a typed failure.
///
/// GitHub reports an exhausted primary rate limit as 403 with
/// `x-ratelimit-remaining: 0`, so that case is not an auth failure.
pub fn decode_response(
    status: u16,
    rate_limit_exhausted: bool,
    body: &str,
) -> Result<Vec<Notification>, FetchError> {
    match status {
        200..=299 => serde_json::from_str(body).map_err(FetchError::Payload),
        429 => Err(FetchError::RateLimited),
        403 if rate_limit_exhausted => Err(FetchError::RateLimited),
        401 | 403 => Err(FetchError::Auth { status }),
        _ => Err(FetchError::Status {
            status,
            body: body.trim().to_string(),
        }),
    }
}
