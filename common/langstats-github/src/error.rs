//! Error taxonomy for GitHub API calls
//!
//! Every failed request ends up as one [`GitHubError`]. Rate limits get their
//! own variant because the remedy (wait, or supply a token) differs from any
//! other failure.

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use thiserror::Error;

/// Result alias used throughout the client crate
pub type Result<T> = std::result::Result<T, GitHubError>;

/// Header carrying the remaining request quota for the current window
pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Header carrying the unix time (seconds) at which the quota resets
pub const RATE_LIMIT_RESET_HEADER: &str = "x-ratelimit-reset";

/// Errors that can occur when talking to the GitHub REST API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GitHubError {
    /// The transport failed before a response was received
    #[error("Network error: {message}")]
    Network { message: String },

    /// The request quota is exhausted
    #[error("{}", rate_limit_message(.remaining, .reset_at, .detail))]
    RateLimit {
        remaining: Option<u64>,
        reset_at: Option<DateTime<Utc>>,
        detail: Option<String>,
    },

    /// Any other non-success status
    #[error("GitHub request failed ({status}): {body}")]
    Http { status: u16, body: String },

    /// A success response whose body did not match the expected shape
    #[error("Failed to parse GitHub API response: {message}")]
    Decode { message: String },
}

impl GitHubError {
    #[inline]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    #[inline]
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    #[inline]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Classify a non-success response
    ///
    /// `429` is always a rate limit. `403` is a rate limit only when the
    /// remaining-quota header reads `0` or the body message says so; GitHub
    /// also answers `403` for plain permission problems.
    pub fn from_response(status: StatusCode, headers: &HeaderMap, body: String) -> Self {
        let remaining = header_u64(headers, RATE_LIMIT_REMAINING_HEADER);
        let detail = body_message(&body);

        let exhausted = status == StatusCode::TOO_MANY_REQUESTS
            || (status == StatusCode::FORBIDDEN
                && (remaining == Some(0)
                    || detail.as_deref().is_some_and(mentions_rate_limit)));

        if exhausted {
            return Self::RateLimit {
                remaining,
                reset_at: reset_time(headers),
                detail,
            };
        }

        Self::Http {
            status: status.as_u16(),
            body,
        }
    }

    /// Check if this error is a rate limit error
    #[inline]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimit { .. })
    }

    /// HTTP status code, when a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GitHubError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::network(err.to_string())
        }
    }
}

fn rate_limit_message(
    remaining: &Option<u64>,
    reset_at: &Option<DateTime<Utc>>,
    detail: &Option<String>,
) -> String {
    let mut message = String::from("GitHub API rate limit exceeded");
    if let Some(remaining) = remaining {
        message.push_str(&format!(" (remaining: {remaining})"));
    }
    if let Some(reset_at) = reset_at {
        message.push_str(&format!(
            ". Resets at {}",
            reset_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }
    if let Some(detail) = detail {
        message.push_str(&format!(": {detail}"));
    }
    message
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

fn reset_time(headers: &HeaderMap) -> Option<DateTime<Utc>> {
    headers
        .get(RATE_LIMIT_RESET_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<i64>().ok())
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}

/// Pull the `message` field out of a JSON error body
fn body_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")?
        .as_str()
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

fn mentions_rate_limit(message: &str) -> bool {
    message.to_lowercase().contains("rate limit")
}
