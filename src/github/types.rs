//! Domain types built from GitHub API responses
//!
//! For the raw wire types, see the `langstats-github` crate.

use chrono::{DateTime, Utc};
use langstats_github::{LanguageHistogram, RepoRecord};
use serde::Serialize;

/// A repository considered for the statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Repository {
    pub name: String,
    pub owner: String,
    pub fork: bool,
    pub stars: u64,
    pub updated_at: Option<DateTime<Utc>>,
    pub topics: Vec<String>,
    pub description: Option<String>,
    pub html_url: String,
    /// Language byte counts, once fetched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<LanguageHistogram>,
}

impl Repository {
    pub fn new(name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            fork: false,
            stars: 0,
            updated_at: None,
            topics: Vec::new(),
            description: None,
            html_url: String::new(),
            languages: None,
        }
    }

    /// Convert a listing entry; `account` is the owner when the entry has none
    pub fn from_record(record: RepoRecord, account: &str) -> Self {
        Self {
            owner: record
                .owner
                .map(|owner| owner.login)
                .unwrap_or_else(|| account.to_string()),
            name: record.name,
            fork: record.fork,
            stars: record.stargazers_count,
            updated_at: record.updated_at,
            topics: record.topics,
            description: record.description,
            html_url: record.html_url,
            languages: None,
        }
    }

    pub fn with_stars(mut self, stars: u64) -> Self {
        self.stars = stars;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Description for display, with a placeholder when missing
    pub fn display_description(&self) -> &str {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|description| !description.is_empty())
            .unwrap_or("No description provided.")
    }
}
