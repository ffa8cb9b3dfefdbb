//! Repository listing operations

use crate::client::GitHubClient;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Largest page the listing endpoint serves
pub const MAX_PER_PAGE: u32 = 100;

/// A repository as returned by `GET /users/{account}/repos`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RepoRecord {
    pub name: String,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub topics: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub languages_url: Option<String>,
    #[serde(default)]
    pub owner: Option<RepoOwner>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RepoOwner {
    pub login: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl GitHubClient {
    /// Fetch one page of an account's own repositories, most recently updated first
    ///
    /// # Arguments
    /// * `account` - User login
    /// * `page` - 1-based page number
    /// * `per_page` - Page size, capped at [`MAX_PER_PAGE`]
    pub async fn list_user_repos_page(
        &self,
        account: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<RepoRecord>> {
        let url = self.endpoint(&format!(
            "users/{}/repos?per_page={}&page={}&type=owner&sort=updated",
            account,
            per_page.min(MAX_PER_PAGE),
            page
        ));
        self.get_json(&url).await
    }
}
