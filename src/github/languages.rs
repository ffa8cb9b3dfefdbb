//! Per-repository language lookups

use super::types::Repository;
use async_trait::async_trait;
use langstats_github::{GitHubClient, GitHubError, LanguageHistogram};

/// Source of per-repository language byte counts
#[async_trait]
pub trait LanguageSource: Send + Sync {
    async fn fetch_languages(&self, repo: &Repository) -> Result<LanguageHistogram, GitHubError>;
}

#[async_trait]
impl LanguageSource for GitHubClient {
    async fn fetch_languages(&self, repo: &Repository) -> Result<LanguageHistogram, GitHubError> {
        self.get_languages(&repo.owner, &repo.name).await
    }
}
