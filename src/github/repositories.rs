//! Repository listing
//!
//! Walks the account's repository pages in order and applies the exclusion
//! filter. Pages are fetched strictly one after another: whether page `n + 1`
//! exists is only known once page `n` came back full.

use super::types::Repository;
use crate::constants::github::{MAX_PAGES, PAGE_SIZE};
use crate::logger::Logger;
use crate::utils::ExclusionFilter;
use async_trait::async_trait;
use langstats_github::{GitHubClient, GitHubError, RepoRecord};

/// Source of repository listing pages
#[async_trait]
pub trait RepositoryPages: Send + Sync {
    /// Fetch one 1-based page of the account's repositories
    async fn fetch_page(
        &self,
        account: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<RepoRecord>, GitHubError>;
}

#[async_trait]
impl RepositoryPages for GitHubClient {
    async fn fetch_page(
        &self,
        account: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<RepoRecord>, GitHubError> {
        self.list_user_repos_page(account, page, per_page).await
    }
}

/// Pagination bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub per_page: u32,
    pub max_pages: u32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            per_page: PAGE_SIZE,
            max_pages: MAX_PAGES,
        }
    }
}

/// Lists an account's repositories, minus forks and denylisted names
pub struct RepositoryLister {
    filter: ExclusionFilter,
    limits: PageLimits,
    logger: Logger,
}

impl RepositoryLister {
    pub fn new(filter: ExclusionFilter) -> Self {
        Self {
            filter,
            limits: PageLimits::default(),
            logger: Logger::default(),
        }
    }

    pub fn with_limits(mut self, limits: PageLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// List repositories in API order (most recently updated first)
    ///
    /// Stops after a short page or after `max_pages` pages. Any failed page
    /// aborts the listing and the error is returned unchanged; pages fetched
    /// before it are discarded.
    pub async fn list<S>(&self, source: &S, account: &str) -> Result<Vec<Repository>, GitHubError>
    where
        S: RepositoryPages + ?Sized,
    {
        let mut records = Vec::new();

        for page in 1..=self.limits.max_pages {
            self.logger
                .info(account, &format!("Fetching repository page {page}"));

            let chunk = source.fetch_page(account, page, self.limits.per_page).await?;
            let full = chunk.len() >= self.limits.per_page as usize;
            records.extend(chunk);

            if !full {
                break;
            }
        }

        let listed = records.len();
        let repositories: Vec<Repository> = self
            .filter
            .apply(records)
            .into_iter()
            .map(|record| Repository::from_record(record, account))
            .collect();

        self.logger.success(
            account,
            &format!(
                "Listed {} repositories ({} excluded)",
                repositories.len(),
                listed - repositories.len()
            ),
        );

        Ok(repositories)
    }
}
