//! Dashboard pipeline
//!
//! Lists the account's repositories, aggregates their languages and selects
//! the gallery. The resulting [`Dashboard`] is everything a renderer needs.

use crate::aggregate::LanguageAggregator;
use crate::config::Config;
use crate::github::{LanguageSource, Repository, RepositoryLister, RepositoryPages};
use crate::logger::Logger;
use crate::ranking::{BucketOptions, RankedSeries, bucketize, rank};
use langstats_github::{GitHubError, LanguageHistogram};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Rendering handoff
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub account: String,
    pub repositories: Vec<Repository>,
    /// Most-starred repositories with their languages attached
    pub top_starred: Vec<Repository>,
    pub global: LanguageHistogram,
    pub per_repo: BTreeMap<String, LanguageHistogram>,
    pub total_stars: u64,
    /// Repositories whose language fetch failed
    pub failed: Vec<String>,
}

impl Dashboard {
    /// Global histogram ranked by bytes
    pub fn ranked(&self) -> RankedSeries {
        rank(&self.global)
    }

    /// Global histogram ranked and bucketed for one view
    pub fn series(&self, options: BucketOptions) -> RankedSeries {
        bucketize(&self.ranked(), self.global.total(), options)
    }

    /// Language with the most bytes
    pub fn top_language(&self) -> Option<String> {
        self.ranked().first().map(|entry| entry.label.clone())
    }

    pub fn has_language_data(&self) -> bool {
        !self.global.is_empty()
    }
}

/// The `limit` most-starred repositories, languages attached where known
///
/// Stable: repositories with equal stars keep their listing order.
pub fn top_starred(
    repositories: &[Repository],
    per_repo: &BTreeMap<String, LanguageHistogram>,
    limit: usize,
) -> Vec<Repository> {
    let mut sorted: Vec<&Repository> = repositories.iter().collect();
    sorted.sort_by(|a, b| b.stars.cmp(&a.stars));

    sorted
        .into_iter()
        .take(limit)
        .map(|repo| {
            let mut repo = repo.clone();
            if let Some(languages) = per_repo.get(&repo.name) {
                repo.languages = Some(languages.clone());
            }
            repo
        })
        .collect()
}

/// Lister, aggregator and gallery selection for one account
pub struct DashboardPipeline {
    account: String,
    lister: RepositoryLister,
    aggregator: LanguageAggregator,
    gallery_size: usize,
}

impl DashboardPipeline {
    pub fn new(
        account: impl Into<String>,
        lister: RepositoryLister,
        aggregator: LanguageAggregator,
        gallery_size: usize,
    ) -> Self {
        Self {
            account: account.into(),
            lister,
            aggregator,
            gallery_size,
        }
    }

    /// Pipeline configured from `config`
    pub fn from_config(config: &Config, logger: Logger) -> Self {
        Self::new(
            config.account.clone(),
            RepositoryLister::new(config.exclusion_filter())
                .with_limits(config.page_limits())
                .with_logger(logger),
            LanguageAggregator::new().with_logger(logger),
            config.gallery_size,
        )
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    /// Run the whole pipeline
    ///
    /// # Errors
    /// Fails only when the repository listing fails. Individual language
    /// fetch failures are tolerated and reported in [`Dashboard::failed`].
    pub async fn run<S>(&self, source: Arc<S>) -> Result<Dashboard, GitHubError>
    where
        S: RepositoryPages + LanguageSource + 'static,
    {
        let repositories = self.lister.list(source.as_ref(), &self.account).await?;
        let aggregate = self.aggregator.aggregate(source, &repositories).await;
        let top_starred = top_starred(&repositories, &aggregate.per_repo, self.gallery_size);

        Ok(Dashboard {
            account: self.account.clone(),
            repositories,
            top_starred,
            global: aggregate.global,
            per_repo: aggregate.per_repo,
            total_stars: aggregate.total_stars,
            failed: aggregate.failed,
        })
    }
}
