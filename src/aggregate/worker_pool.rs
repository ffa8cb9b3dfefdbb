//! Bounded worker pool for per-repository language fetches
//!
//! A fixed number of tokio tasks share an index cursor into the repository
//! list. Each task claims the next unclaimed index until the list is
//! exhausted, so at most `workers` requests are in flight at any time.
//!
//! Workers keep their results local and hand them back on join. The merge
//! into the global histogram happens once, on the calling task, in
//! repository-list order, which keeps encounter order deterministic and
//! needs no lock around the histograms.

use super::Aggregate;
use crate::github::{LanguageSource, Repository};
use crate::logger::Logger;
use futures::future::join_all;
use langstats_github::{GitHubError, LanguageHistogram};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Upper bound on concurrent language requests
pub const MAX_WORKERS: usize = 10;

type Outcome = (usize, Result<LanguageHistogram, GitHubError>);

/// Number of workers for a batch of `repositories`
///
/// Grows in steps with the batch size, capped at [`MAX_WORKERS`] and never
/// larger than the batch itself.
pub fn worker_count(repositories: usize) -> usize {
    let workers = match repositories {
        0..=10 => 3,
        11..=30 => 5,
        31..=60 => 8,
        _ => MAX_WORKERS,
    };
    workers.min(repositories)
}

/// Fans language requests out over a worker pool and merges the results
#[derive(Debug, Default, Clone)]
pub struct LanguageAggregator {
    logger: Logger,
    workers: Option<usize>,
}

impl LanguageAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Use a fixed pool size instead of [`worker_count`]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Fetch and merge language counts for every repository
    ///
    /// Never fails: a repository whose fetch fails is logged, recorded in
    /// [`Aggregate::failed`] and left out of the histograms. Star totals come
    /// from the repository list and do not depend on any fetch.
    pub async fn aggregate<S>(&self, source: Arc<S>, repositories: &[Repository]) -> Aggregate
    where
        S: LanguageSource + ?Sized + 'static,
    {
        let mut aggregate = Aggregate {
            total_stars: repositories
                .iter()
                .fold(0u64, |acc, repo| acc.saturating_add(repo.stars)),
            ..Aggregate::default()
        };

        if repositories.is_empty() {
            return aggregate;
        }

        let repos: Arc<Vec<Repository>> = Arc::new(repositories.to_vec());
        let cursor = Arc::new(AtomicUsize::new(0));
        let workers = self
            .workers
            .unwrap_or_else(|| worker_count(repos.len()))
            .clamp(1, repos.len());

        self.logger.info(
            "languages",
            &format!(
                "Fetching languages for {} repositories with {} workers",
                repos.len(),
                workers
            ),
        );

        let handles: Vec<_> = (0..workers)
            .map(|_| {
                let source = Arc::clone(&source);
                let repos = Arc::clone(&repos);
                let cursor = Arc::clone(&cursor);
                let logger = self.logger;

                tokio::spawn(async move {
                    let mut outcomes: Vec<Outcome> = Vec::new();
                    loop {
                        let index = cursor.fetch_add(1, Ordering::Relaxed);
                        let Some(repo) = repos.get(index) else {
                            break;
                        };

                        let result = source.fetch_languages(repo).await;
                        match &result {
                            Ok(languages) => logger.info(
                                &repo.name,
                                &format!("Fetched {} languages", languages.len()),
                            ),
                            Err(e) => {
                                logger.warn(&repo.name, &format!("Skipping language data: {e}"))
                            }
                        }
                        outcomes.push((index, result));
                    }
                    outcomes
                })
            })
            .collect();

        let mut outcomes: Vec<Outcome> = Vec::with_capacity(repos.len());
        for joined in join_all(handles).await {
            match joined {
                Ok(local) => outcomes.extend(local),
                Err(e) => self
                    .logger
                    .error("languages", &format!("Worker task failed: {e}")),
            }
        }

        outcomes.sort_by_key(|(index, _)| *index);

        for (index, result) in outcomes {
            let repo = &repos[index];
            match result {
                Ok(languages) => {
                    aggregate.global.merge(&languages);
                    aggregate.per_repo.insert(repo.name.clone(), languages);
                }
                Err(_) => aggregate.failed.push(repo.name.clone()),
            }
        }

        self.logger.success(
            "languages",
            &format!(
                "Aggregated {} repositories ({} failed)",
                aggregate.per_repo.len(),
                aggregate.failed.len()
            ),
        );

        aggregate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_count_steps() {
        assert_eq!(worker_count(0), 0);
        assert_eq!(worker_count(2), 2);
        assert_eq!(worker_count(10), 3);
        assert_eq!(worker_count(11), 5);
        assert_eq!(worker_count(30), 5);
        assert_eq!(worker_count(31), 8);
        assert_eq!(worker_count(60), 8);
        assert_eq!(worker_count(61), MAX_WORKERS);
        assert_eq!(worker_count(500), MAX_WORKERS);
    }

    #[test]
    fn test_worker_count_is_monotonic() {
        let counts: Vec<usize> = (0..200).map(worker_count).collect();
        assert!(counts.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
