//! Language aggregation across repositories
//!
//! [`LanguageAggregator`] fetches every repository's language counts with a
//! bounded worker pool and folds them into an [`Aggregate`].

pub mod worker_pool;

pub use worker_pool::{LanguageAggregator, MAX_WORKERS, worker_count};

use langstats_github::LanguageHistogram;
use serde::Serialize;
use std::collections::BTreeMap;

/// Merged language statistics
///
/// `global` is always the sum of the histograms in `per_repo`. Repositories
/// whose fetch failed appear in `failed` and nowhere else; a repository with
/// no detected languages appears in `per_repo` with an empty histogram.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Aggregate {
    pub global: LanguageHistogram,
    pub per_repo: BTreeMap<String, LanguageHistogram>,
    pub total_stars: u64,
    pub failed: Vec<String>,
}
