//! Common test support utilities and fixtures
//!
//! In-memory stand-ins for the GitHub API, so pipeline tests run without
//! network access.

#![allow(dead_code)]

use async_trait::async_trait;
use langstats::github::{LanguageSource, Repository, RepositoryPages};
use langstats_github::{GitHubError, LanguageHistogram, RepoRecord};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Build a listing entry the way the API would return it
pub fn record(name: &str, fork: bool, stars: u64) -> RepoRecord {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "fork": fork,
        "stargazers_count": stars,
        "html_url": format!("https://github.com/octocat/{name}"),
        "owner": { "login": "octocat" },
    }))
    .expect("valid repository record")
}

pub fn histogram(pairs: &[(&str, u64)]) -> LanguageHistogram {
    pairs.iter().map(|(name, bytes)| (*name, *bytes)).collect()
}

/// Fake API serving canned pages and per-repository languages
#[derive(Default)]
pub struct FakeGitHub {
    pages: Vec<Result<Vec<RepoRecord>, GitHubError>>,
    languages: HashMap<String, Result<LanguageHistogram, GitHubError>>,
    delay: Option<Duration>,
    page_calls: Mutex<Vec<u32>>,
    language_calls: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next page to serve
    pub fn with_page(mut self, page: Vec<RepoRecord>) -> Self {
        self.pages.push(Ok(page));
        self
    }

    /// Append a page that fails
    pub fn with_failing_page(mut self, error: GitHubError) -> Self {
        self.pages.push(Err(error));
        self
    }

    pub fn with_languages(mut self, repo: &str, pairs: &[(&str, u64)]) -> Self {
        self.languages
            .insert(repo.to_string(), Ok(histogram(pairs)));
        self
    }

    pub fn with_failing_languages(mut self, repo: &str, error: GitHubError) -> Self {
        self.languages.insert(repo.to_string(), Err(error));
        self
    }

    /// Hold every language request open for `delay`
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Pages requested so far, in request order
    pub fn page_calls(&self) -> Vec<u32> {
        self.page_calls.lock().unwrap().clone()
    }

    pub fn language_calls(&self) -> usize {
        self.language_calls.load(Ordering::SeqCst)
    }

    /// Most language requests ever open at the same time
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RepositoryPages for FakeGitHub {
    async fn fetch_page(
        &self,
        _account: &str,
        page: u32,
        _per_page: u32,
    ) -> Result<Vec<RepoRecord>, GitHubError> {
        self.page_calls.lock().unwrap().push(page);
        match self.pages.get(page as usize - 1) {
            Some(Ok(records)) => Ok(records.clone()),
            Some(Err(e)) => Err(e.clone()),
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl LanguageSource for FakeGitHub {
    async fn fetch_languages(&self, repo: &Repository) -> Result<LanguageHistogram, GitHubError> {
        self.language_calls.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(current, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        match self.languages.get(&repo.name) {
            Some(Ok(languages)) => Ok(languages.clone()),
            Some(Err(e)) => Err(e.clone()),
            None => Ok(LanguageHistogram::new()),
        }
    }
}
