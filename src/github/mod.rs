//! GitHub integration module
//!
//! Builds the domain view of an account on top of the `langstats-github`
//! client. The I/O seams are traits so the pipeline can run against any
//! source of pages and language counts.
//!
//! ## Architecture
//!
//! - [`repositories`]: Paginated listing with fork and denylist filtering
//! - [`languages`]: Per-repository language byte counts
//! - [`types`]: Domain types built from API responses
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use langstats::github::{GitHubClient, RepositoryLister};
//! use langstats::utils::ExclusionFilter;
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = GitHubClient::new(Arc::new(None::<String>));
//! let lister = RepositoryLister::new(ExclusionFilter::new([".github"]));
//! let repos = lister.list(&client, "octocat").await?;
//! println!("{} repositories", repos.len());
//! # Ok(())
//! # }
//! ```

pub mod languages;
pub mod repositories;
pub mod types;

pub use languages::LanguageSource;
pub use repositories::{PageLimits, RepositoryLister, RepositoryPages};
pub use types::Repository;

// Re-export the client crate for convenience
pub use langstats_github::{
    CredentialSource, GitHubClient, GitHubError, LanguageHistogram, RepoRecord,
};
