//! GitHub API client library
//!
//! Read-only access to the GitHub REST endpoints needed to gather language
//! statistics for an account.
//!
//! ## Modules
//!
//! - [`client`]: Core client, request headers and credential lookup
//! - [`error`]: Failure taxonomy, including rate-limit detection
//! - [`repositories`]: Paginated repository listing
//! - [`languages`]: Per-repository language byte counts

mod client;
mod error;
mod languages;
mod repositories;

// Re-export public API
pub use client::{
    ACCEPT_HEADER, API_VERSION, CredentialSource, DEFAULT_API_BASE, DEFAULT_USER_AGENT,
    GitHubClient,
};
pub use error::{
    GitHubError, RATE_LIMIT_REMAINING_HEADER, RATE_LIMIT_RESET_HEADER, Result,
};
pub use languages::LanguageHistogram;
pub use repositories::{MAX_PER_PAGE, RepoOwner, RepoRecord};
