//! GitHub client implementation
//!
//! [`GitHubClient`] owns the HTTP client and the credential source. Endpoint
//! specific operations live in sibling modules as `impl GitHubClient` blocks.

use crate::error::{GitHubError, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, CACHE_CONTROL, USER_AGENT};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// GitHub API base URL
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Media type requested on every call
pub const ACCEPT_HEADER: &str = "application/vnd.github+json";

/// REST API version pinned on every call
pub const API_VERSION: &str = "2022-11-28";

/// Default User-Agent header for API requests
pub const DEFAULT_USER_AGENT: &str = concat!("langstats/", env!("CARGO_PKG_VERSION"));

/// Supplies the bearer credential for outbound requests
///
/// The client asks on every request and never caches the answer, so a
/// source backed by persisted state sees updates without a restart.
pub trait CredentialSource: Send + Sync {
    fn credential(&self) -> Option<String>;
}

impl CredentialSource for Option<String> {
    fn credential(&self) -> Option<String> {
        self.clone()
    }
}

/// GitHub API client for read-only REST calls
#[derive(Clone)]
pub struct GitHubClient {
    pub(crate) client: reqwest::Client,
    pub(crate) api_base: String,
    pub(crate) credentials: Arc<dyn CredentialSource>,
}

impl GitHubClient {
    /// Create a new client that asks `credentials` for a token on each request
    pub fn new(credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            credentials,
        }
    }

    /// Point the client at another API root (GitHub Enterprise, a local stub)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Whether a credential currently resolves
    pub fn is_authenticated(&self) -> bool {
        self.credentials.credential().is_some()
    }

    /// Absolute URL for an API path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }

    /// Build a GET request with the standard headers attached
    pub(crate) fn prepare(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self
            .client
            .get(url)
            .header(USER_AGENT, DEFAULT_USER_AGENT)
            .header(ACCEPT, ACCEPT_HEADER)
            .header("X-GitHub-Api-Version", API_VERSION)
            .header(CACHE_CONTROL, "no-cache");

        if let Some(token) = self.credentials.credential() {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        request
    }

    /// Fetch a URL and return the body as untyped JSON
    ///
    /// # Errors
    /// - [`GitHubError::Network`] if no response was received
    /// - [`GitHubError::RateLimit`] if the quota is exhausted
    /// - [`GitHubError::Http`] for any other non-success status
    /// - [`GitHubError::Decode`] if the body is not JSON
    pub async fn request(&self, url: &str) -> Result<Value> {
        self.get_json(url).await
    }

    /// Fetch a URL and deserialize the body into `T`
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.prepare(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let headers = response.headers().clone();
            let body = response.text().await.unwrap_or_default();
            return Err(GitHubError::from_response(status, &headers, body));
        }

        let bytes = response.bytes().await?;

        serde_json::from_slice(&bytes).map_err(|e| GitHubError::decode(e.to_string()))
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new(Arc::new(None::<String>))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct SwitchableToken(Mutex<Option<String>>);

    impl CredentialSource for SwitchableToken {
        fn credential(&self) -> Option<String> {
            self.0.lock().unwrap().clone()
        }
    }

    #[test]
    fn test_prepare_sets_standard_headers() {
        let client = GitHubClient::default();
        let request = client
            .prepare("https://api.github.com/users/octocat/repos")
            .build()
            .unwrap();

        let headers = request.headers();
        assert_eq!(headers[ACCEPT], ACCEPT_HEADER);
        assert_eq!(headers["X-GitHub-Api-Version"], API_VERSION);
        assert_eq!(headers[CACHE_CONTROL], "no-cache");
        assert_eq!(headers[USER_AGENT], DEFAULT_USER_AGENT);
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_prepare_reads_credential_on_every_request() {
        let source = Arc::new(SwitchableToken(Mutex::new(None)));
        let client = GitHubClient::new(source.clone());

        let first = client.prepare("https://api.github.com/").build().unwrap();
        assert!(first.headers().get(AUTHORIZATION).is_none());
        assert!(!client.is_authenticated());

        *source.0.lock().unwrap() = Some("ghp_fresh".to_string());

        let second = client.prepare("https://api.github.com/").build().unwrap();
        assert_eq!(second.headers()[AUTHORIZATION], "Bearer ghp_fresh");
        assert!(client.is_authenticated());
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let client = GitHubClient::default().with_api_base("https://ghe.example.com/api/v3/");
        assert_eq!(client.api_base(), "https://ghe.example.com/api/v3");
        assert_eq!(
            client.endpoint("/repos/a/b/languages"),
            "https://ghe.example.com/api/v3/repos/a/b/languages"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let client = GitHubClient::default().with_api_base("http://127.0.0.1:9");
        let err = client.request(&client.endpoint("/rate_limit")).await.unwrap_err();
        assert!(matches!(err, GitHubError::Network { .. }), "got {err:?}");
    }
}
