//! Credential resolution
//!
//! Precedence, highest first:
//!
//! 1. the token persisted with `langstats token set` (re-read on every call)
//! 2. the embedded token: config file `token`, then `LANGSTATS_TOKEN`, then
//!    `GITHUB_TOKEN` (captured once at startup)
//! 3. none, and requests go out unauthenticated

use super::store::TokenStore;
use crate::constants::credentials::{GITHUB_TOKEN_ENV, TOKEN_ENV};
use crate::logger::Logger;
use langstats_github::CredentialSource;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};

/// Provider name of the persisted store
pub const STORED_SOURCE: &str = "token store";

/// Provider name of the config file `token` field
pub const CONFIG_SOURCE: &str = "config file";

/// One named provider and the value it produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderValue {
    pub name: &'static str,
    pub value: Option<String>,
}

impl ProviderValue {
    pub fn new(name: &'static str, value: Option<String>) -> Self {
        Self { name, value }
    }
}

/// A credential together with the provider that supplied it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCredential {
    pub source: &'static str,
    pub token: String,
}

/// First provider with a non-empty value wins; values are trimmed
pub fn first_present<I>(providers: I) -> Option<ResolvedCredential>
where
    I: IntoIterator<Item = ProviderValue>,
{
    providers.into_iter().find_map(|provider| {
        let token = provider.value?.trim().to_string();
        (!token.is_empty()).then_some(ResolvedCredential {
            source: provider.name,
            token,
        })
    })
}

/// Credential fixed by the deployment, resolved once per run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbeddedCredential(Option<ResolvedCredential>);

impl EmbeddedCredential {
    /// Capture from the config file value and the process environment
    pub fn capture(config_token: Option<String>) -> Self {
        Self::from_providers([
            ProviderValue::new(CONFIG_SOURCE, config_token),
            ProviderValue::new(TOKEN_ENV, std::env::var(TOKEN_ENV).ok()),
            ProviderValue::new(GITHUB_TOKEN_ENV, std::env::var(GITHUB_TOKEN_ENV).ok()),
        ])
    }

    pub fn from_providers<I>(providers: I) -> Self
    where
        I: IntoIterator<Item = ProviderValue>,
    {
        Self(first_present(providers))
    }

    pub fn get(&self) -> Option<&ResolvedCredential> {
        self.0.as_ref()
    }
}

/// Layered credential lookup handed to the GitHub client
pub struct CredentialResolver {
    store: Option<TokenStore>,
    embedded: EmbeddedCredential,
    logger: Logger,
    store_warned: AtomicBool,
}

impl CredentialResolver {
    pub fn new(store: Option<TokenStore>, embedded: EmbeddedCredential) -> Self {
        Self {
            store,
            embedded,
            logger: Logger::default(),
            store_warned: AtomicBool::new(false),
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Resolve the credential and report where it came from
    ///
    /// An unreadable store is treated as empty. It is logged the first
    /// time only, since the store is read again for every request.
    pub fn resolve_with_source(&self) -> Option<ResolvedCredential> {
        let stored = self.store.as_ref().and_then(|store| match store.load() {
            Ok(token) => token,
            Err(e) => {
                self.warn_unreadable_store(&e);
                None
            }
        });

        first_present([
            ProviderValue::new(STORED_SOURCE, stored),
            ProviderValue::new(
                self.embedded.get().map_or(CONFIG_SOURCE, |c| c.source),
                self.embedded.get().map(|c| c.token.clone()),
            ),
        ])
    }

    pub fn resolve(&self) -> Option<String> {
        self.resolve_with_source().map(|resolved| resolved.token)
    }

    /// Returns whether a warning was printed
    fn warn_unreadable_store(&self, err: &anyhow::Error) -> bool {
        if self.store_warned.swap(true, Ordering::Relaxed) {
            return false;
        }
        self.logger
            .warn(STORED_SOURCE, &format!("Ignoring stored token: {err:#}"));
        true
    }
}

impl CredentialSource for CredentialResolver {
    fn credential(&self) -> Option<String> {
        self.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_present_skips_empty_values() {
        let resolved = first_present([
            ProviderValue::new("a", None),
            ProviderValue::new("b", Some("   ".to_string())),
            ProviderValue::new("c", Some(" tok ".to_string())),
            ProviderValue::new("d", Some("later".to_string())),
        ]);

        assert_eq!(
            resolved,
            Some(ResolvedCredential {
                source: "c",
                token: "tok".to_string()
            })
        );
    }

    #[test]
    fn test_first_present_none() {
        assert_eq!(first_present(Vec::new()), None);
    }

    #[test]
    fn test_unreadable_store_warns_once_but_is_reread() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = TokenStore::new(dir.path().join("credentials.json"));
        std::fs::write(store.path(), "not json").unwrap();
        let embedded = EmbeddedCredential::from_providers([ProviderValue::new(
            CONFIG_SOURCE,
            Some("from-config".to_string()),
        )]);
        let resolver = CredentialResolver::new(Some(store.clone()), embedded);

        assert_eq!(resolver.resolve().as_deref(), Some("from-config"));
        assert!(resolver.store_warned.load(Ordering::Relaxed));
        let err = anyhow::anyhow!("still corrupt");
        assert!(!resolver.warn_unreadable_store(&err));

        std::fs::write(store.path(), r#"{"gh_token": "repaired"}"#).unwrap();
        assert_eq!(resolver.resolve().as_deref(), Some("repaired"));
    }

    #[test]
    fn test_embedded_without_store() {
        let embedded = EmbeddedCredential::from_providers([ProviderValue::new(
            CONFIG_SOURCE,
            Some("from-config".to_string()),
        )]);
        let resolver = CredentialResolver::new(None, embedded);

        let resolved = resolver.resolve_with_source().unwrap();
        assert_eq!(resolved.source, CONFIG_SOURCE);
        assert_eq!(resolved.token, "from-config");
    }
}
