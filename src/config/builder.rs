//! Configuration builder utilities

use super::{Config, Views};
use crate::ranking::BucketOptions;
use std::path::PathBuf;

/// Builder for assembling a configuration in code
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Start from the built-in defaults for `account`
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            config: Config {
                account: account.into(),
                ..Config::default()
            },
        }
    }

    /// Add repository names to the denylist
    pub fn with_excluded<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.exclude.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set the token shipped with the deployment
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Some(token.into());
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.config.api_base = api_base.into();
        self
    }

    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.config.max_pages = max_pages;
        self
    }

    pub fn with_gallery_size(mut self, gallery_size: usize) -> Self {
        self.config.gallery_size = gallery_size;
        self
    }

    pub fn with_token_store(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.token_store = Some(path.into());
        self
    }

    pub fn with_views(mut self, compact: BucketOptions, detailed: BucketOptions) -> Self {
        self.config.views = Views { compact, detailed };
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        self.config
    }
}
