//! Configuration file loading and saving

use crate::constants::github::{DEFAULT_ACCOUNT, DEFAULT_EXCLUDED, MAX_PAGES, PAGE_SIZE};
use crate::constants::report::GALLERY_SIZE;
use crate::credentials::TokenStore;
use crate::github::PageLimits;
use crate::ranking::BucketOptions;
use crate::utils::ExclusionFilter;
use crate::utils::validators;
use anyhow::{Context, Result};
use langstats_github::DEFAULT_API_BASE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Bucketing thresholds per presentation view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Views {
    pub compact: BucketOptions,
    pub detailed: BucketOptions,
}

impl Default for Views {
    fn default() -> Self {
        Self {
            compact: BucketOptions::compact(),
            detailed: BucketOptions::detailed(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Account whose repositories are reported on
    pub account: String,
    /// Repository names left out of all statistics
    pub exclude: Vec<String>,
    /// Token shipped with the deployment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub api_base: String,
    pub max_pages: u32,
    pub gallery_size: usize,
    /// Credential store location, overriding the default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_store: Option<PathBuf>,
    pub views: Views,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {path}"))?;

        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {path}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Load `path`, or fall back to defaults when it is the implicit default
    /// file and does not exist
    pub fn load_or_default(path: &str, explicit: bool) -> Result<Self> {
        if !explicit && !Path::new(path).exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, format!("---\n{}", yaml))?;
        Ok(())
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        validators::validate_config(self).map_err(validators::validation_errors_to_anyhow)
    }

    /// Denylist: configured names, built-in names and the profile repository
    pub fn excluded_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.exclude.clone();
        names.extend(DEFAULT_EXCLUDED.iter().map(|name| name.to_string()));
        names.push(self.account.clone());
        names.sort();
        names.dedup();
        names
    }

    pub fn exclusion_filter(&self) -> ExclusionFilter {
        ExclusionFilter::new(self.excluded_names())
    }

    pub fn page_limits(&self) -> PageLimits {
        PageLimits {
            per_page: PAGE_SIZE,
            max_pages: self.max_pages,
        }
    }

    /// Credential store, at the configured or the default location
    pub fn token_store(&self) -> TokenStore {
        match &self.token_store {
            Some(path) => TokenStore::new(path.clone()),
            None => TokenStore::default_location(),
        }
    }

    /// Create a new configuration with built-in defaults
    pub fn new() -> Self {
        Self {
            account: DEFAULT_ACCOUNT.to_string(),
            exclude: Vec::new(),
            token: None,
            api_base: DEFAULT_API_BASE.to_string(),
            max_pages: MAX_PAGES,
            gallery_size: GALLERY_SIZE,
            token_store: None,
            views: Views::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
