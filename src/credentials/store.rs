//! Persisted credential store
//!
//! A small JSON key/value file that outlives the process. Only one key is
//! used, [`TOKEN_KEY`](crate::constants::credentials::TOKEN_KEY), but other
//! keys found in the file are preserved on write.

use crate::constants::credentials::{HOME_ENV, STORE_DIR, STORE_FILE, TOKEN_KEY};
use crate::utils::ensure_parent_exists;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File-backed store for the user's GitHub token
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location
    ///
    /// `$LANGSTATS_HOME/credentials.json` if set, else
    /// `$HOME/.langstats/credentials.json`, else `.langstats/credentials.json`
    /// relative to the working directory.
    pub fn default_location() -> Self {
        Self::new(default_store_path(
            std::env::var(HOME_ENV).ok(),
            std::env::var("HOME").ok(),
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted token, if any
    ///
    /// A missing file means no token. Empty values count as absent.
    pub fn load(&self) -> Result<Option<String>> {
        let entries = self.read_entries()?;
        Ok(entries
            .get(TOKEN_KEY)
            .map(|token| token.trim())
            .filter(|token| !token.is_empty())
            .map(str::to_string))
    }

    /// Persist `token`; an empty value clears the stored token instead
    pub fn save(&self, token: &str) -> Result<()> {
        let token = token.trim();
        let mut entries = self.read_entries()?;
        if token.is_empty() {
            if entries.remove(TOKEN_KEY).is_none() {
                return Ok(());
            }
        } else {
            entries.insert(TOKEN_KEY.to_string(), token.to_string());
        }
        self.write_entries(&entries)
    }

    /// Remove the stored token
    pub fn clear(&self) -> Result<()> {
        self.save("")
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read credential store {}", self.path.display())
                });
            }
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).with_context(|| {
            format!("Failed to parse credential store {}", self.path.display())
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        ensure_parent_exists(&self.path)?;
        let json = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, format!("{json}\n")).with_context(|| {
            format!("Failed to write credential store {}", self.path.display())
        })
    }
}

fn default_store_path(langstats_home: Option<String>, home: Option<String>) -> PathBuf {
    if let Some(dir) = langstats_home.filter(|dir| !dir.trim().is_empty()) {
        return PathBuf::from(dir).join(STORE_FILE);
    }
    match home.filter(|dir| !dir.trim().is_empty()) {
        Some(home) => PathBuf::from(home).join(STORE_DIR).join(STORE_FILE),
        None => PathBuf::from(STORE_DIR).join(STORE_FILE),
    }
}
