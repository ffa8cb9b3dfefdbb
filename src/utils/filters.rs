//! Repository filtering utilities

use langstats_github::RepoRecord;
use std::collections::HashSet;

/// Drops forks and denylisted repositories from a listing
///
/// Names are matched exactly and case-sensitively.
#[derive(Debug, Clone, Default)]
pub struct ExclusionFilter {
    names: HashSet<String>,
}

impl ExclusionFilter {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `name` is on the denylist
    pub fn is_denied(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Whether a listing entry is left out of all statistics
    pub fn excludes(&self, record: &RepoRecord) -> bool {
        record.fork || self.is_denied(&record.name)
    }

    /// Keep the entries that pass, in their original order
    pub fn apply(&self, records: Vec<RepoRecord>) -> Vec<RepoRecord> {
        records
            .into_iter()
            .filter(|record| !self.excludes(record))
            .collect()
    }
}
