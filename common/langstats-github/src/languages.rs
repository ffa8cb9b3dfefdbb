//! Language byte counts
//!
//! [`LanguageHistogram`] keeps languages in first-encounter order. That order
//! is the tie-break when histograms are ranked, so it survives
//! deserialization, merging and serialization unchanged.

use crate::client::GitHubClient;
use crate::error::Result;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Mapping from language name to byte count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageHistogram {
    entries: Vec<(String, u64)>,
}

impl LanguageHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `bytes` to `language`, appending it if unseen
    pub fn add(&mut self, language: &str, bytes: u64) {
        match self.entries.iter_mut().find(|(name, _)| name == language) {
            Some((_, count)) => *count = count.saturating_add(bytes),
            None => self.entries.push((language.to_string(), bytes)),
        }
    }

    /// Fold another histogram into this one
    pub fn merge(&mut self, other: &LanguageHistogram) {
        for (language, bytes) in other.iter() {
            self.add(language, bytes);
        }
    }

    pub fn get(&self, language: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, bytes)| *bytes)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all byte counts
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, (_, bytes)| acc.saturating_add(*bytes))
    }

    /// Entries in encounter order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries
            .iter()
            .map(|(name, bytes)| (name.as_str(), *bytes))
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for LanguageHistogram {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for (language, bytes) in iter {
            histogram.add(&language.into(), bytes);
        }
        histogram
    }
}

impl IntoIterator for LanguageHistogram {
    type Item = (String, u64);
    type IntoIter = std::vec::IntoIter<(String, u64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for LanguageHistogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (language, bytes) in &self.entries {
            map.serialize_entry(language, bytes)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LanguageHistogram {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct HistogramVisitor;

        impl<'de> Visitor<'de> for HistogramVisitor {
            type Value = LanguageHistogram;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of language names to byte counts")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut histogram = LanguageHistogram::new();
                while let Some((language, bytes)) = access.next_entry::<String, u64>()? {
                    histogram.add(&language, bytes);
                }
                Ok(histogram)
            }
        }

        deserializer.deserialize_map(HistogramVisitor)
    }
}

impl GitHubClient {
    /// Get the language byte counts of a repository
    ///
    /// Calls `GET /repos/{owner}/{repo}/languages`. A repository with no
    /// detected languages yields an empty histogram, not an error.
    pub async fn get_languages(&self, owner: &str, repo: &str) -> Result<LanguageHistogram> {
        let url = self.endpoint(&format!("repos/{}/{}/languages", owner, repo));
        self.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_keeps_document_order() {
        let histogram: LanguageHistogram =
            serde_json::from_str(r#"{"Rust": 300, "C": 500, "Shell": 20}"#).unwrap();

        let names: Vec<&str> = histogram.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Rust", "C", "Shell"]);
        assert_eq!(histogram.total(), 820);
    }

    #[test]
    fn test_deserialize_empty_object() {
        let histogram: LanguageHistogram = serde_json::from_str("{}").unwrap();
        assert!(histogram.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_negative_counts() {
        let result: serde_json::Result<LanguageHistogram> =
            serde_json::from_str(r#"{"Rust": -1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_sums_and_appends() {
        let mut global: LanguageHistogram = [("A", 100u64)].into_iter().collect();
        let other: LanguageHistogram = [("B", 50u64), ("A", 50u64)].into_iter().collect();

        global.merge(&other);

        assert_eq!(global.get("A"), Some(150));
        assert_eq!(global.get("B"), Some(50));
        let names: Vec<&str> = global.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_language_names_are_case_sensitive() {
        let histogram: LanguageHistogram = [("Rust", 1u64), ("rust", 2u64)].into_iter().collect();
        assert_eq!(histogram.len(), 2);
        assert_eq!(histogram.get("RUST"), None);
    }

    #[test]
    fn test_serialize_as_ordered_map() {
        let histogram: LanguageHistogram = [("Go", 2u64), ("Ada", 1u64)].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&histogram).unwrap(),
            r#"{"Go":2,"Ada":1}"#
        );
    }
}
