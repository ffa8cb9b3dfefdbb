//! Ranking and bucketing of language histograms
//!
//! [`rank`] orders a histogram by descending byte count. [`bucketize`]
//! collapses the long tail of a ranked series into one trailing "Other"
//! entry so charts stay readable.

use crate::constants::report::{
    COMPACT_MAX, COMPACT_MIN_SHARE, DETAILED_MAX, DETAILED_MIN_SHARE, OTHER_LABEL,
};
use langstats_github::LanguageHistogram;
use serde::{Deserialize, Serialize};

/// One labelled value of a series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesEntry {
    pub label: String,
    pub value: u64,
}

impl SeriesEntry {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Series ordered by descending value, optionally ending in "Other"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RankedSeries {
    entries: Vec<SeriesEntry>,
}

impl RankedSeries {
    pub fn entries(&self) -> &[SeriesEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<&SeriesEntry> {
        self.entries.first()
    }

    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, entry| acc.saturating_add(entry.value))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<u64> {
        self.entries.iter().map(|entry| entry.value).collect()
    }

    /// Same series with values converted from bytes to whole KiB, rounded
    pub fn in_kib(&self) -> RankedSeries {
        RankedSeries {
            entries: self
                .entries
                .iter()
                .map(|entry| {
                    SeriesEntry::new(entry.label.clone(), entry.value.saturating_add(512) / 1024)
                })
                .collect(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeriesEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a RankedSeries {
    type Item = &'a SeriesEntry;
    type IntoIter = std::slice::Iter<'a, SeriesEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Thresholds for collapsing a ranked series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketOptions {
    /// Entries kept by rank alone
    pub max: usize,
    /// Share of the total that keeps an entry past `max`
    pub min_share: f64,
}

impl BucketOptions {
    pub fn new(max: usize, min_share: f64) -> Self {
        Self { max, min_share }
    }

    /// Few slices, generous tail (the donut view)
    pub fn compact() -> Self {
        Self::new(COMPACT_MAX, COMPACT_MIN_SHARE)
    }

    /// More bars, small tail (the bar chart view)
    pub fn detailed() -> Self {
        Self::new(DETAILED_MAX, DETAILED_MIN_SHARE)
    }
}

/// Sort a histogram by descending value
///
/// The sort is stable: equal values keep the histogram's encounter order.
pub fn rank(histogram: &LanguageHistogram) -> RankedSeries {
    let mut entries: Vec<SeriesEntry> = histogram
        .iter()
        .map(|(language, bytes)| SeriesEntry::new(language, bytes))
        .collect();
    entries.sort_by(|a, b| b.value.cmp(&a.value));
    RankedSeries { entries }
}

/// Collapse low-ranked, low-share entries into a trailing "Other" entry
///
/// Entry `i` survives if `i < options.max` or its share of `total` is at
/// least `options.min_share`. Share is `0.0` when `total` is zero. The
/// "Other" entry is omitted when nothing, or only zero values, were
/// collapsed. The sum of values is never changed.
pub fn bucketize(ranked: &RankedSeries, total: u64, options: BucketOptions) -> RankedSeries {
    let mut kept = Vec::with_capacity(ranked.len().min(options.max.saturating_add(1)));
    let mut other = 0u64;

    for (index, entry) in ranked.iter().enumerate() {
        let share = if total == 0 {
            0.0
        } else {
            entry.value as f64 / total as f64
        };

        if index < options.max || share >= options.min_share {
            kept.push(entry.clone());
        } else {
            other = other.saturating_add(entry.value);
        }
    }

    if other > 0 {
        kept.push(SeriesEntry::new(OTHER_LABEL, other));
    }

    RankedSeries { entries: kept }
}
