//! Views over a built concordance: word filtering and frequency data.

use crate::concordance::Concordance;
use crate::ConcordanceEntry;
use serde::{Deserialize, Serialize};

/// One word and how often it occurs, as fed to a word cloud.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WordFrequency {
    #[serde(rename = "text")]
    pub word: String,
    #[serde(rename = "value")]
    pub count: usize,
}

impl Concordance {
    /// Entries whose word contains `needle`, ignoring case. An empty needle keeps everything.
    pub fn filter(&self, needle: &str) -> Vec<&ConcordanceEntry> {
        let needle = needle.to_lowercase();
        self.iter().filter(|e| e.word.contains(&needle)).collect()
    }

    /// Occurrence count per word, in concordance order.
    pub fn frequencies(&self) -> Vec<WordFrequency> {
        self.iter()
            .map(|e| WordFrequency { word: e.word.clone(), count: e.count() })
            .collect()
    }

    /// Sum of every entry's occurrence count.
    pub fn total_occurrences(&self) -> usize {
        self.iter().map(ConcordanceEntry::count).sum()
    }

    /// Smallest and largest occurrence count.
    pub fn frequency_range(&self) -> Option<(usize, usize)> {
        let counts = self.iter().map(ConcordanceEntry::count);
        let min = counts.clone().min()?;
        let max = counts.max()?;
        Some((min, max))
    }
}
