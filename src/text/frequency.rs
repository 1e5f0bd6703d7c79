// Word frequency counting for a single document.
//
// A document's text arrives as lines; each line is split on whitespace runs,
// every token goes through the normalizer, and surviving words are tallied.
// Counting is commutative, so line order never changes the result.

use std::collections::HashMap;
use std::io::BufRead;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::normalize::DiacriticFolding;
use super::traits::WordNormalizer;

/// Mapping from canonical word to how many times it occurred (always >= 1).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyMap {
    counts: HashMap<String, u32>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `word`, inserting it with 1 if absent.
    /// Counts saturate at `u32::MAX`.
    pub fn record(&mut self, word: String) {
        let count = self.counts.entry(word).or_insert(0);
        *count = count.saturating_add(1);
    }

    pub fn get(&self, word: &str) -> Option<u32> {
        self.counts.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of words recorded.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| c as u64).sum()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// The `n` most frequent words, highest count first. Ties are broken
    /// alphabetically so the output is stable across runs.
    pub fn top(&self, n: usize) -> Vec<(&str, u32)> {
        let mut ranked: Vec<(&str, u32)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }
}

impl AsRef<FrequencyMap> for FrequencyMap {
    fn as_ref(&self) -> &FrequencyMap {
        self
    }
}

impl FromIterator<String> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut map = FrequencyMap::new();
        for word in iter {
            map.record(word);
        }
        map
    }
}

/// Accumulates word counts for one document.
pub struct FrequencyCounter<N = DiacriticFolding> {
    normalizer: N,
    map: FrequencyMap,
}

impl FrequencyCounter {
    /// A counter using the default case- and diacritic-folding normalizer.
    pub fn new() -> Self {
        Self::with_normalizer(DiacriticFolding)
    }
}

impl Default for FrequencyCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: WordNormalizer> FrequencyCounter<N> {
    pub fn with_normalizer(normalizer: N) -> Self {
        Self {
            normalizer,
            map: FrequencyMap::new(),
        }
    }

    /// Split a line on whitespace and record every token that normalizes
    /// to a word. Returns how many words were recorded.
    pub fn feed_line(&mut self, line: &str) -> usize {
        let mut recorded = 0;
        for token in line.split_whitespace() {
            if let Some(word) = self.normalizer.normalize(token) {
                self.map.record(word);
                recorded += 1;
            }
        }
        recorded
    }

    /// Consume the counter and hand back the finished mapping.
    pub fn finish(self) -> FrequencyMap {
        self.map
    }
}

/// Count every line of an in-memory document.
pub fn count_lines<I, S>(lines: I) -> FrequencyMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counter = FrequencyCounter::new();
    for line in lines {
        counter.feed_line(line.as_ref());
    }
    counter.finish()
}

/// Count every line readable from `reader`.
///
/// Read failures (including invalid UTF-8) are returned to the caller; the
/// partially-built mapping is discarded.
pub fn count_reader<R: BufRead>(reader: R) -> Result<FrequencyMap> {
    let mut counter = FrequencyCounter::new();
    for line in reader.lines() {
        counter.feed_line(&line?);
    }
    Ok(counter.finish())
}
