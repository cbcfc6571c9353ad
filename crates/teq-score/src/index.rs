//! Per-sentence occurrence counts for candidate items.

use std::collections::HashMap;

use teq_context::ContextSet;
use teq_corpus::CorpusFile;

use crate::features::FeatureSet;

/// Occurrence counts of one item: sentence id → count within that sentence.
pub type SentenceCounts = HashMap<String, u32>;

/// Item → per-sentence occurrence counts, over the context universe.
///
/// Built once per (corpus file, feature set) pass and not mutated
/// afterwards. Only sentences present in the context universe are
/// visited: sentences outside it carry zero context weight and would
/// drop out of every scoring dot product anyway.
#[derive(Debug, Default)]
pub struct OccurrenceIndex {
    /// Counts per item.
    counts: HashMap<String, SentenceCounts>,
}

impl OccurrenceIndex {
    /// Counts every item the feature schemes emit for every universe
    /// sentence of the corpus.
    ///
    /// Linear in the number of emitted items; for the subsequence
    /// scheme that is quadratic in sentence length.
    pub fn build(corpus: &CorpusFile, universe: &ContextSet, features: &FeatureSet) -> Self {
        let mut counts: HashMap<String, SentenceCounts> = HashMap::new();

        for (sent_id, sentence) in &corpus.sentences {
            if universe.get(sent_id).is_none() {
                continue;
            }
            let tokens: Vec<&str> = sentence.split_whitespace().collect();
            for scheme in features.iter() {
                for item in scheme.extract(&tokens) {
                    *counts
                        .entry(item)
                        .or_default()
                        .entry(sent_id.clone())
                        .or_insert(0) += 1;
                }
            }
        }

        Self { counts }
    }

    /// Number of distinct items in the index.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no items were indexed.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Looks up the per-sentence counts of an item.
    pub fn get(&self, item: &str) -> Option<&SentenceCounts> {
        self.counts.get(item)
    }

    /// Consumes the index into (item, counts) pairs.
    pub fn into_items(self) -> impl Iterator<Item = (String, SentenceCounts)> {
        self.counts.into_iter()
    }
}
