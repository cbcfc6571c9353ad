//! Frequency-plausibility filtering of candidate items.

use crate::index::{OccurrenceIndex, SentenceCounts};

/// An item that survived the plausibility filter, with its counts.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// The feature string.
    pub item: String,
    /// Per-sentence occurrence counts of the item.
    pub counts: SentenceCounts,
}

/// Keeps items whose sentence breadth is comparable to the context's.
///
/// A translation equivalent of a phenomenon seen in `positive_count`
/// sentences should itself occur in a comparable number of sentences, so
/// only items occurring in `[positive_count / max_ratio,
/// positive_count * max_ratio]` distinct sentences are retained.
///
/// With `positive_count == 0` both bounds are zero, and since every
/// indexed item occurs in at least one sentence the result is empty —
/// a degenerate configuration, not an error.
pub fn plausible_candidates(
    index: OccurrenceIndex,
    positive_count: usize,
    max_ratio: f64,
) -> Vec<Candidate> {
    let min_count = positive_count as f64 / max_ratio;
    let max_count = positive_count as f64 * max_ratio;

    index
        .into_items()
        .filter(|(_, counts)| {
            let breadth = counts.len() as f64;
            breadth >= min_count && breadth <= max_count
        })
        .map(|(item, counts)| Candidate { item, counts })
        .collect()
}
