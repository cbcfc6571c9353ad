//! Deterministic ordering and truncation of scored candidates.

use std::cmp::Ordering;

use crate::score::ScoredItem;

/// Sorts scored candidates into their final order.
///
/// Primary key: score descending. Ties break on item character length
/// descending (longer, more specific items first), then on the item
/// string ascending, so the order is fully deterministic.
pub fn sort_scored(scored: &mut [ScoredItem]) {
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.item.chars().count().cmp(&a.item.chars().count()))
            .then_with(|| a.item.cmp(&b.item))
    });
}

/// Truncates to the first `top_n` candidates.
///
/// `None` or `Some(0)` means no truncation.
pub fn truncate_top(mut scored: Vec<ScoredItem>, top_n: Option<usize>) -> Vec<ScoredItem> {
    if let Some(n) = top_n
        && n > 0
    {
        scored.truncate(n);
    }
    scored
}
