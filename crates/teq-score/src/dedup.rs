//! Overlap deduplication for bounded-substring items.

use std::collections::HashSet;

use crate::score::ScoredItem;

/// Collapses nested `#frag#` items in a score-sorted list.
//
// Greedy walk with a seen-substring set: once a high-scoring fragment is
// kept, all of its contiguous substrings are suppressed from appearing
// independently further down the list, so no two surviving substring
// items nest one inside the other. Scores are never recomputed.
pub fn dedup_subsequences(scored: Vec<ScoredItem>) -> Vec<ScoredItem> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut kept = Vec::with_capacity(scored.len());

    for entry in scored {
        let chars: Vec<char> = entry.item.chars().collect();
        let bounded =
            chars.len() >= 2 && chars.first() == Some(&'#') && chars.last() == Some(&'#');

        if bounded {
            let fragment = &chars[1..chars.len() - 1];
            let word: String = fragment.iter().collect();
            if seen.contains(&word) {
                continue;
            }
            for start in 0..fragment.len().saturating_sub(1) {
                for end in start + 1..=fragment.len() {
                    seen.insert(fragment[start..end].iter().collect());
                }
            }
        } else if chars.first() != Some(&'_') && chars.last() != Some(&'_') {
            // Words and bigrams suppress identical later fragments;
            // affix items are anchored and never conflict.
            seen.insert(entry.item.clone());
        }

        kept.push(entry);
    }

    kept
}

#[cfg(test)]
mod test {
    use super::*;

    /// Shorthand for a scored item.
    fn item(name: &str, score: f64) -> ScoredItem {
        ScoredItem {
            item: name.to_string(),
            score,
        }
    }

    /// Runs dedup and returns the surviving item strings.
    fn survivors(scored: Vec<ScoredItem>) -> Vec<String> {
        dedup_subsequences(scored)
            .into_iter()
            .map(|s| s.item)
            .collect()
    }

    #[test]
    fn keeps_highest_ranked_fragment_and_drops_nested_ones() {
        let out = survivors(vec![
            item("#abc#", 4.0),
            item("#ab#", 3.0),
            item("#a#", 2.0),
            item("#b#", 1.0),
        ]);
        assert_eq!(out, ["#abc#"]);
    }

    #[test]
    fn unrelated_fragments_survive() {
        let out = survivors(vec![item("#ab#", 2.0), item("#cd#", 1.0)]);
        assert_eq!(out, ["#ab#", "#cd#"]);
    }

    #[test]
    fn word_items_suppress_matching_fragments() {
        let out = survivors(vec![item("chat", 2.0), item("#chat#", 1.0)]);
        assert_eq!(out, ["chat"]);
    }

    #[test]
    fn affix_items_pass_through_without_marking() {
        let out = survivors(vec![item("_cha", 2.0), item("#cha#", 1.0)]);
        assert_eq!(out, ["_cha", "#cha#"]);
    }

    #[test]
    fn word_items_are_always_kept() {
        let out = survivors(vec![item("#abc#", 3.0), item("ab", 2.0), item("noir", 1.0)]);
        assert_eq!(out, ["#abc#", "ab", "noir"]);
    }
}
