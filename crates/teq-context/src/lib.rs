//! Context sets for teq.
//!
//! A context set records where a linguistic phenomenon occurs in a
//! sentence-aligned corpus: for each sentence id, how many times the
//! phenomenon was observed (`hits`) out of how many opportunities
//! (`total`). Context sets are written one entry per line as
//! `sentence_id:hits:total`, which is also the output format of the
//! instance search in [`instances`].

#![warn(missing_docs)]

mod error;
pub mod instances;

use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt,
    sync::LazyLock,
};

pub use error::ContextError;
use regex::Regex;
use teq_corpus::CorpusFile;

/// Line shape of a context entry: word-character id, then two counts.
static RE_CONTEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+):(\d+):(\d+)$").expect("context regex is valid"));

/// One weighted observation: a sentence id with hit and opportunity counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextEntry {
    /// Identifier of the sentence the observation refers to.
    pub sentence_id: String,
    /// How many times the phenomenon occurred in the sentence.
    pub hits: u32,
    /// How many opportunities for the phenomenon the sentence offered.
    pub total: u32,
}

impl ContextEntry {
    /// Parses a `sentence_id:hits:total` line.
    ///
    /// Fails on any line that does not match the shape, on counts too
    /// large to represent, and on `hits > total`.
    pub fn parse(line: &str) -> Result<Self, ContextError> {
        let malformed = || ContextError::Malformed {
            line: line.to_string(),
        };
        let captures = RE_CONTEXT.captures(line).ok_or_else(malformed)?;

        let sentence_id = captures[1].to_string();
        let hits: u32 = captures[2].parse().map_err(|_| malformed())?;
        let total: u32 = captures[3].parse().map_err(|_| malformed())?;

        if hits > total {
            return Err(ContextError::HitsExceedTotal {
                sentence_id,
                hits,
                total,
            });
        }

        Ok(Self {
            sentence_id,
            hits,
            total,
        })
    }

    /// Returns the entry's weight `hits/total` in `[0, 1]`.
    ///
    /// Fails when `total == 0`, which cannot be normalized.
    pub fn weight(&self) -> Result<f64, ContextError> {
        if self.total == 0 {
            return Err(ContextError::ZeroTotal {
                sentence_id: self.sentence_id.clone(),
            });
        }
        Ok(f64::from(self.hits) / f64::from(self.total))
    }
}

impl fmt::Display for ContextEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.sentence_id, self.hits, self.total)
    }
}

/// A collection of context entries keyed by sentence id.
///
/// Inserting an entry for an already-present id replaces the previous
/// entry. Iteration order is sorted by sentence id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextSet {
    /// Entries keyed by sentence id.
    entries: BTreeMap<String, ContextEntry>,
}

impl ContextSet {
    /// Creates an empty context set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a context set from `sentence_id:hits:total` lines.
    ///
    /// Blank lines are skipped; the first malformed line aborts the
    /// whole list.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Self, ContextError> {
        let mut set = Self::new();
        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            set.insert(ContextEntry::parse(line)?);
        }
        Ok(set)
    }

    /// Inserts an entry, replacing any previous entry for the same id.
    pub fn insert(&mut self, entry: ContextEntry) {
        self.entries.insert(entry.sentence_id.clone(), entry);
    }

    /// Looks up the entry for a sentence id.
    pub fn get(&self, sentence_id: &str) -> Option<&ContextEntry> {
        self.entries.get(sentence_id)
    }

    /// Number of entries in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in sentence-id order.
    pub fn iter(&self) -> impl Iterator<Item = &ContextEntry> {
        self.entries.values()
    }

    /// Returns the subset of entries whose sentences exist in `corpus`.
    ///
    /// A context set may reference sentences that are missing from some
    /// corpus files, since files cover possibly different sentence sets.
    pub fn restricted_to(&self, corpus: &CorpusFile) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(id, _)| corpus.contains(id))
                .map(|(id, entry)| (id.clone(), entry.clone()))
                .collect(),
        }
    }

    /// Derives the normalized weight vector (`hits/total` per sentence).
    ///
    /// Fails if any entry has `total == 0`.
    pub fn weight_vector(&self) -> Result<WeightVector, ContextError> {
        let mut weights = HashMap::with_capacity(self.entries.len());
        for entry in self.entries.values() {
            weights.insert(entry.sentence_id.clone(), entry.weight()?);
        }
        Ok(WeightVector { weights })
    }
}

impl FromIterator<ContextEntry> for ContextSet {
    fn from_iter<I: IntoIterator<Item = ContextEntry>>(iter: I) -> Self {
        let mut set = Self::new();
        for entry in iter {
            set.insert(entry);
        }
        set
    }
}

/// Normalized context weights: sentence id → probability-like value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightVector {
    /// Weight per sentence id, each in `[0, 1]`.
    weights: HashMap<String, f64>,
}

impl WeightVector {
    /// Returns the weight for a sentence id, 0.0 if absent.
    pub fn get(&self, sentence_id: &str) -> f64 {
        self.weights.get(sentence_id).copied().unwrap_or(0.0)
    }

    /// Number of weighted sentences.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if no sentences are weighted.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// The positive subset: sentence ids with weight ≥ 0.5.
    ///
    /// These are the sentences considered to contain the phenomenon.
    pub fn positive(&self) -> BTreeSet<String> {
        self.weights
            .iter()
            .filter(|(_, weight)| **weight >= 0.5)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Euclidean norm of the weight vector.
    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_entry() {
        let entry = ContextEntry::parse("40001001:2:3").unwrap();
        assert_eq!(entry.sentence_id, "40001001");
        assert_eq!(entry.hits, 2);
        assert_eq!(entry.total, 3);
    }

    #[test]
    fn parse_rejects_non_numeric_hits() {
        let err = ContextEntry::parse("abc:x:1").unwrap_err();
        assert_eq!(
            err,
            ContextError::Malformed {
                line: "abc:x:1".to_string()
            }
        );
    }

    #[test]
    fn parse_rejects_trailing_garbage() {
        assert!(ContextEntry::parse("abc:1:1 extra").is_err());
        assert!(ContextEntry::parse("abc:1").is_err());
        assert!(ContextEntry::parse("").is_err());
    }

    #[test]
    fn parse_rejects_hits_exceeding_total() {
        let err = ContextEntry::parse("abc:3:2").unwrap_err();
        assert!(matches!(err, ContextError::HitsExceedTotal { .. }));
    }

    #[test]
    fn weight_of_zero_total_entry_fails() {
        let entry = ContextEntry {
            sentence_id: "x".to_string(),
            hits: 0,
            total: 0,
        };
        assert_eq!(
            entry.weight().unwrap_err(),
            ContextError::ZeroTotal {
                sentence_id: "x".to_string()
            }
        );
    }

    #[test]
    fn from_lines_aborts_on_first_malformed_line() {
        let err = ContextSet::from_lines(["a:1:1", "bogus", "b:1:1"]).unwrap_err();
        assert!(matches!(err, ContextError::Malformed { .. }));
    }

    #[test]
    fn from_lines_skips_blank_lines_and_keeps_last_duplicate() {
        let set = ContextSet::from_lines(["a:1:2", "", "  ", "a:2:2"]).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("a").unwrap().hits, 2);
    }

    #[test]
    fn weights_are_normalized_probabilities() {
        let set = ContextSet::from_lines(["a:1:1", "b:1:2", "c:0:4"]).unwrap();
        let weights = set.weight_vector().unwrap();

        for id in ["a", "b", "c"] {
            let w = weights.get(id);
            assert!((0.0..=1.0).contains(&w));
        }
        assert_eq!(weights.get("a"), 1.0);
        assert_eq!(weights.get("b"), 0.5);
        assert_eq!(weights.get("c"), 0.0);
        assert_eq!(weights.get("unknown"), 0.0);
    }

    #[test]
    fn positive_subset_is_weights_at_least_half() {
        let set = ContextSet::from_lines(["a:1:1", "b:1:2", "c:1:3", "d:0:1"]).unwrap();
        let positive = set.weight_vector().unwrap().positive();

        let expected: BTreeSet<String> = ["a", "b"].iter().map(ToString::to_string).collect();
        assert_eq!(positive, expected);
    }

    #[test]
    fn restricted_to_drops_unknown_sentences() {
        let corpus = CorpusFile::parse("a\tun\nb\tdeux\n").unwrap();
        let set = ContextSet::from_lines(["a:1:1", "z:1:1"]).unwrap();

        let restricted = set.restricted_to(&corpus);
        assert_eq!(restricted.len(), 1);
        assert!(restricted.get("a").is_some());
        assert!(restricted.get("z").is_none());
    }

    #[test]
    fn entry_display_round_trips() {
        let entry = ContextEntry::parse("a:1:2").unwrap();
        assert_eq!(entry.to_string(), "a:1:2");
    }
}
