//! Regex instance search over parallel corpora.
//!
//! Produces the context lists consumed by the equivalence scorer: for
//! every sentence in the searched files, how many of the given patterns
//! matched (`hits`) out of how many opportunities the sentence offered
//! (`total`, one per file containing the sentence). Results from
//! successive searches can be merged through a prior context set.

use std::collections::BTreeMap;

use regex::Regex;
use teq_corpus::CorpusFile;

use crate::{ContextEntry, ContextSet};

/// Running hit/opportunity counts for one sentence id.
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    /// Patterns matched so far.
    hits: u32,
    /// Opportunities seen so far.
    total: u32,
}

/// One pattern match, for manual inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchExample {
    /// The full sentence text.
    pub sentence: String,
    /// Byte offset where the match starts.
    pub start: usize,
    /// Byte offset where the match ends.
    pub end: usize,
}

/// Counts pattern matches per sentence across corpus files.
///
/// Each sentence occurrence in a file counts as one opportunity; each
/// pattern that matches the sentence counts as one hit. Counts from
/// `prior` are added in, so a search can extend an earlier one.
/// Entries are returned in sentence-id order.
pub fn find_instances(
    corpora: &[CorpusFile],
    patterns: &[Regex],
    prior: &ContextSet,
) -> Vec<ContextEntry> {
    let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();

    for entry in prior.iter() {
        tallies.insert(
            entry.sentence_id.clone(),
            Tally {
                hits: entry.hits,
                total: entry.total,
            },
        );
    }

    for corpus in corpora {
        for (sent_id, sentence) in &corpus.sentences {
            let tally = tallies.entry(sent_id.clone()).or_default();
            tally.total += 1;
            for pattern in patterns {
                if pattern.is_match(sentence) {
                    tally.hits += 1;
                }
            }
        }
    }

    tallies
        .into_iter()
        .map(|(sentence_id, tally)| ContextEntry {
            sentence_id,
            hits: tally.hits,
            total: tally.total,
        })
        .collect()
}

/// Collects the first match of each pattern in each sentence.
///
/// Matches are returned in sentence-id order within each file.
pub fn find_matches(corpora: &[CorpusFile], patterns: &[Regex]) -> Vec<MatchExample> {
    let mut examples = Vec::new();

    for corpus in corpora {
        let mut sentence_ids: Vec<&String> = corpus.sentences.keys().collect();
        sentence_ids.sort();
        for sent_id in sentence_ids {
            let sentence = &corpus.sentences[sent_id];
            for pattern in patterns {
                if let Some(found) = pattern.find(sentence) {
                    examples.push(MatchExample {
                        sentence: sentence.clone(),
                        start: found.start(),
                        end: found.end(),
                    });
                }
            }
        }
    }

    examples
}
