//! Equivalence scoring for teq.
//!
//! Given a parallel-corpus file and a weighted context set marking where
//! a phenomenon of interest occurs, this crate finds the lexical items
//! of the corpus most associated with the context: probable translation
//! equivalents. The pass extracts candidate features from the context
//! sentences, prunes implausibly rare or common candidates, scores the
//! rest under a Bayesian Dirichlet-multinomial model or cosine
//! similarity, collapses nested substring candidates, and ranks the
//! result.
//!
//! All state is created fresh per ([`find_equivalents`]) call and
//! discarded afterwards; nothing is cached across runs.

#![warn(missing_docs)]

mod dedup;
mod dirichlet;
mod error;
mod features;
mod filter;
mod index;
mod options;
mod rank;
mod score;

use std::collections::HashSet;

pub use dedup::dedup_subsequences;
pub use error::ScoreError;
pub use features::{FeatureScheme, FeatureSet};
pub use filter::{Candidate, plausible_candidates};
pub use index::{OccurrenceIndex, SentenceCounts};
pub use options::{DEFAULT_MAX_RATIO, DEFAULT_TOP_N, ScoreOptions};
pub use rank::{sort_scored, truncate_top};
pub use score::{ScoreModel, ScoredItem, Scorer};
use teq_context::ContextSet;
use teq_corpus::CorpusFile;

/// Scores one corpus file against a context set.
///
/// Returns candidates ordered by association score (descending, with a
/// deterministic tie-break) and truncated to `options.top_n`. Context
/// entries referring to sentences missing from this corpus file are
/// ignored. Options are validated before any indexing work starts.
pub fn find_equivalents(
    corpus: &CorpusFile,
    contexts: &ContextSet,
    options: &ScoreOptions,
) -> Result<Vec<ScoredItem>, ScoreError> {
    options.validate()?;

    let contexts = contexts.restricted_to(corpus);
    let weights = contexts.weight_vector()?;
    let positive = weights.positive();

    let index = OccurrenceIndex::build(corpus, &contexts, &options.features);
    let candidates = plausible_candidates(index, positive.len(), options.max_ratio);

    let scorer = Scorer::new(
        options.model,
        &weights,
        &positive,
        contexts.len(),
        vocabulary_size(corpus),
    );
    let mut scored: Vec<ScoredItem> = candidates
        .into_iter()
        .map(|candidate| {
            let score = scorer.score(&candidate);
            ScoredItem {
                item: candidate.item,
                score,
            }
        })
        .collect();

    sort_scored(&mut scored);

    if options.features.contains(FeatureScheme::Subsequences) {
        scored = dedup_subsequences(scored);
    }

    Ok(truncate_top(scored, options.top_n))
}

/// Number of distinct whitespace tokens in the whole corpus file.
///
/// Used as the size of the uniform candidate prior in the Bayesian
/// model; deliberately not restricted to the context universe.
fn vocabulary_size(corpus: &CorpusFile) -> usize {
    corpus
        .sentences
        .values()
        .flat_map(|sentence| sentence.split_whitespace())
        .collect::<HashSet<&str>>()
        .len()
}

#[cfg(test)]
mod test {
    use super::*;

    /// Two positive sentences sharing "noir", one negative sentence
    /// with distinct vocabulary.
    fn chat_noir() -> (CorpusFile, ContextSet) {
        let corpus =
            CorpusFile::parse("1\tle chat noir\n2\tle chien noir\n3\tla souris grise\n").unwrap();
        let contexts = ContextSet::from_lines(["1:1:1", "2:1:1", "3:0:1"]).unwrap();
        (corpus, contexts)
    }

    #[test]
    fn cosine_ranks_the_shared_word_first() {
        let (corpus, contexts) = chat_noir();
        let options = ScoreOptions {
            model: ScoreModel::Cosine,
            ..ScoreOptions::default()
        };

        let scored = find_equivalents(&corpus, &contexts, &options).unwrap();
        let order: Vec<&str> = scored.iter().map(|s| s.item.as_str()).collect();

        // "noir" and "le" both hit exactly the positive sentences and
        // score 1.0; the longer item wins the tie. "chien"/"chat" tie
        // at 1/√2, again broken by length. "souris" occurs only in the
        // negative sentence and scores 0.
        assert_eq!(order, ["noir", "le", "chien", "chat", "souris"]);
        assert!((scored[0].score - 1.0).abs() < 1e-9);
        assert!(scored[4].score.abs() < 1e-9);
    }

    #[test]
    fn bayes_ranks_the_shared_word_first() {
        let (corpus, contexts) = chat_noir();
        let scored = find_equivalents(&corpus, &contexts, &ScoreOptions::default()).unwrap();

        assert_eq!(scored[0].item, "noir");
    }

    #[test]
    fn results_are_reproducible() {
        let (corpus, contexts) = chat_noir();
        let options = ScoreOptions {
            top_n: None,
            ..ScoreOptions::default()
        };

        let first = find_equivalents(&corpus, &contexts, &options).unwrap();
        let second = find_equivalents(&corpus, &contexts, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn top_n_truncates() {
        let (corpus, contexts) = chat_noir();
        let options = ScoreOptions {
            top_n: Some(2),
            ..ScoreOptions::default()
        };

        let scored = find_equivalents(&corpus, &contexts, &options).unwrap();
        assert_eq!(scored.len(), 2);
    }

    #[test]
    fn contexts_without_positive_sentences_yield_nothing() {
        let corpus = CorpusFile::parse("1\tle chat\n").unwrap();
        let contexts = ContextSet::from_lines(["1:0:1"]).unwrap();

        let scored = find_equivalents(&corpus, &contexts, &ScoreOptions::default()).unwrap();
        assert!(scored.is_empty());
    }

    #[test]
    fn subsequence_features_are_deduplicated() {
        let corpus = CorpusFile::parse("1\tabc\n2\tabc\n3\txyz\n").unwrap();
        let contexts = ContextSet::from_lines(["1:1:1", "2:1:1", "3:0:1"]).unwrap();
        let options = ScoreOptions {
            features: FeatureSet::new([FeatureScheme::Subsequences]),
            model: ScoreModel::Cosine,
            top_n: None,
            ..ScoreOptions::default()
        };

        let scored = find_equivalents(&corpus, &contexts, &options).unwrap();
        let order: Vec<&str> = scored.iter().map(|s| s.item.as_str()).collect();

        // The full-token fragments absorb all of their substrings.
        assert_eq!(order, ["#abc#", "#xyz#"]);
    }

    #[test]
    fn invalid_options_fail_before_scoring() {
        let (corpus, contexts) = chat_noir();
        let options = ScoreOptions {
            max_ratio: -1.0,
            ..ScoreOptions::default()
        };

        let err = find_equivalents(&corpus, &contexts, &options).unwrap_err();
        assert!(matches!(err, ScoreError::InvalidMaxRatio { .. }));
    }

    #[test]
    fn unknown_context_sentences_are_ignored() {
        let (corpus, contexts) = chat_noir();
        let mut contexts = contexts;
        contexts.insert(teq_context::ContextEntry {
            sentence_id: "99".to_string(),
            hits: 1,
            total: 1,
        });

        let options = ScoreOptions {
            model: ScoreModel::Cosine,
            ..ScoreOptions::default()
        };
        let scored = find_equivalents(&corpus, &contexts, &options).unwrap();
        assert_eq!(scored[0].item, "noir");
    }

    #[test]
    fn vocabulary_counts_distinct_tokens() {
        let (corpus, _) = chat_noir();
        // le, chat, noir, chien, la, souris, grise
        assert_eq!(vocabulary_size(&corpus), 7);
    }
}
