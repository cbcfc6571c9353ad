//! Association scoring of candidates against a context weight vector.

use std::{collections::BTreeSet, fmt, str};

use serde::Serialize;
use teq_context::WeightVector;

use crate::{dirichlet, filter::Candidate, index::SentenceCounts};

/// Available scoring models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreModel {
    /// Bayesian Dirichlet-multinomial log Bayes factor of co-occurrence
    /// versus independence.
    #[default]
    Bayes,
    /// Cosine similarity over weighted sentence-occurrence vectors.
    Cosine,
}

impl fmt::Display for ScoreModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bayes => write!(f, "bayes"),
            Self::Cosine => write!(f, "cosine"),
        }
    }
}

impl str::FromStr for ScoreModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bayes" => Ok(Self::Bayes),
            "cosine" => Ok(Self::Cosine),
            _ => Err(format!(
                "unknown scoring model '{s}', expected one of: bayes, cosine"
            )),
        }
    }
}

/// A candidate item with its association score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItem {
    /// The feature string.
    pub item: String,
    /// Association score; higher means more associated.
    pub score: f64,
}

/// Scores candidates against one context, under one model.
///
/// Read-only and shared by all candidates of a run: the per-candidate
/// inputs are only the candidate's own occurrence counts.
#[derive(Debug)]
pub struct Scorer<'a> {
    /// Selected scoring model.
    model: ScoreModel,
    /// Normalized context weights.
    weights: &'a WeightVector,
    /// Sentence ids with weight ≥ 0.5.
    positive: &'a BTreeSet<String>,
    /// Number of sentences in the context universe.
    universe_size: usize,
    /// Number of distinct tokens in the corpus file.
    vocabulary_size: usize,
    /// Euclidean norm of the context weights, precomputed.
    context_norm: f64,
}

impl<'a> Scorer<'a> {
    /// Creates a scorer for one (corpus file, context, model) run.
    pub fn new(
        model: ScoreModel,
        weights: &'a WeightVector,
        positive: &'a BTreeSet<String>,
        universe_size: usize,
        vocabulary_size: usize,
    ) -> Self {
        Self {
            model,
            weights,
            positive,
            universe_size,
            vocabulary_size,
            context_norm: weights.norm(),
        }
    }

    /// Scores one candidate.
    pub fn score(&self, candidate: &Candidate) -> f64 {
        match self.model {
            ScoreModel::Cosine => self.cosine(&candidate.counts),
            ScoreModel::Bayes => self.bayes(&candidate.counts),
        }
    }

    /// Cosine similarity between the candidate's occurrence counts and
    /// the context weights, both treated as sparse vectors over the
    /// sentence-id space.
    ///
    /// A zero-norm vector on either side scores 0.0 rather than NaN.
    fn cosine(&self, counts: &SentenceCounts) -> f64 {
        let dot: f64 = counts
            .iter()
            .map(|(sent_id, count)| f64::from(*count) * self.weights.get(sent_id))
            .sum();
        let counts_norm = counts
            .values()
            .map(|&count| f64::from(count) * f64::from(count))
            .sum::<f64>()
            .sqrt();

        if counts_norm == 0.0 || self.context_norm == 0.0 {
            return 0.0;
        }
        dot / (counts_norm * self.context_norm)
    }

    /// Log Bayes factor for "item and context denote the same
    /// phenomenon" versus "item and context are independent".
    ///
    /// Both stories are Dirichlet-multinomial marginal likelihoods with
    /// unit pseudo-counts: the independent story draws the item set and
    /// the positive set as two separate binary partitions of the
    /// universe, the joint story draws them as one four-way partition.
    /// A uniform prior over the candidate vocabulary penalizes the
    /// joint story.
    fn bayes(&self, counts: &SentenceCounts) -> f64 {
        let universe = self.universe_size as u64;
        let item_breadth = counts.len() as u64;
        let positive_breadth = self.positive.len() as u64;
        let both = counts
            .keys()
            .filter(|sent_id| self.positive.contains(*sent_id))
            .count() as u64;
        let union = item_breadth + positive_breadth - both;

        // Contract: the candidate and positive sets are subsets of the
        // universe, so the four categories partition it exactly.
        assert!(
            universe >= union,
            "candidate or positive set outside the context universe"
        );

        let log_p_independent = dirichlet::log_likelihood(&[
            item_breadth,
            universe - item_breadth,
        ]) + dirichlet::log_likelihood(&[
            positive_breadth,
            universe - positive_breadth,
        ]);
        let log_p_joint = dirichlet::log_likelihood(&[
            item_breadth - both,
            positive_breadth - both,
            both,
            universe - union,
        ]);
        let log_p_prior = -(self.vocabulary_size as f64).ln();

        log_p_prior + log_p_joint - log_p_independent
    }
}

#[cfg(test)]
mod test {
    use teq_context::ContextSet;

    use super::*;

    /// Absolute tolerance for float comparisons.
    const EPS: f64 = 1e-9;

    /// Builds a candidate occurring once in each listed sentence.
    fn candidate(item: &str, sentences: &[(&str, u32)]) -> Candidate {
        Candidate {
            item: item.to_string(),
            counts: sentences
                .iter()
                .map(|(id, count)| ((*id).to_string(), *count))
                .collect(),
        }
    }

    /// A weight vector from context lines.
    fn weights(lines: &[&str]) -> WeightVector {
        ContextSet::from_lines(lines.iter().copied())
            .unwrap()
            .weight_vector()
            .unwrap()
    }

    #[test]
    fn cosine_of_proportional_vectors_is_one() {
        let weights = weights(&["a:1:2", "b:1:1", "c:0:1"]);
        let positive = weights.positive();
        let scorer = Scorer::new(ScoreModel::Cosine, &weights, &positive, 3, 10);

        // Occurrences (1, 2, 0) are twice the weights (0.5, 1, 0).
        let scored = scorer.score(&candidate("x", &[("a", 1), ("b", 2)]));
        assert!((scored - 1.0).abs() < EPS);
    }

    #[test]
    fn cosine_of_orthogonal_vectors_is_zero() {
        let weights = weights(&["a:1:1", "b:0:1"]);
        let positive = weights.positive();
        let scorer = Scorer::new(ScoreModel::Cosine, &weights, &positive, 2, 10);

        let scored = scorer.score(&candidate("x", &[("b", 3)]));
        assert!(scored.abs() < EPS);
    }

    #[test]
    fn cosine_with_zero_norm_context_is_defined() {
        // All-zero weights: the score must be 0.0, not NaN.
        let weights = weights(&["a:0:1", "b:0:1"]);
        let positive = weights.positive();
        let scorer = Scorer::new(ScoreModel::Cosine, &weights, &positive, 2, 10);

        let scored = scorer.score(&candidate("x", &[("a", 1)]));
        assert_eq!(scored, 0.0);
    }

    #[test]
    fn bayes_prefers_cooccurrence_over_independence() {
        // Universe {a, b, c, d}, positive {a, b}.
        let weights = weights(&["a:1:1", "b:1:1", "c:0:1", "d:0:1"]);
        let positive = weights.positive();
        let scorer = Scorer::new(ScoreModel::Bayes, &weights, &positive, 4, 10);

        let aligned = scorer.score(&candidate("x", &[("a", 1), ("b", 1)]));
        let disjoint = scorer.score(&candidate("y", &[("c", 1), ("d", 1)]));
        assert!(aligned > disjoint);
    }

    #[test]
    fn bayes_matches_hand_computed_value() {
        // Universe of 2, positive {a}, candidate exactly on {a},
        // vocabulary of 1:
        //   independent = LL([1,1]) + LL([1,1]) = -2 ln 6
        //   joint       = LL([0,0,1,1])
        //               = lnΓ(4) − lnΓ(6) + lnΓ(1)·2 + lnΓ(2)·2
        //               = ln 6 − ln 120
        //   score       = 0 + joint − independent
        let weights = weights(&["a:1:1", "b:0:1"]);
        let positive = weights.positive();
        let scorer = Scorer::new(ScoreModel::Bayes, &weights, &positive, 2, 1);

        let scored = scorer.score(&candidate("x", &[("a", 1)]));
        let expected = (6.0_f64.ln() - 120.0_f64.ln()) + 2.0 * 6.0_f64.ln();
        assert!((scored - expected).abs() < EPS);
    }

    #[test]
    fn model_from_str_round_trips() {
        assert_eq!("bayes".parse::<ScoreModel>(), Ok(ScoreModel::Bayes));
        assert_eq!("cosine".parse::<ScoreModel>(), Ok(ScoreModel::Cosine));
        assert!("jaccard".parse::<ScoreModel>().is_err());
        assert_eq!(ScoreModel::Bayes.to_string(), "bayes");
        assert_eq!(ScoreModel::Cosine.to_string(), "cosine");
    }
}
