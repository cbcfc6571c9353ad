//! Options for a scoring invocation.

use crate::{error::ScoreError, features::FeatureSet, score::ScoreModel};

/// Default candidate-breadth ratio.
pub const DEFAULT_MAX_RATIO: f64 = 4.0;

/// Default number of best matches returned.
pub const DEFAULT_TOP_N: usize = 5;

/// Configuration of one scoring pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreOptions {
    /// Feature schemes whose items are pooled into one index.
    pub features: FeatureSet,
    /// Scoring model.
    pub model: ScoreModel,
    /// Allowed breadth ratio between candidates and the context.
    ///
    /// Items occurring in this many times more (or fewer) sentences
    /// than the positive context are ignored.
    pub max_ratio: f64,
    /// Keep only the best N candidates; `None` keeps all.
    pub top_n: Option<usize>,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            features: FeatureSet::default(),
            model: ScoreModel::default(),
            max_ratio: DEFAULT_MAX_RATIO,
            top_n: Some(DEFAULT_TOP_N),
        }
    }
}

impl ScoreOptions {
    /// Validates the options before any per-file work starts.
    pub fn validate(&self) -> Result<(), ScoreError> {
        if !(self.max_ratio.is_finite() && self.max_ratio > 0.0) {
            return Err(ScoreError::InvalidMaxRatio {
                value: self.max_ratio,
            });
        }
        if self.features.is_empty() {
            return Err(ScoreError::NoFeatures);
        }
        Ok(())
    }
}
