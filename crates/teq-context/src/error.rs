//! Error types for context lists.

use thiserror::Error;

/// Errors that can occur when parsing or normalizing a context list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    /// A line did not match the `sentence_id:hits:total` shape.
    #[error("invalid context description: \"{line}\"")]
    Malformed {
        /// The offending line, as read.
        line: String,
    },

    /// An entry recorded more hits than opportunities.
    #[error("context entry {sentence_id} has hits {hits} > total {total}")]
    HitsExceedTotal {
        /// Sentence id of the offending entry.
        sentence_id: String,
        /// Recorded hit count.
        hits: u32,
        /// Recorded opportunity count.
        total: u32,
    },

    /// An entry recorded zero opportunities, so no weight can be derived.
    #[error("context entry {sentence_id} has total 0")]
    ZeroTotal {
        /// Sentence id of the offending entry.
        sentence_id: String,
    },
}
