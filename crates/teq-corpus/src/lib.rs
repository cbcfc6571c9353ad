//! Parallel-corpus file reading for teq.
//!
//! Corpus files follow the paralleltext repository format: `#`-prefixed
//! comment lines optionally carrying `key: value` metadata, and two-column
//! `sentence_id<TAB>text` lines. Every file of a parallel corpus uses the
//! same sentence identifiers, so sentences with equal ids are translations
//! of each other.

#![warn(missing_docs)]

mod error;

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::Path,
};

pub use error::CorpusError;

/// Metadata key spelled inconsistently in older corpus files.
const ISO_KEY_LEGACY: &str = "Closest ISO 639-3";

/// Canonical spelling of the legacy metadata key.
const ISO_KEY: &str = "closest ISO 639-3";

/// One parallel-corpus file: file-level metadata plus an id → text mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusFile {
    /// File-level metadata from `# key: value` comment lines.
    pub metadata: BTreeMap<String, String>,
    /// Sentences keyed by their corpus-wide identifier.
    pub sentences: HashMap<String, String>,
}

impl CorpusFile {
    /// Reads and parses a corpus file from disk.
    ///
    /// Returns a format error for any line that has more than two
    /// tab-separated fields and no comment marker. Lines with fewer than
    /// two fields (blank lines, untranslated sentences) are skipped.
    pub fn read(path: &Path) -> Result<Self, CorpusError> {
        let text = fs::read_to_string(path).map_err(|source| CorpusError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|line| CorpusError::Format {
            path: path.to_path_buf(),
            line,
        })
    }

    /// Parses corpus-file text, returning the one-based number of the
    /// first malformed line on failure.
    pub fn parse(text: &str) -> Result<Self, usize> {
        let mut corpus = Self::default();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if let Some(comment) = line.strip_prefix('#') {
                if let Some((key, value)) = comment.split_once(':') {
                    corpus
                        .metadata
                        .insert(key.trim().to_string(), value.trim().to_string());
                }
            } else {
                let fields: Vec<&str> = line.split('\t').collect();
                match fields.as_slice() {
                    [sent_id, sent] => {
                        corpus
                            .sentences
                            .insert((*sent_id).to_string(), sent.trim().to_string());
                    }
                    [_] | [] => {}
                    _ => return Err(idx + 1),
                }
            }
        }

        // Older files spell this key with a leading capital.
        if let Some(value) = corpus.metadata.remove(ISO_KEY_LEGACY) {
            corpus.metadata.insert(ISO_KEY.to_string(), value);
        }

        Ok(corpus)
    }

    /// Returns true if the corpus contains a sentence with the given id.
    pub fn contains(&self, sentence_id: &str) -> bool {
        self.sentences.contains_key(sentence_id)
    }
}
