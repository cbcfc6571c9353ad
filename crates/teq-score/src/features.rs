//! Lexical feature extraction from tokenized sentences.
//!
//! Each scheme turns a whitespace-tokenized sentence into candidate
//! items. The schemes use distinct affixing conventions, so items from
//! different schemes pooled into one index stay unambiguous:
//!
//! - words: the raw token
//! - bigrams: `t1_t2` (underscore infix)
//! - prefixes: `_pre` (leading underscore)
//! - suffixes: `suf_` (trailing underscore)
//! - subsequences: `#frag#` (bounded by `#`)
//!
//! All offsets below are character offsets, so multi-byte scripts are
//! handled per letter rather than per byte.

use std::{fmt, str};

/// Longest prefix or suffix fragment emitted, in characters.
const MAX_AFFIX_LEN: usize = 6;

/// A rule for deriving candidate items from a tokenized sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeatureScheme {
    /// Each token is an item.
    #[default]
    Words,
    /// Adjacent token pairs joined as `t1_t2`.
    Bigrams,
    /// Short token prefixes rendered as `_pre`.
    Prefixes,
    /// Short token suffixes rendered as `suf_`.
    Suffixes,
    /// Every contiguous token substring rendered as `#frag#`.
    ///
    /// Quadratic in token length; enable deliberately.
    Subsequences,
}

impl FeatureScheme {
    /// Extracts this scheme's items from a tokenized sentence.
    pub fn extract(&self, tokens: &[&str]) -> Vec<String> {
        match self {
            Self::Words => tokens.iter().map(ToString::to_string).collect(),
            Self::Bigrams => bigrams(tokens),
            Self::Prefixes => prefixes(tokens),
            Self::Suffixes => suffixes(tokens),
            Self::Subsequences => subsequences(tokens),
        }
    }
}

impl fmt::Display for FeatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Words => write!(f, "words"),
            Self::Bigrams => write!(f, "bigrams"),
            Self::Prefixes => write!(f, "prefixes"),
            Self::Suffixes => write!(f, "suffixes"),
            Self::Subsequences => write!(f, "subsequences"),
        }
    }
}

impl str::FromStr for FeatureScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "words" => Ok(Self::Words),
            "bigrams" => Ok(Self::Bigrams),
            "prefixes" => Ok(Self::Prefixes),
            "suffixes" => Ok(Self::Suffixes),
            "subsequences" => Ok(Self::Subsequences),
            _ => Err(format!(
                "unknown feature scheme '{s}', expected one of: \
                 words, bigrams, prefixes, suffixes, subsequences"
            )),
        }
    }
}

/// An ordered, duplicate-free combination of feature schemes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSet {
    /// Schemes in the order they were requested.
    schemes: Vec<FeatureScheme>,
}

impl FeatureSet {
    /// Builds a set from requested schemes, dropping duplicates but
    /// preserving first-seen order.
    pub fn new(requested: impl IntoIterator<Item = FeatureScheme>) -> Self {
        let mut schemes = Vec::new();
        for scheme in requested {
            if !schemes.contains(&scheme) {
                schemes.push(scheme);
            }
        }
        Self { schemes }
    }

    /// Returns true if the set includes the given scheme.
    pub fn contains(&self, scheme: FeatureScheme) -> bool {
        self.schemes.contains(&scheme)
    }

    /// Iterates the schemes in order.
    pub fn iter(&self) -> impl Iterator<Item = FeatureScheme> {
        self.schemes.iter().copied()
    }

    /// Returns true if no schemes were selected.
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self::new([FeatureScheme::Words])
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.schemes.iter().map(ToString::to_string).collect();
        write!(f, "{}", names.join(","))
    }
}

/// Adjacent token pairs joined with an underscore.
fn bigrams(tokens: &[&str]) -> Vec<String> {
    tokens
        .windows(2)
        .map(|pair| format!("{}_{}", pair[0], pair[1]))
        .collect()
}

/// Upper bound (inclusive) for affix lengths of a token.
///
/// The `-3` margin excludes near-whole-token affixes, which would
/// degenerately overlap the whole-word items; tokens of three or fewer
/// characters yield nothing.
fn affix_limit(token_len: usize) -> usize {
    MAX_AFFIX_LEN.min(token_len.saturating_sub(3))
}

/// Token prefixes of length 1..=min(6, len-3), rendered as `_pre`.
fn prefixes(tokens: &[&str]) -> Vec<String> {
    let mut items = Vec::new();
    for token in tokens {
        let chars: Vec<char> = token.chars().collect();
        for len in 1..=affix_limit(chars.len()) {
            let fragment: String = chars[..len].iter().collect();
            items.push(format!("_{fragment}"));
        }
    }
    items
}

/// Token suffixes of length 1..=min(6, len-3), rendered as `suf_`.
fn suffixes(tokens: &[&str]) -> Vec<String> {
    let mut items = Vec::new();
    for token in tokens {
        let chars: Vec<char> = token.chars().collect();
        for len in 1..=affix_limit(chars.len()) {
            let fragment: String = chars[chars.len() - len..].iter().collect();
            items.push(format!("{fragment}_"));
        }
    }
    items
}

/// Contiguous token substrings, rendered as `#frag#`.
///
/// Start offsets run to the second-to-last character, so the substring
/// anchored at the final character alone is not emitted on its own.
fn subsequences(tokens: &[&str]) -> Vec<String> {
    let mut items = Vec::new();
    for token in tokens {
        let chars: Vec<char> = token.chars().collect();
        for start in 0..chars.len().saturating_sub(1) {
            for end in start + 1..=chars.len() {
                let fragment: String = chars[start..end].iter().collect();
                items.push(format!("#{fragment}#"));
            }
        }
    }
    items
}
