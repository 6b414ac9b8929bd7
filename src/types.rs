//! Shared types and model configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A tokenized sentence: an ordered sequence of opaque string tokens.
///
/// Tokenization and normalization (case folding, Unicode forms) happen
/// upstream; tokens are compared by exact value equality.
pub type Sentence = Vec<String>;

/// Configuration for a [`Phrases`](crate::Phrases) model.
///
/// All parameters are validated eagerly by [`PhrasesConfig::validate`] (called
/// from `Phrases::new`), so a constructed model always holds usable values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhrasesConfig {
    /// Minimum collected count for a compound to be eligible for merging.
    /// Must be at least 1.
    #[serde(default = "default_min_count")]
    pub min_count: u64,

    /// Minimum score for two tokens to be joined. Higher means fewer phrases.
    /// Must be positive.
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Soft cap on the number of distinct keys in the count table; exceeding
    /// it triggers a pruning pass. Must be at least 1.
    #[serde(default = "default_max_vocab_size")]
    pub max_vocab_size: usize,

    /// Separator joining the two halves of a compound token. Raw tokens must
    /// not contain it, or compound keys become ambiguous (not enforced).
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

fn default_min_count() -> u64 {
    5
}

fn default_threshold() -> f64 {
    100.0
}

fn default_max_vocab_size() -> usize {
    20_000_000
}

fn default_delimiter() -> String {
    "_".to_string()
}

impl Default for PhrasesConfig {
    fn default() -> Self {
        Self {
            min_count: default_min_count(),
            threshold: default_threshold(),
            max_vocab_size: default_max_vocab_size(),
            delimiter: default_delimiter(),
        }
    }
}

impl PhrasesConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum compound count.
    pub fn with_min_count(mut self, min_count: u64) -> Self {
        self.min_count = min_count;
        self
    }

    /// Set the merge score threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the count table size cap.
    pub fn with_max_vocab_size(mut self, max_vocab_size: usize) -> Self {
        self.max_vocab_size = max_vocab_size;
        self
    }

    /// Set the compound token delimiter.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Check all parameters, returning the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_count == 0 {
            return Err(ConfigError::MinCountZero);
        }
        // Also rejects NaN.
        if !(self.threshold > 0.0) {
            return Err(ConfigError::NonPositiveThreshold(self.threshold));
        }
        if self.max_vocab_size == 0 {
            return Err(ConfigError::MaxVocabSizeZero);
        }
        Ok(())
    }
}
