//! Error types.
//!
//! Construction is the only fallible operation in this crate's own logic;
//! everything downstream either branches on absent keys or forwards the
//! input collaborator's error type unchanged.

use thiserror::Error;

/// Rejected model configuration. Raised synchronously by
/// [`PhrasesConfig::validate`](crate::PhrasesConfig::validate) and
/// [`Phrases::new`](crate::Phrases::new); no partial model is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `min_count` must be at least 1.
    #[error("min_count must be at least 1")]
    MinCountZero,

    /// `threshold` must be a positive number.
    #[error("threshold must be positive, got {0}")]
    NonPositiveThreshold(f64),

    /// `max_vocab_size` must be at least 1.
    #[error("max_vocab_size must be at least 1")]
    MaxVocabSizeZero,
}
