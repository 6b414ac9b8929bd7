//! The collocation model.
//!
//! [`Phrases`] owns the cumulative count table and the monotone discard
//! threshold, accumulates counts from sentence streams via
//! [`Phrases::add_vocab`], and rewrites sentences via [`Phrases::transform`].
//! Counting and transformation follow the Mikolov et al. phrase-detection
//! scheme: adjacent pairs that co-occur far more often than their parts
//! predict are joined into a single delimiter-separated token.

mod transform;

pub use transform::PhrasedCorpus;

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::error::ConfigError;
use crate::types::PhrasesConfig;
use crate::vocab::collector::{self, LearnedVocab};
use crate::vocab::{prune_vocab, CountTable};

/// Detects phrases from collected collocation counts.
///
/// The model is mutated only by `add_vocab`/`try_add_vocab` and read (never
/// mutated) by `transform`. A single logical owner is assumed; wrap the model
/// in a lock if merges and transforms must interleave across threads.
#[derive(Debug, Clone)]
pub struct Phrases {
    config: PhrasesConfig,
    vocab: CountTable,
    min_reduce: u64,
}

/// Snapshot of a model's vocabulary size and configuration, for logging and
/// diagnostics. Not semantically load-bearing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummary {
    pub vocab_len: usize,
    pub min_reduce: u64,
    pub min_count: u64,
    pub threshold: f64,
    pub max_vocab_size: usize,
}

impl Phrases {
    /// Create an untrained model.
    ///
    /// Fails fast on invalid configuration; no partial model is produced.
    pub fn new(config: PhrasesConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            vocab: CountTable::default(),
            min_reduce: 1,
        })
    }

    /// Create a model and train it on `sentences` in one step.
    pub fn with_sentences<I>(sentences: I, config: PhrasesConfig) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: AsRef<[String]>,
    {
        let mut model = Self::new(config)?;
        model.add_vocab(sentences);
        Ok(model)
    }

    /// Collect counts from `sentences` and merge them into the model.
    ///
    /// Counting happens in a separate local table first; this costs more
    /// memory than counting straight into the cumulative table, but gives new
    /// sentences a fighting chance to accumulate counts before competing with
    /// the (typically much larger) historical totals at pruning time. The
    /// model's discard threshold is raised to the collection pass's final
    /// threshold when that is higher, and never lowered.
    pub fn add_vocab<I>(&mut self, sentences: I)
    where
        I: IntoIterator,
        I::Item: AsRef<[String]>,
    {
        let learned = collector::learn_vocab(
            sentences,
            self.config.max_vocab_size,
            &self.config.delimiter,
        );
        self.merge_learned(learned);
    }

    /// Like [`Phrases::add_vocab`], for sentence streams that can fail
    /// mid-iteration (e.g. file- or network-backed corpora).
    ///
    /// The collaborator's error is propagated unchanged. Collection aborts at
    /// the failing sentence and nothing from the aborted pass is merged, so
    /// the model keeps its prior counts.
    pub fn try_add_vocab<I, S, E>(&mut self, sentences: I) -> Result<(), E>
    where
        I: IntoIterator<Item = Result<S, E>>,
        S: AsRef<[String]>,
    {
        let learned = collector::try_learn_vocab(
            sentences,
            self.config.max_vocab_size,
            &self.config.delimiter,
        )?;
        self.merge_learned(learned);
        Ok(())
    }

    fn merge_learned(&mut self, learned: LearnedVocab) {
        debug!("merging {} counts into {}", learned.vocab.len(), self);

        self.min_reduce = self.min_reduce.max(learned.min_reduce);
        for (key, count) in learned.vocab {
            *self.vocab.entry(key).or_insert(0) += count;
        }
        if self.vocab.len() > self.config.max_vocab_size {
            prune_vocab(&mut self.vocab, self.min_reduce);
            self.min_reduce += 1;
        }

        debug!("merged: {}", self);
    }

    /// Rewrite one sentence, joining detected collocations into compound
    /// tokens.
    ///
    /// Greedy, left-to-right, non-overlapping; read-only on the model and
    /// deterministic for a fixed table and configuration. Sentences of
    /// length 0 or 1 pass through without merging.
    pub fn transform<S: AsRef<str>>(&self, sentence: &[S]) -> Vec<String> {
        transform::transform_sentence(&self.vocab, &self.config, sentence)
    }

    /// Lazily rewrite every sentence of a corpus.
    ///
    /// Returns an iterator that applies [`Phrases::transform`] to each
    /// sentence on demand; nothing is transformed until the result is pulled.
    pub fn transform_all<I>(&self, corpus: I) -> PhrasedCorpus<'_, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<[String]>,
    {
        PhrasedCorpus {
            model: self,
            corpus: corpus.into_iter(),
        }
    }

    /// Score the candidate compound `a` + `b` against the collected counts.
    ///
    /// Returns `None` when `a`, `b`, or their joined form is absent from the
    /// table — such pairs are never merge candidates. This is the same
    /// statistic `transform` compares against the threshold.
    pub fn score(&self, a: &str, b: &str) -> Option<f64> {
        let compound = format!("{}{}{}", a, self.config.delimiter, b);
        transform::score_compound(&self.vocab, &self.config, a, b, &compound)
    }

    /// The cumulative count table.
    pub fn vocab(&self) -> &CountTable {
        &self.vocab
    }

    /// Number of distinct keys currently in the table.
    pub fn vocab_len(&self) -> usize {
        self.vocab.len()
    }

    /// The current discard threshold. Starts at 1 and only ever increases.
    pub fn min_reduce(&self) -> u64 {
        self.min_reduce
    }

    /// The model's configuration.
    pub fn config(&self) -> &PhrasesConfig {
        &self.config
    }

    /// Diagnostic snapshot of the model's size and configuration.
    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            vocab_len: self.vocab.len(),
            min_reduce: self.min_reduce,
            min_count: self.config.min_count,
            threshold: self.config.threshold,
            max_vocab_size: self.config.max_vocab_size,
        }
    }
}

impl fmt::Display for Phrases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Phrases<{} vocab, min_count={}, threshold={}, max_vocab_size={}>",
            self.vocab.len(),
            self.config.min_count,
            self.config.threshold,
            self.config.max_vocab_size
        )
    }
}
