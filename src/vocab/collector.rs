//! Single-pass vocabulary collection under a memory ceiling.
//!
//! [`learn_vocab`] streams sentences once, counting every token's appearance
//! as the left member of an adjacent pair, every delimiter-joined pair, and
//! each sentence's final token. Whenever the table grows past
//! `max_vocab_size` distinct keys, it is pruned at the current discard
//! threshold and the threshold is bumped by one, so later passes are stricter
//! and the number of passes stays bounded as the corpus grows.

use std::convert::Infallible;

use log::info;

use super::{prune_vocab, CountTable};

/// Log a progress line every this many sentences.
const PROGRESS_INTERVAL: u64 = 10_000;

/// Result of one collection pass over a sentence stream.
#[derive(Debug, Clone)]
pub struct LearnedVocab {
    /// The discard threshold after the final pruning pass. Starts at 1 and
    /// grows by one per pass; it is the floor the caller should never regress
    /// below when folding these counts into cumulative state.
    pub min_reduce: u64,
    /// Collected counts. Lower bounds, not exact, if any pruning ran.
    pub vocab: CountTable,
    /// Number of adjacent pairs observed across all sentences.
    pub total_words: u64,
    /// Number of sentences consumed.
    pub sentence_count: u64,
}

/// Collect unigram and bigram counts from a fallible sentence stream.
///
/// Each item is either a sentence or the collaborator's error (e.g. an I/O
/// failure from a file-backed corpus); the first error aborts collection and
/// is returned unchanged. The stream is consumed in a single forward pass
/// and may be unbounded up to the point of the memory ceiling.
pub fn try_learn_vocab<I, S, E>(
    sentences: I,
    max_vocab_size: usize,
    delimiter: &str,
) -> Result<LearnedVocab, E>
where
    I: IntoIterator<Item = Result<S, E>>,
    S: AsRef<[String]>,
{
    let mut vocab = CountTable::default();
    let mut min_reduce = 1u64;
    let mut total_words = 0u64;
    let mut sentence_count = 0u64;

    for sentence in sentences {
        let sentence = sentence?;
        let tokens = sentence.as_ref();

        if sentence_count % PROGRESS_INTERVAL == 0 {
            info!(
                "collecting: at sentence #{}, processed {} words and {} word types",
                sentence_count,
                total_words,
                vocab.len()
            );
        }

        for pair in tokens.windows(2) {
            let compound = format!("{}{}{}", pair[0], delimiter, pair[1]);
            total_words += 1;
            *vocab.entry(pair[0].clone()).or_insert(0) += 1;
            *vocab.entry(compound).or_insert(0) += 1;
        }
        // The final token is never a left member; count it here.
        if let Some(last) = tokens.last() {
            *vocab.entry(last.clone()).or_insert(0) += 1;
        }
        sentence_count += 1;

        if vocab.len() > max_vocab_size {
            prune_vocab(&mut vocab, min_reduce);
            min_reduce += 1;
        }
    }

    info!(
        "collected {} word types from a corpus of {} words and {} sentences",
        vocab.len(),
        total_words,
        sentence_count
    );

    Ok(LearnedVocab {
        min_reduce,
        vocab,
        total_words,
        sentence_count,
    })
}

/// Collect unigram and bigram counts from an infallible sentence stream.
///
/// See [`try_learn_vocab`] for the counting and pruning rules.
pub fn learn_vocab<I>(sentences: I, max_vocab_size: usize, delimiter: &str) -> LearnedVocab
where
    I: IntoIterator,
    I::Item: AsRef<[String]>,
{
    let result: Result<LearnedVocab, Infallible> = try_learn_vocab(
        sentences.into_iter().map(Ok),
        max_vocab_size,
        delimiter,
    );
    match result {
        Ok(learned) => learned,
        Err(never) => match never {},
    }
}
