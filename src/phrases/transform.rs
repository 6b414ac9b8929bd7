//! Greedy phrase transformation.
//!
//! Turns a token sequence into a phrase sequence by scoring adjacent pairs
//! against the collected counts and joining the ones that score above the
//! configured threshold. The scan is left-to-right, greedy, and
//! non-overlapping: once a pair merges, its right member cannot start
//! another merge.

use crate::types::PhrasesConfig;
use crate::vocab::CountTable;

use super::Phrases;

/// Score one candidate compound, or `None` when any of the three keys is
/// missing from the table.
///
/// The statistic is `(count(ab) - min_count) / (count(a) * count(b))`
/// normalized by the current distinct-key count of the table.
pub(crate) fn score_compound(
    vocab: &CountTable,
    config: &PhrasesConfig,
    a: &str,
    b: &str,
    compound: &str,
) -> Option<f64> {
    let pa = *vocab.get(a)? as f64;
    let pb = *vocab.get(b)? as f64;
    let pab = *vocab.get(compound)? as f64;
    Some((pab - config.min_count as f64) / pa / pb * vocab.len() as f64)
}

/// Transform one sentence into a phrase sequence.
///
/// Pure with respect to the table: the same sentence against the same counts
/// and configuration always produces the same output. Tokens absent from the
/// table are never scored; they pass through wherever the scan would emit
/// them, except the sentence-final position, which requires table membership
/// to be emitted at all.
pub(crate) fn transform_sentence<S: AsRef<str>>(
    vocab: &CountTable,
    config: &PhrasesConfig,
    sentence: &[S],
) -> Vec<String> {
    let mut out = Vec::with_capacity(sentence.len());
    let mut last_was_merge = false;

    for pair in sentence.windows(2) {
        let a = pair[0].as_ref();
        let b = pair[1].as_ref();

        if !last_was_merge && vocab.contains_key(a) && vocab.contains_key(b) {
            let compound = format!("{}{}{}", a, config.delimiter, b);
            if let Some(score) = score_compound(vocab, config, a, b, &compound) {
                if score > config.threshold {
                    out.push(compound);
                    last_was_merge = true;
                    continue;
                }
            }
        }

        // No merge here. The left token is emitted unless the previous
        // iteration already consumed it as a merge's right member.
        if !last_was_merge {
            out.push(a.to_string());
        }
        last_was_merge = false;
    }

    if let Some(last) = sentence.last() {
        let last = last.as_ref();
        if vocab.contains_key(last) && !last_was_merge {
            out.push(last.to_string());
        }
    }

    out
}

/// Lazy phrase transformation over a corpus.
///
/// Created by [`Phrases::transform_all`]; applies
/// [`Phrases::transform`] to each sentence as it is pulled. Forward-only,
/// restartable only if the underlying corpus iterator is.
pub struct PhrasedCorpus<'a, I> {
    pub(crate) model: &'a Phrases,
    pub(crate) corpus: I,
}

impl<'a, I> Iterator for PhrasedCorpus<'a, I>
where
    I: Iterator,
    I::Item: AsRef<[String]>,
{
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.corpus
            .next()
            .map(|sentence| self.model.transform(sentence.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.corpus.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, u64)]) -> CountTable {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    fn config(min_count: u64, threshold: f64) -> PhrasesConfig {
        PhrasesConfig::new()
            .with_min_count(min_count)
            .with_threshold(threshold)
    }

    fn words(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    /// Pad a table with high-count filler keys until it has exactly `len`
    /// distinct entries, to pin the vocabulary-size normalizer.
    fn pad_to_len(vocab: &mut CountTable, len: usize) {
        let mut i = 0;
        while vocab.len() < len {
            vocab.insert(format!("filler{i}"), 1_000_000);
            i += 1;
        }
        assert_eq!(vocab.len(), len);
    }

    #[test]
    fn test_score_formula() {
        // (90 - 5) / (100 * 100) * 1000 = 8.5
        let mut vocab = table(&[("a", 100), ("b", 100), ("a_b", 90)]);
        pad_to_len(&mut vocab, 1000);
        let cfg = config(5, 10.0);

        let score = score_compound(&vocab, &cfg, "a", "b", "a_b").unwrap();
        assert!((score - 8.5).abs() < 1e-9);
    }

    #[test]
    fn test_score_none_when_key_missing() {
        let vocab = table(&[("a", 100), ("b", 100)]);
        let cfg = config(5, 10.0);
        assert!(score_compound(&vocab, &cfg, "a", "b", "a_b").is_none());
        assert!(score_compound(&vocab, &cfg, "a", "missing", "a_missing").is_none());
    }

    #[test]
    fn test_score_below_threshold_no_merge() {
        // Scores 8.5 and 9.0 stay at or below threshold 10, so the pair is
        // emitted unmerged either way.
        for pab in [90, 95] {
            let mut vocab = table(&[("a", 100), ("b", 100), ("a_b", pab)]);
            pad_to_len(&mut vocab, 1000);
            let cfg = config(5, 10.0);

            assert_eq!(
                transform_sentence(&vocab, &cfg, &words(&["a", "b"])),
                vec!["a", "b"]
            );
        }
    }

    #[test]
    fn test_score_above_threshold_merges() {
        // (5 - 1) / (5 * 5) * 3 = 0.48 > 0.1
        let vocab = table(&[("a", 5), ("b", 5), ("a_b", 5)]);
        let cfg = config(1, 0.1);

        assert_eq!(
            transform_sentence(&vocab, &cfg, &words(&["a", "b"])),
            vec!["a_b"]
        );
    }

    #[test]
    fn test_leftmost_greedy_non_overlapping() {
        // Both x_y and y_z score well above threshold, but y can only be
        // consumed once: the leftmost pair wins and z is emitted alone.
        let vocab = table(&[
            ("x", 5),
            ("y", 5),
            ("z", 5),
            ("x_y", 5),
            ("y_z", 5),
        ]);
        let cfg = config(1, 0.1);

        assert_eq!(
            transform_sentence(&vocab, &cfg, &words(&["x", "y", "z"])),
            vec!["x_y", "z"]
        );
    }

    #[test]
    fn test_merge_can_resume_after_gap() {
        // x_y merges, the (y, x) position is consumed, and the second x_y
        // merges again: two non-adjacent merges in one sentence.
        let vocab = table(&[("x", 10), ("y", 10), ("x_y", 10)]);
        let cfg = config(1, 0.1);

        assert_eq!(
            transform_sentence(&vocab, &cfg, &words(&["x", "y", "x", "y"])),
            vec!["x_y", "x_y"]
        );
    }

    #[test]
    fn test_empty_and_single_token_sentences_never_merge() {
        let vocab = table(&[("a", 5), ("a_a", 5)]);
        let cfg = config(1, 0.1);

        assert!(transform_sentence(&vocab, &cfg, &words(&[])).is_empty());
        assert_eq!(
            transform_sentence(&vocab, &cfg, &words(&["a"])),
            vec!["a"]
        );
    }

    #[test]
    fn test_unknown_tokens_pass_through_mid_sentence() {
        let vocab = table(&[("a", 5), ("b", 5)]);
        let cfg = config(1, 0.1);

        assert_eq!(
            transform_sentence(&vocab, &cfg, &words(&["mystery", "a", "b"])),
            vec!["mystery", "a", "b"]
        );
    }

    #[test]
    fn test_unknown_final_token_is_omitted() {
        // The sentence-final position requires table membership.
        let vocab = table(&[("a", 5)]);
        let cfg = config(1, 0.1);

        assert_eq!(
            transform_sentence(&vocab, &cfg, &words(&["a", "mystery"])),
            vec!["a"]
        );
        assert!(transform_sentence(&vocab, &cfg, &words(&["mystery"])).is_empty());
    }

    #[test]
    fn test_output_never_longer_than_input() {
        let vocab = table(&[("a", 5), ("b", 5), ("a_b", 5), ("c", 2)]);
        let cfg = config(1, 0.1);

        for sentence in [
            words(&[]),
            words(&["a"]),
            words(&["a", "b"]),
            words(&["a", "b", "c"]),
            words(&["c", "a", "b", "c", "a"]),
            words(&["unknown", "a", "b", "unknown"]),
        ] {
            let out = transform_sentence(&vocab, &cfg, &sentence);
            assert!(out.len() <= sentence.len());
        }
    }

    #[test]
    fn test_no_merge_below_min_count_margin() {
        // pab never exceeds min(pa, pb), so with min_count 5 and a threshold
        // above (100 - 5) / (100 * 100) * len, no count can merge this pair.
        let mut vocab = table(&[("a", 100), ("b", 100), ("a_b", 100)]);
        pad_to_len(&mut vocab, 1000);
        let cfg = config(5, 10.0);

        // Best possible score: (100 - 5) / 10000 * 1000 = 9.5
        let score = score_compound(&vocab, &cfg, "a", "b", "a_b").unwrap();
        assert!((score - 9.5).abs() < 1e-9);
        assert_eq!(
            transform_sentence(&vocab, &cfg, &words(&["a", "b"])),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_deterministic() {
        let vocab = table(&[("x", 5), ("y", 5), ("x_y", 5), ("z", 3)]);
        let cfg = config(1, 0.1);
        let sentence = words(&["z", "x", "y", "z"]);

        let first = transform_sentence(&vocab, &cfg, &sentence);
        let second = transform_sentence(&vocab, &cfg, &sentence);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_delimiter_in_output() {
        let vocab = table(&[("a", 5), ("b", 5), ("a+b", 5)]);
        let cfg = config(1, 0.1).with_delimiter("+");

        assert_eq!(
            transform_sentence(&vocab, &cfg, &words(&["a", "b"])),
            vec!["a+b"]
        );
    }
}
