//! File-backed sentence streams.
//!
//! The model only requires a single forward pass over "a sequence of
//! sentences"; this module provides the simplest useful collaborator: one
//! sentence per line, tokens split on whitespace. Anything smarter —
//! real tokenization, normalization, non-text sources — belongs upstream.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

use crate::types::Sentence;

/// Streams sentences from a text file, one sentence per line.
///
/// Tokens are whitespace-separated; blank lines yield empty sentences, which
/// the collector ignores. Yields `io::Result` items so read failures surface
/// at the failing line, ready for [`Phrases::try_add_vocab`](crate::Phrases::try_add_vocab):
///
/// ```no_run
/// use collocate::{corpus::LineSentences, Phrases, PhrasesConfig};
///
/// # fn main() -> std::io::Result<()> {
/// let mut model = Phrases::new(PhrasesConfig::default()).unwrap();
/// model.try_add_vocab(LineSentences::open("corpus.txt")?)?;
/// # Ok(())
/// # }
/// ```
pub struct LineSentences {
    lines: Lines<BufReader<File>>,
}

impl LineSentences {
    /// Open `path` for sentence streaming.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
        })
    }
}

impl Iterator for LineSentences {
    type Item = io::Result<Sentence>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| {
            line.map(|l| l.split_whitespace().map(str::to_string).collect())
        })
    }
}
