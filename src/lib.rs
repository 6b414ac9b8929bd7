//! Streaming collocation detection.
//!
//! Detects frequently co-occurring adjacent token pairs ("collocations") in a
//! stream of tokenized sentences and joins them into single compound tokens,
//! e.g. `new york` becomes `new_york`. Counting runs in a single pass under a
//! configurable memory ceiling: whenever the count table grows past
//! `max_vocab_size` distinct keys, low-count entries are pruned at an
//! escalating discard threshold, so the table never grows without bound no
//! matter how large the corpus is.
//!
//! # Quick start
//!
//! ```
//! use collocate::{Phrases, PhrasesConfig};
//!
//! let sentences: Vec<Vec<String>> = (0..5)
//!     .map(|_| vec!["new".to_string(), "york".to_string()])
//!     .collect();
//!
//! let config = PhrasesConfig::default()
//!     .with_min_count(1)
//!     .with_threshold(0.1);
//! let mut model = Phrases::new(config).unwrap();
//! model.add_vocab(&sentences);
//!
//! let phrased = model.transform(&["new".to_string(), "york".to_string()]);
//! assert_eq!(phrased, vec!["new_york"]);
//! ```
//!
//! # Longer phrases
//!
//! The detector only ever joins adjacent pairs. To get phrases longer than
//! two tokens (`new_york_times`), train a second model on the output of the
//! first and run the sentences through both.
//!
//! # Memory and accuracy
//!
//! Pruned keys are gone for good; if a pruned token reappears later, its new
//! count starts from zero. Recorded counts are therefore lower bounds on true
//! corpus frequency, exact for any key that was never pruned. Generous
//! `max_vocab_size` values keep counts exact; tight ones trade accuracy for
//! memory.

pub mod corpus;
pub mod error;
pub mod phrases;
pub mod types;
pub mod vocab;

pub use error::ConfigError;
pub use phrases::{ModelSummary, PhrasedCorpus, Phrases};
pub use types::{PhrasesConfig, Sentence};
pub use vocab::collector::{learn_vocab, try_learn_vocab, LearnedVocab};
pub use vocab::{prune_vocab, CountTable};
