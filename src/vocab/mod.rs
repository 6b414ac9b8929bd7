//! Count tables and pruning.
//!
//! The count table maps every observed key — plain tokens and delimiter-joined
//! compound keys alike — to its occurrence count. [`prune_vocab`] is the
//! memory-ceiling mechanism: it drops every entry at or below a discard
//! threshold, in place.

pub mod collector;

use rustc_hash::FxHashMap;

/// Mapping from token (or compound key) to its collected count.
///
/// Counts are lower bounds on true corpus frequency: a pruning pass can
/// remove a key, and a key that reappears afterwards restarts from zero.
pub type CountTable = FxHashMap<String, u64>;

/// Remove every entry whose count is `<= discard_threshold`, in place.
///
/// Removal is irreversible. Safe to call on any table; an empty table or a
/// threshold below every count leaves it unchanged.
pub fn prune_vocab(vocab: &mut CountTable, discard_threshold: u64) {
    vocab.retain(|_, count| *count > discard_threshold);
}
