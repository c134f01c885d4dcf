// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Two seams keep the data pipeline independent of concrete types:
//
//   TextTokenizer:   anything that turns text into fixed-length
//                    id sequences and exposes its vocabulary
//                    (HuggingFace tokenizer.json, or a plain
//                    character vocabulary file)
//
//   SequenceSource:  an ordered, index-addressable collection
//                    of encoded samples
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::error::Result;
use crate::domain::vocabulary::Vocabulary;

// ─── TextTokenizer ────────────────────────────────────────────────────────────
/// Maps raw text to vocabulary ids.
///
/// Implementations:
///   - HfTokenizer   → wraps a HuggingFace `tokenizers::Tokenizer`
///   - CharTokenizer → one id per character from a vocab.txt file
pub trait TextTokenizer: Send + Sync {
    /// Encode `text` into exactly `max_length` ids.
    ///
    /// Longer input is truncated on the right, shorter input is
    /// right-padded with the `[PAD]` id. No special tokens are added.
    fn encode(&self, text: &str, max_length: usize) -> Result<Vec<u32>>;

    /// The full token → id table, special tokens included.
    fn vocabulary(&self) -> &Vocabulary;
}

// ─── SequenceSource ───────────────────────────────────────────────────────────
/// Positional access to a built dataset.
pub trait SequenceSource {
    type Item;

    /// Number of records that were loaded.
    fn length(&self) -> usize;

    /// The stored item at `index`, or `IndexOutOfRange`.
    fn at(&self, index: usize) -> Result<&Self::Item>;
}
