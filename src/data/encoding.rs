// ============================================================
// Layer 4 — Sentence Encoding
// ============================================================
// Character-level encoding against a fixed vocabulary, plus the
// pad/truncate step every encoder in the crate shares.
//
// Why fixed length?
//   Samples are stacked into one [batch, seq_len] tensor, so every
//   row must have the same number of ids. Shorter sequences are
//   right-padded with [PAD], longer ones are cut on the right.
//
// Example (max_length = 6, with_cls, with_sep):
//   "abc"      → [CLS] a b c [SEP] [PAD]
//   "abcdefgh" → [CLS] a b c d e        (SEP falls off the end)
//
// Reference: Rust Book §8 (Strings), §13 (Iterators)

use crate::domain::error::Result;
use crate::domain::vocabulary::{SpecialTokens, Vocabulary};

/// Truncate `ids` to `length`, then right-pad with `pad` up to `length`.
///
/// Applying it twice with the same `length` gives the same result
/// as applying it once.
pub fn pad_or_truncate(mut ids: Vec<u32>, length: usize, pad: u32) -> Vec<u32> {
    ids.truncate(length);
    ids.resize(length, pad);
    ids
}

/// Character-by-character encoder over a vocabulary.
#[derive(Debug, Clone)]
pub struct SentenceEncoder {
    vocab:   Vocabulary,
    special: SpecialTokens,
}

impl SentenceEncoder {
    /// Fails if any of the four special tokens is missing.
    pub fn new(vocab: Vocabulary) -> Result<Self> {
        let special = vocab.special_tokens()?;
        Ok(Self { vocab, special })
    }

    /// Look each character up in the vocabulary (unknown → `[UNK]`),
    /// optionally wrap in `[CLS]` … `[SEP]`, then pad to `max_length`.
    pub fn encode_sentence(
        &self,
        text:       &str,
        max_length: usize,
        with_cls:   bool,
        with_sep:   bool,
    ) -> Vec<u32> {
        let mut ids = Vec::with_capacity(text.len() + 2);

        if with_cls {
            ids.push(self.special.cls);
        }

        // A char is not a &str, so build a tiny buffer per lookup
        let mut buf = [0u8; 4];
        ids.extend(text.chars().map(|c| {
            self.vocab
                .get(c.encode_utf8(&mut buf))
                .unwrap_or(self.special.unk)
        }));

        if with_sep {
            ids.push(self.special.sep);
        }

        self.padding(ids, max_length)
    }

    /// Truncate or right-pad with this vocabulary's `[PAD]` id.
    pub fn padding(&self, ids: Vec<u32>, length: usize) -> Vec<u32> {
        pad_or_truncate(ids, length, self.special.pad)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::char_vocab;

    const PAD: u32 = 0;
    const UNK: u32 = 1;
    const CLS: u32 = 2;
    const SEP: u32 = 3;

    fn encoder() -> SentenceEncoder {
        SentenceEncoder::new(char_vocab()).unwrap()
    }

    #[test]
    fn test_empty_text_with_both_markers() {
        let ids = encoder().encode_sentence("", 5, true, true);
        assert_eq!(ids, vec![CLS, SEP, PAD, PAD, PAD]);
    }

    #[test]
    fn test_unknown_characters_map_to_unk() {
        let vocab = char_vocab();
        let ids   = encoder().encode_sentence("a?b", 3, false, false);
        assert_eq!(ids[0], vocab.get("a").unwrap());
        assert_eq!(ids[1], UNK);
        assert_eq!(ids[2], vocab.get("b").unwrap());
    }

    #[test]
    fn test_long_text_drops_separator() {
        let ids = encoder().encode_sentence("abcdefgh", 6, true, true);
        assert_eq!(ids.len(), 6);
        assert_eq!(ids[0], CLS);
        assert!(!ids.contains(&SEP));
    }

    #[test]
    fn test_padding_truncates_and_pads() {
        let e = encoder();
        assert_eq!(e.padding(vec![7, 8, 9], 2), vec![7, 8]);
        assert_eq!(e.padding(vec![7], 3), vec![7, PAD, PAD]);
        assert_eq!(e.padding(Vec::new(), 0), Vec::<u32>::new());
    }

    #[test]
    fn test_padding_is_idempotent() {
        let e = encoder();
        for input in [vec![], vec![5, 6], vec![4, 5, 6, 7, 8, 9, 10]] {
            for n in [0, 1, 3, 8] {
                let once  = e.padding(input.clone(), n);
                let twice = e.padding(once.clone(), n);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn test_encoder_requires_unk() {
        let vocab = Vocabulary::from_tokens(["[PAD]", "[CLS]", "[SEP]", "a"]);
        assert!(SentenceEncoder::new(vocab).is_err());
    }
}
