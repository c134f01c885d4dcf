// ============================================================
// Layer 3 — Vocabulary and Special Tokens
// ============================================================
// A vocabulary maps every known token to a unique integer id.
// Four entries have a structural role and must always exist:
//
//   [PAD]  fills the unused tail of a fixed-length sequence
//   [CLS]  marks the start of a sequence
//   [SEP]  separates segments (title | content) and ends them
//   [UNK]  stands in for characters the vocabulary doesn't know
//
// The vocabulary is immutable once built. The tokenizer owns it,
// the dataset builder keeps a read-only copy.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::error::{DatasetError, Result};

pub const PAD_TOKEN: &str = "[PAD]";
pub const CLS_TOKEN: &str = "[CLS]";
pub const SEP_TOKEN: &str = "[SEP]";
pub const UNK_TOKEN: &str = "[UNK]";

/// Token → id lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    token_to_id: HashMap<String, u32>,
}

impl Vocabulary {
    pub fn new(token_to_id: HashMap<String, u32>) -> Self {
        Self { token_to_id }
    }

    /// Build a vocabulary where each token's id is its position.
    ///
    /// If a token appears twice, the later position wins and the
    /// entry count stays the number of distinct tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let token_to_id = tokens
            .into_iter()
            .enumerate()
            .map(|(id, token)| (token.into(), id as u32))
            .collect();
        Self { token_to_id }
    }

    /// Number of entries, i.e. the `vocab_size` a model embeds.
    pub fn len(&self) -> usize {
        self.token_to_id.len()
    }

    pub fn get(&self, token: &str) -> Option<u32> {
        self.token_to_id.get(token).copied()
    }

    /// Like `get`, but a missing token is a configuration error.
    pub fn require(&self, token: &str) -> Result<u32> {
        self.get(token)
            .ok_or_else(|| DatasetError::MissingSpecialToken(token.to_string()))
    }

    /// Resolve all four special tokens at once.
    pub fn special_tokens(&self) -> Result<SpecialTokens> {
        Ok(SpecialTokens {
            pad: self.require(PAD_TOKEN)?,
            cls: self.require(CLS_TOKEN)?,
            sep: self.require(SEP_TOKEN)?,
            unk: self.require(UNK_TOKEN)?,
        })
    }
}

/// Resolved ids of the reserved tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialTokens {
    pub pad: u32,
    pub cls: u32,
    pub sep: u32,
    pub unk: u32,
}

// ─── DerivedConfig ────────────────────────────────────────────────────────────
/// Fields computed from the vocabulary when a dataset is built.
///
/// The builder returns this value instead of writing into the
/// caller's configuration; callers merge it explicitly with
/// `LoaderConfig::merge_derived`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedConfig {
    pub vocab_size: usize,
    pub pad_idx:    u32,
    pub start_idx:  u32,
    pub end_idx:    u32,
}

impl DerivedConfig {
    /// Looks up `[PAD]`, `[CLS]` and `[SEP]`. `[UNK]` is not needed
    /// here, only the character-level encoder depends on it.
    pub fn from_vocabulary(vocab: &Vocabulary) -> Result<Self> {
        Ok(Self {
            vocab_size: vocab.len(),
            pad_idx:    vocab.require(PAD_TOKEN)?,
            start_idx:  vocab.require(CLS_TOKEN)?,
            end_idx:    vocab.require(SEP_TOKEN)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tokens_assigns_positions() {
        let vocab = Vocabulary::from_tokens(["[PAD]", "[UNK]", "a"]);
        assert_eq!(vocab.get("[PAD]"), Some(0));
        assert_eq!(vocab.get("a"), Some(2));
        assert_eq!(vocab.get("b"), None);
    }

    #[test]
    fn test_duplicate_token_keeps_last_position() {
        let vocab = Vocabulary::from_tokens(["x", "y", "x"]);
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.get("x"), Some(2));
    }

    #[test]
    fn test_derived_config_counts_entries() {
        let vocab   = Vocabulary::from_tokens(["[PAD]", "[UNK]", "[CLS]", "[SEP]", "a", "b"]);
        let derived = DerivedConfig::from_vocabulary(&vocab).unwrap();
        assert_eq!(derived.vocab_size, 6);
        assert_eq!(derived.pad_idx, 0);
        assert_eq!(derived.start_idx, 2);
        assert_eq!(derived.end_idx, 3);
    }

    #[test]
    fn test_missing_separator_is_configuration_error() {
        let vocab = Vocabulary::from_tokens(["[PAD]", "[UNK]", "[CLS]"]);
        let err   = DerivedConfig::from_vocabulary(&vocab).unwrap_err();
        assert!(matches!(err, DatasetError::MissingSpecialToken(ref t) if t == "[SEP]"));
    }

    #[test]
    fn test_special_tokens_requires_unk() {
        let vocab = Vocabulary::from_tokens(["[PAD]", "[CLS]", "[SEP]"]);
        assert!(vocab.special_tokens().is_err());
        assert!(DerivedConfig::from_vocabulary(&vocab).is_ok());
    }
}
