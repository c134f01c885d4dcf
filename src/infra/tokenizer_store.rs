// ============================================================
// Layer 6 — Tokenizer Store
// ============================================================
// Loads a HuggingFace tokenizer.json (e.g. bert-base-chinese)
// and adapts it to the TextTokenizer trait.
//
// The tokenizer is asked for raw ids without special tokens;
// fixed-length padding and truncation happen here rather than
// through the tokenizer's own padding params, because titles and
// contents need different lengths from the same instance.

use anyhow::Result;
use std::path::PathBuf;
use tokenizers::Tokenizer;

use crate::data::encoding::pad_or_truncate;
use crate::domain::error::{self, DatasetError};
use crate::domain::traits::TextTokenizer;
use crate::domain::vocabulary::{Vocabulary, PAD_TOKEN};

pub struct TokenizerStore {
    path: PathBuf,
}

impl TokenizerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the tokenizer.json this store points at
    pub fn load(&self) -> Result<HfTokenizer> {
        let inner = Tokenizer::from_file(&self.path)
            .map_err(|e| anyhow::anyhow!(
                "Cannot load tokenizer from '{}': {}", self.path.display(), e
            ))?;

        let tokenizer = HfTokenizer::new(inner)?;
        tracing::info!(
            "Loaded tokenizer from '{}' ({} entries)",
            self.path.display(),
            tokenizer.vocabulary().len()
        );
        Ok(tokenizer)
    }
}

/// A HuggingFace tokenizer plus its vocabulary snapshot.
pub struct HfTokenizer {
    inner: Tokenizer,
    vocab: Vocabulary,
    pad:   u32,
}

impl HfTokenizer {
    /// Fails if the tokenizer has no `[PAD]` token.
    pub fn new(inner: Tokenizer) -> error::Result<Self> {
        // with_added_tokens = true: [CLS]/[SEP] are often added tokens
        let vocab = Vocabulary::new(inner.get_vocab(true));
        let pad   = vocab.require(PAD_TOKEN)?;
        Ok(Self { inner, vocab, pad })
    }
}

impl TextTokenizer for HfTokenizer {
    fn encode(&self, text: &str, max_length: usize) -> error::Result<Vec<u32>> {
        let enc = self
            .inner
            .encode(text, false)
            .map_err(|e| DatasetError::Tokenizer(e.to_string()))?;

        Ok(pad_or_truncate(enc.get_ids().to_vec(), max_length, self.pad))
    }

    fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::word_level_tokenizer;
    use tempfile::TempDir;

    #[test]
    fn test_load_and_encode_fixed_length() {
        let dir = TempDir::new().unwrap();
        let tok = word_level_tokenizer(&dir);

        assert_eq!(tok.encode("hello world", 4).unwrap(), vec![4, 5, 0, 0]);
        assert_eq!(tok.encode("hello nope world", 2).unwrap(), vec![4, 1]);
        assert_eq!(tok.encode("", 3).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn test_vocabulary_includes_special_tokens() {
        let dir = TempDir::new().unwrap();
        let tok = word_level_tokenizer(&dir);

        let vocab = tok.vocabulary();
        assert_eq!(vocab.len(), 6);
        assert_eq!(vocab.get("[SEP]"), Some(3));
        assert!(vocab.special_tokens().is_ok());
    }

    #[test]
    fn test_missing_tokenizer_file() {
        let dir = TempDir::new().unwrap();
        let res = TokenizerStore::new(dir.path().join("absent.json")).load();
        assert!(res.is_err());
    }
}
