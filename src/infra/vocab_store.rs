// ============================================================
// Layer 6 — Vocabulary File Store
// ============================================================
// Loads a BERT-style vocab.txt: one token per line, the token's
// id is its zero-based line number.
//
//   [PAD]      → 0
//   [UNK]      → 1
//   [CLS]      → 2
//   ...
//
// CharTokenizer then encodes text one character at a time against
// that table, which is how Chinese BERT vocabularies are usually
// consumed.

use std::{fs, path::Path};

use crate::data::encoding::pad_or_truncate;
use crate::domain::error::{DatasetError, Result};
use crate::domain::traits::TextTokenizer;
use crate::domain::vocabulary::{Vocabulary, PAD_TOKEN, UNK_TOKEN};

/// Read `vocab.txt` into a Vocabulary. Surrounding whitespace is
/// stripped from every line.
pub fn load_vocab(path: impl AsRef<Path>) -> Result<Vocabulary> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let vocab = Vocabulary::from_tokens(text.lines().map(str::trim));
    tracing::debug!("Loaded {} vocabulary entries from '{}'", vocab.len(), path.display());
    Ok(vocab)
}

/// One id per character; characters outside the vocabulary
/// become `[UNK]`.
#[derive(Debug, Clone)]
pub struct CharTokenizer {
    vocab: Vocabulary,
    pad:   u32,
    unk:   u32,
}

impl CharTokenizer {
    /// Needs `[PAD]` and `[UNK]` to exist in the vocabulary.
    pub fn new(vocab: Vocabulary) -> Result<Self> {
        let pad = vocab.require(PAD_TOKEN)?;
        let unk = vocab.require(UNK_TOKEN)?;
        Ok(Self { vocab, pad, unk })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(load_vocab(path)?)
    }
}

impl TextTokenizer for CharTokenizer {
    fn encode(&self, text: &str, max_length: usize) -> Result<Vec<u32>> {
        let mut buf = [0u8; 4];
        let ids = text
            .chars()
            .take(max_length)
            .map(|c| self.vocab.get(c.encode_utf8(&mut buf)).unwrap_or(self.unk))
            .collect();
        Ok(pad_or_truncate(ids, max_length, self.pad))
    }

    fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }
}
