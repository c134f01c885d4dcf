// ============================================================
// Layer 2 — Load Use Case
// ============================================================
// Wires the pipeline together for a training loop:
//
//   Step 1: Pick a tokenizer           (Layer 6 - infra)
//   Step 2: Resolve special tokens     (Layer 4 - data)
//   Step 3: Read + encode the corpus   (Layer 4 - data)
//   Step 4: Wrap in a Burn DataLoader  (Layer 4 - data)
//
// The derived vocabulary fields are handed back to the caller,
// who merges them into its own configuration explicitly.
//
// Reference: Burn Book §4 (Dataloaders)

use std::{path::Path, sync::Arc};

use anyhow::{Context, Result};
use burn::{
    data::dataloader::{DataLoader, DataLoaderBuilder},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::data::{
    batcher::{SummaryBatch, SummaryBatcher},
    generator::{build_dataset, EncodingMode, GeneratorOptions},
};
use crate::domain::{
    error::DatasetError,
    traits::{SequenceSource, TextTokenizer},
    vocabulary::DerivedConfig,
};
use crate::infra::{tokenizer_store::TokenizerStore, vocab_store::CharTokenizer};

// ─── Loader Configuration ────────────────────────────────────────────────────
// Everything the loader reads, plus the derived vocabulary fields
// once a caller has merged them in. Serialisable so the same file
// can be shared with the training side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub train_data_path:    String,
    /// HuggingFace tokenizer.json; takes precedence over `vocab_path`
    pub tokenizer_path:     Option<String>,
    /// Plain vocab.txt, one token per line
    pub vocab_path:         Option<String>,
    pub batch_size:         usize,
    pub title_max_length:   usize,
    pub content_max_length: usize,
    /// Encode per character instead of through the tokenizer
    pub character_mode:     bool,
    /// Fixed shuffle seed; a random one is drawn when unset
    pub shuffle_seed:       Option<u64>,
    #[serde(flatten)]
    pub derived:            Option<DerivedConfig>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            train_data_path:    "demos/sample_data.json".to_string(),
            tokenizer_path:     None,
            vocab_path:         None,
            batch_size:         32,
            title_max_length:   29,
            content_max_length: 300,
            character_mode:     false,
            shuffle_seed:       None,
            derived:            None,
        }
    }
}

impl LoaderConfig {
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.batch_size == 0 {
            return Err(DatasetError::InvalidConfig("batch_size must be positive".into()));
        }
        if self.title_max_length == 0 || self.content_max_length == 0 {
            return Err(DatasetError::InvalidConfig(
                "title_max_length and content_max_length must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Record the fields derived from the tokenizer's vocabulary.
    pub fn merge_derived(&mut self, derived: DerivedConfig) {
        self.derived = Some(derived);
    }

    /// Ids per sample: title, separator, content.
    pub fn sequence_length(&self) -> usize {
        GeneratorOptions::from(self).sequence_length()
    }
}

impl From<&LoaderConfig> for GeneratorOptions {
    fn from(c: &LoaderConfig) -> Self {
        GeneratorOptions {
            title_max_length:   c.title_max_length,
            content_max_length: c.content_max_length,
            mode: if c.character_mode { EncodingMode::Character } else { EncodingMode::Tokenizer },
        }
    }
}

/// Open whichever tokenizer the config names.
pub fn open_tokenizer(cfg: &LoaderConfig) -> Result<Box<dyn TextTokenizer>> {
    if let Some(path) = &cfg.tokenizer_path {
        return Ok(Box::new(TokenizerStore::new(path).load()?));
    }
    if let Some(path) = &cfg.vocab_path {
        let tok = CharTokenizer::from_file(path)
            .with_context(|| format!("Cannot build character tokenizer from '{path}'"))?;
        return Ok(Box::new(tok));
    }
    anyhow::bail!("either tokenizer_path or vocab_path must be set")
}

// ─── LoadedData ───────────────────────────────────────────────────────────────
/// A ready-to-iterate batch source and what was learned building it.
pub struct LoadedData<B: Backend> {
    pub loader:      Arc<dyn DataLoader<SummaryBatch<B>>>,
    pub derived:     DerivedConfig,
    pub num_records: usize,
}

/// Build the dataset at `path` and wrap it in a Burn DataLoader.
///
/// With `shuffle` the record order changes on every pass; without
/// it batches come out in file order. The last batch of a pass is
/// smaller when the record count isn't a multiple of `batch_size`.
pub fn load_data<B: Backend>(
    path:      impl AsRef<Path>,
    cfg:       &LoaderConfig,
    tokenizer: &dyn TextTokenizer,
    shuffle:   bool,
    device:    B::Device,
) -> Result<LoadedData<B>> {
    cfg.validate()?;
    let path = path.as_ref();

    let (dataset, derived) = build_dataset(path, tokenizer, cfg.into())
        .with_context(|| format!("Failed to load dataset '{}'", path.display()))?;
    let num_records = dataset.length();

    // No num_workers: burn's worker loader batches each partition
    // separately, giving one short batch per worker and no ordering.

    let mut builder = DataLoaderBuilder::new(SummaryBatcher::<B>::new(device))
        .batch_size(cfg.batch_size);

    if shuffle {
        let seed = cfg.shuffle_seed.unwrap_or_else(rand::random);
        tracing::debug!("Shuffling with seed {}", seed);
        builder = builder.shuffle(seed);
    }

    tracing::info!(
        "DataLoader ready: {} records, batch_size={}, shuffle={}",
        num_records,
        cfg.batch_size,
        shuffle,
    );

    Ok(LoadedData {
        loader:  builder.build(dataset),
        derived,
        num_records,
    })
}
