// ============================================================
// Layer 4 — Dataset Generator
// ============================================================
// Reads a JSONL corpus and turns every line into one fixed-length
// id sequence:
//
//   {"title": "...", "content": "..."}
//       │
//       ▼
//   title   → tokenizer → 29 ids  ─┐
//             + [SEP]   →  1 id    ├─ concatenated → 330 ids
//   content → tokenizer → 300 ids ─┘
//
// The whole file is read eagerly. One bad line aborts the load;
// there is no skip-and-continue path.
//
// Two encoding modes are supported:
//   Tokenizer → subword ids from the TextTokenizer (default)
//   Character → per-character lookup through SentenceEncoder,
//               the layout used with a plain vocab.txt
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::data::dataset::{SummaryDataset, SummarySample};
use crate::data::encoding::SentenceEncoder;
use crate::domain::error::{DatasetError, Result};
use crate::domain::record::Record;
use crate::domain::traits::TextTokenizer;
use crate::domain::vocabulary::DerivedConfig;

/// How a record's text is mapped to ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingMode {
    #[default]
    Tokenizer,
    Character,
}

/// Segment lengths and encoding mode for the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Title ids before the separator is appended
    pub title_max_length:   usize,
    pub content_max_length: usize,
    pub mode:               EncodingMode,
}

impl GeneratorOptions {
    /// Total ids per sample: title, one separator, content.
    pub fn sequence_length(&self) -> usize {
        self.title_max_length + 1 + self.content_max_length
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            title_max_length:   29,
            content_max_length: 300,
            mode:               EncodingMode::Tokenizer,
        }
    }
}

/// Builds a `SummaryDataset` from a JSONL file.
pub struct DataGenerator<'t> {
    tokenizer: &'t dyn TextTokenizer,
    options:   GeneratorOptions,
    derived:   DerivedConfig,
    /// Only present in character mode
    encoder:   Option<SentenceEncoder>,
}

impl<'t> DataGenerator<'t> {
    /// Resolve the special tokens from the tokenizer's vocabulary.
    ///
    /// Fails with `MissingSpecialToken` if `[PAD]`, `[CLS]` or `[SEP]`
    /// is absent (and `[UNK]` too in character mode).
    pub fn new(tokenizer: &'t dyn TextTokenizer, options: GeneratorOptions) -> Result<Self> {
        let vocab   = tokenizer.vocabulary();
        let derived = DerivedConfig::from_vocabulary(vocab)?;

        let encoder = match options.mode {
            EncodingMode::Tokenizer => None,
            EncodingMode::Character => Some(SentenceEncoder::new(vocab.clone())?),
        };

        tracing::debug!(
            "Vocabulary resolved: size={}, pad={}, cls={}, sep={}",
            derived.vocab_size,
            derived.pad_idx,
            derived.start_idx,
            derived.end_idx,
        );

        Ok(Self { tokenizer, options, derived, encoder })
    }

    /// The fields the caller should merge into its configuration.
    pub fn derived(&self) -> DerivedConfig {
        self.derived
    }

    /// Read and encode every line of `path`.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<SummaryDataset> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = self.load_reader(BufReader::new(file), path)?;

        tracing::info!(
            "Loaded {} records from '{}'",
            dataset.samples().len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Same as `load` over any buffered reader. `origin` only
    /// appears in IO error messages.
    pub fn load_reader<R: BufRead>(&self, reader: R, origin: &Path) -> Result<SummaryDataset> {
        let mut samples = Vec::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| DatasetError::Io {
                path: origin.to_path_buf(),
                source,
            })?;

            let record = Record::parse_line(&line, i + 1)?;
            samples.push(self.prepare_record(&record)?);
        }

        Ok(SummaryDataset::new(samples))
    }

    /// Encode one record into title ids, `[SEP]`, content ids.
    pub fn prepare_record(&self, record: &Record) -> Result<SummarySample> {
        let o = &self.options;

        let input_ids = match &self.encoder {
            None => {
                let mut ids = self.tokenizer.encode(&record.title, o.title_max_length)?;
                ids.push(self.derived.end_idx);
                ids.extend(self.tokenizer.encode(&record.content, o.content_max_length)?);
                ids
            }
            // The title slot is one longer so [SEP] lands inside it
            // (or is truncated away for very long titles)
            Some(enc) => {
                let mut ids = enc.encode_sentence(&record.title, o.title_max_length + 1, false, true);
                ids.extend(enc.encode_sentence(&record.content, o.content_max_length, false, true));
                ids
            }
        };

        debug_assert_eq!(input_ids.len(), o.sequence_length());
        Ok(SummarySample::new(input_ids))
    }
}

/// Build a dataset and return it with its derived config fields.
pub fn build_dataset(
    path:      impl AsRef<Path>,
    tokenizer: &dyn TextTokenizer,
    options:   GeneratorOptions,
) -> Result<(SummaryDataset, DerivedConfig)> {
    let generator = DataGenerator::new(tokenizer, options)?;
    let dataset   = generator.load(path)?;
    Ok((dataset, generator.derived()))
}
