// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Three subcommands: `inspect`, `encode` and `derive`.
//
// Tokenizer flags are shared through `TokenizerArgs` so every
// command picks its tokenizer the same way: an explicit flag wins,
// otherwise whatever the config file names.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::load_use_case::LoaderConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a corpus and print the shape of the first batch
    Inspect(InspectArgs),

    /// Encode a single title/content pair and print its ids
    Encode(EncodeArgs),

    /// Write the config merged with the vocabulary-derived fields
    Derive(DeriveArgs),
}

#[derive(Args, Debug, Clone)]
pub struct TokenizerArgs {
    /// Loader config JSON; flags below override its fields
    #[arg(long)]
    pub config: Option<String>,

    /// HuggingFace tokenizer.json
    #[arg(long, conflicts_with = "vocab")]
    pub tokenizer: Option<String>,

    /// Plain vocab.txt (one token per line)
    #[arg(long)]
    pub vocab: Option<String>,

    /// Encode per character instead of through the tokenizer
    #[arg(long)]
    pub character_mode: bool,
}

impl TokenizerArgs {
    /// Apply the flags on top of an already loaded config.
    pub fn apply(&self, cfg: &mut LoaderConfig) {
        if let Some(t) = &self.tokenizer {
            cfg.tokenizer_path = Some(t.clone());
            cfg.vocab_path     = None;
        }
        if let Some(v) = &self.vocab {
            cfg.vocab_path     = Some(v.clone());
            cfg.tokenizer_path = None;
        }
        if self.character_mode {
            cfg.character_mode = true;
        }
    }
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// JSONL corpus with "title" and "content" on every line
    #[arg(long)]
    pub data: Option<String>,

    #[command(flatten)]
    pub tokenizer: TokenizerArgs,

    /// Records per batch
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Keep file order instead of shuffling
    #[arg(long)]
    pub no_shuffle: bool,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub content: String,

    #[command(flatten)]
    pub tokenizer: TokenizerArgs,
}

#[derive(Args, Debug)]
pub struct DeriveArgs {
    #[command(flatten)]
    pub tokenizer: TokenizerArgs,

    /// Where to write the merged config; stdout when omitted
    #[arg(long)]
    pub out: Option<String>,
}
