// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// A small demonstration surface over the loader. All real work
// is delegated to Layer 2 (application).
//
//   `inspect`: build the DataLoader and show what a batch looks like
//   `encode`:  show the 330 ids one record turns into
//   `derive`:  emit the config with vocab_size / pad_idx / ... filled in
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use burn::backend::NdArray;
use clap::Parser;
use commands::{Commands, DeriveArgs, EncodeArgs, InspectArgs, TokenizerArgs};

use crate::application::load_use_case::{load_data, open_tokenizer, LoaderConfig};
use crate::data::generator::DataGenerator;
use crate::domain::record::Record;
use crate::domain::traits::TextTokenizer;
use crate::infra::config_store::{load_config, save_config};

/// Batches are only built for display, the CPU backend is enough
type CliBackend = NdArray;

#[derive(Parser, Debug)]
#[command(
    name = "summary-loader",
    version = "0.1.0",
    about = "Encode title/content JSONL into fixed-length token batches."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Inspect(args) => run_inspect(args),
            Commands::Encode(args)  => run_encode(args),
            Commands::Derive(args)  => run_derive(args),
        }
    }
}

/// Config file (or defaults) with the tokenizer flags applied.
fn resolve_config(args: &TokenizerArgs) -> Result<LoaderConfig> {
    let mut cfg = match &args.config {
        Some(path) => load_config(path)?,
        None       => LoaderConfig::default(),
    };
    args.apply(&mut cfg);
    Ok(cfg)
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let mut cfg = resolve_config(&args.tokenizer)?;
    if let Some(data) = args.data {
        cfg.train_data_path = data;
    }
    if let Some(bs) = args.batch_size {
        cfg.batch_size = bs;
    }

    let tokenizer = open_tokenizer(&cfg)?;
    let data      = load_data::<CliBackend>(
        &cfg.train_data_path,
        &cfg,
        tokenizer.as_ref(),
        !args.no_shuffle,
        Default::default(),
    )?;

    tracing::info!("Derived config: {:?}", data.derived);
    println!("records:     {}", data.num_records);
    println!("vocab_size:  {}", data.derived.vocab_size);
    println!("pad/cls/sep: {}/{}/{}", data.derived.pad_idx, data.derived.start_idx, data.derived.end_idx);

    match data.loader.iter().next() {
        Some(batch) => {
            println!("first batch: {:?}", batch.input_ids.dims());
            println!("targets:     {:?}", batch.target_ids.as_ref().map(|t| t.dims()));
            let first: Vec<i64> = batch
                .input_ids
                .slice([0..1, 0..cfg.sequence_length()])
                .into_data()
                .iter::<i64>()
                .collect();
            println!("first row:   {:?}", first);
        }
        None => println!("first batch: <empty dataset>"),
    }
    Ok(())
}

fn run_encode(args: EncodeArgs) -> Result<()> {
    let cfg       = resolve_config(&args.tokenizer)?;
    let tokenizer = open_tokenizer(&cfg)?;
    let generator = DataGenerator::new(tokenizer.as_ref(), (&cfg).into())?;

    let sample = generator.prepare_record(&Record::new(args.title, args.content))?;
    println!("{}", serde_json::to_string(&sample.input_ids)?);
    Ok(())
}

fn run_derive(args: DeriveArgs) -> Result<()> {
    let mut cfg   = resolve_config(&args.tokenizer)?;
    let tokenizer = open_tokenizer(&cfg)?;
    let generator = DataGenerator::new(tokenizer.as_ref(), (&cfg).into())?;

    cfg.merge_derived(generator.derived());
    tracing::info!("vocab_size={}", tokenizer.vocabulary().len());

    match args.out {
        Some(path) => {
            save_config(&path, &cfg)?;
            println!("Config written to '{}'", path);
        }
        None => println!("{}", serde_json::to_string_pretty(&cfg)?),
    }
    Ok(())
}
