// ============================================================
// Layer 6 — Config Store
// ============================================================
// Reads and writes LoaderConfig as pretty-printed JSON.
//
// A config written after loading carries the derived fields
// (vocab_size, pad_idx, start_idx, end_idx) at the top level, so
// the model side can size its embedding table from the same file.
// Those four fields come as a set: a file naming only some of them
// is rejected rather than loaded without them.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::{fs, path::Path};

use crate::application::load_use_case::LoaderConfig;
use crate::domain::{error::DatasetError, vocabulary::DerivedConfig};

const DERIVED_KEYS: [&str; 4] = ["vocab_size", "pad_idx", "start_idx", "end_idx"];

pub fn save_config(path: impl AsRef<Path>, cfg: &LoaderConfig) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(cfg)?;

    fs::write(path, json)
        .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

    tracing::debug!("Saved loader config to '{}'", path.display());
    Ok(())
}

/// Missing fields fall back to `LoaderConfig::default()`.
pub fn load_config(path: impl AsRef<Path>) -> Result<LoaderConfig> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

    let value: Value = serde_json::from_str(&json)
        .with_context(|| format!("Invalid config JSON in '{}'", path.display()))?;
    check_derived_block(&value)
        .with_context(|| format!("Invalid derived fields in '{}'", path.display()))?;

    let cfg: LoaderConfig = serde_json::from_value(value)
        .with_context(|| format!("Invalid config JSON in '{}'", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// All of `DERIVED_KEYS` or none of them, with the right types.
fn check_derived_block(value: &Value) -> Result<(), DatasetError> {
    let missing: Vec<&str> = DERIVED_KEYS
        .into_iter()
        .filter(|key| value.get(key).is_none())
        .collect();

    match missing.len() {
        4 => Ok(()),
        0 => DerivedConfig::deserialize(value)
            .map(|_| ())
            .map_err(|e| DatasetError::InvalidConfig(format!("derived fields: {e}"))),
        _ => Err(DatasetError::InvalidConfig(format!(
            "incomplete derived fields, missing {}",
            missing.join(", ")
        ))),
    }
}
