//! Shared fixtures for unit tests.

use std::io::Write;
use std::path::PathBuf;

use tempfile::{NamedTempFile, TempDir};

use crate::domain::vocabulary::Vocabulary;
use crate::infra::{
    tokenizer_store::{HfTokenizer, TokenizerStore},
    vocab_store::CharTokenizer,
};

/// `[PAD]`=0, `[UNK]`=1, `[CLS]`=2, `[SEP]`=3, then `a`..=`z`.
pub fn char_vocab() -> Vocabulary {
    let specials = ["[PAD]", "[UNK]", "[CLS]", "[SEP]"].map(String::from);
    let letters  = ('a'..='z').map(String::from);
    Vocabulary::from_tokens(specials.into_iter().chain(letters))
}

pub fn char_tokenizer() -> CharTokenizer {
    CharTokenizer::new(char_vocab()).unwrap()
}

/// Write `lines` to a temp file, one per line.
pub fn write_jsonl(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

/// Word-level tokenizer.json: `[PAD]`=0, `[UNK]`=1, `[CLS]`=2, `[SEP]`=3,
/// `hello`=4, `world`=5, split on whitespace.
pub fn write_word_level(dir: &TempDir) -> PathBuf {
    let tokenizer_json = serde_json::json!({
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [
            {"id": 0, "content": "[PAD]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
            {"id": 1, "content": "[UNK]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
            {"id": 2, "content": "[CLS]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
            {"id": 3, "content": "[SEP]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true}
        ],
        "normalizer": null,
        "pre_tokenizer": { "type": "Whitespace" },
        "post_processor": null,
        "decoder": null,
        "model": {
            "type": "WordLevel",
            "vocab": {
                "[PAD]": 0, "[UNK]": 1, "[CLS]": 2, "[SEP]": 3,
                "hello": 4, "world": 5
            },
            "unk_token": "[UNK]"
        }
    });

    let path = dir.path().join("tokenizer.json");
    std::fs::write(&path, serde_json::to_string_pretty(&tokenizer_json).unwrap()).unwrap();
    path
}

pub fn word_level_tokenizer(dir: &TempDir) -> HfTokenizer {
    TokenizerStore::new(write_word_level(dir)).load().unwrap()
}
