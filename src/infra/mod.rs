// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches files outside the corpus itself:
//
//   config_store.rs:    LoaderConfig to and from JSON
//
//   tokenizer_store.rs: loads a HuggingFace tokenizer.json and
//                       adapts it to the TextTokenizer trait
//
//   vocab_store.rs:     loads a plain vocab.txt and provides a
//                       character-level TextTokenizer over it
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Loader configuration persistence
pub mod config_store;

/// HuggingFace tokenizer loading
pub mod tokenizer_store;

/// vocab.txt loading and character tokenizer
pub mod vocab_store;
