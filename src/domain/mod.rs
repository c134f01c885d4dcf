// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing what the
// loader works with: records, vocabularies, errors.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain data and the traits other layers implement
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

/// Error taxonomy shared by every layer below the CLI
pub mod error;

/// One title/content pair parsed from a JSONL line
pub mod record;

/// Core abstractions (traits) that other layers implement
pub mod traits;

/// Token table, special token ids and the derived config fields
pub mod vocabulary;
