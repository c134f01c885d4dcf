// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from the raw JSONL corpus to tensor batches.
//
//   corpus.jsonl
//       │
//       ▼
//   DataGenerator     → parses each line, encodes title + content
//       │
//       ▼
//   SummaryDataset    → implements Burn's Dataset trait
//       │
//       ▼
//   SummaryBatcher    → stacks samples into tensor batches
//       │
//       ▼
//   DataLoader        → feeds batches to the training loop
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;

/// Implements Burn's Dataset trait for encoded records
pub mod dataset;

/// Character-level encoding and shared pad/truncate
pub mod encoding;

/// Reads the JSONL corpus into a SummaryDataset
pub mod generator;
