// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the data and infra layers to hand a training loop
// a ready batch source.
//
// Rules for this layer:
//   - No tokenisation or padding logic here (that's Layer 4)
//   - No printing (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Config, tokenizer selection and the DataLoader entry point
pub mod load_use_case;
