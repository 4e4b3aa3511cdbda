// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain data types shared by every other layer:
//
//   record.rs   — RawRecord, one untyped input entry, and the
//                 InputShape / LoadedInput the loader returns
//   question.rs — NormalizedQuestion, the fixed output schema
//   manifest.rs — Manifest and ChunkEntry, the chunk index
//   lookup.rs   — Facet and LookupTable, distinct facet values
//   traits.rs   — RecordSource, implemented by the loader
//
// Rules for this layer:
//   - NO file I/O
//   - NO CLI types
//   - Only plain Rust structs, enums, and traits

pub mod record;

pub mod question;

pub mod manifest;

pub mod lookup;

pub mod traits;
