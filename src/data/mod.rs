// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the raw input file and the records that
// get written out:
//
//   questions.json
//       │
//       ▼
//   JsonLoader     → detects the input shape, yields RawRecords
//       │
//       ▼
//   Normalizer     → maps each RawRecord onto NormalizedQuestion
//       │
//       ├──────────────┐
//       ▼              ▼
//   Chunker        build_lookup → distinct values per facet
//       │
//       ▼
//   fixed-size chunks, handed to infra::OutputStore
//
// Each module is responsible for exactly one step.

/// Reads the input file and detects its shape
pub mod loader;

/// Maps raw records onto the fixed question schema
pub mod normalizer;

/// Collects distinct facet values for lookup.json
pub mod facets;

/// Splits questions into fixed-size chunks
pub mod chunker;
