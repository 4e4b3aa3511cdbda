// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// File output for a run:
//
//   output_store.rs — Writes chunks/part-NNN.json, manifest.json
//                     and lookup.json under the output directory.
//
// The data layer never touches the filesystem for writing;
// everything that lands on disk goes through here.

/// Chunk, manifest and lookup file writer
pub mod output_store;
