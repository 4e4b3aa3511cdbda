// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer only talks to the input through
// RecordSource, so a different input (stdin, an HTTP dump)
// can be dropped in without touching the pipeline.

use crate::domain::record::LoadedInput;
use crate::error::PrepareError;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can produce the ordered raw input records.
///
/// Implementations:
///   - JsonLoader → reads one JSON / NDJSON file from disk
pub trait RecordSource {
    /// Load every raw record, in input order, with the shape
    /// the input was read as.
    fn load_all(&self) -> Result<LoadedInput, PrepareError>;
}
