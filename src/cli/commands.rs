// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// The three options a run takes. clap's derive macros give us
// --help, error messages for missing args and type conversion.

use std::path::PathBuf;

use clap::Args;

use crate::application::prepare_use_case::PrepareConfig;

/// Arguments for one prepare run.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Question dump to convert (keyed object, array or NDJSON)
    #[arg(long)]
    pub input: PathBuf,

    /// Directory receiving manifest.json, lookup.json and chunks/
    #[arg(long, default_value = "./data")]
    pub out: PathBuf,

    /// Questions per chunk file; values below 1 are treated as 1
    #[arg(long, default_value_t = 1000, allow_negative_numbers = true)]
    pub chunk: i64,
}

/// Convert CLI args into the application-layer PrepareConfig.
/// The application layer never sees clap types.
impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig {
            input:      a.input,
            out_dir:    a.out,
            chunk_size: usize::try_from(a.chunk.max(1)).unwrap_or(usize::MAX),
        }
    }
}
