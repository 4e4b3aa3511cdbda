// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Runs the full batch transform in order:
//
//   Step 1: Load and detect the input shape   (Layer 4 - data)
//   Step 2: Drop records without an id        (Layer 4 - data)
//   Step 3: Normalise every record            (Layer 4 - data)
//   Step 4: Create the output directories     (Layer 6 - infra)
//   Step 5: Write chunk files                 (Layer 6 - infra)
//   Step 6: Write manifest.json               (Layer 6 - infra)
//   Step 7: Build and write lookup.json       (Layer 4 + 6)
//
// Input is fully parsed before anything is written, so an
// unparseable file leaves the output directory untouched.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::data::{
    chunker::Chunker,
    facets::build_lookup,
    loader::JsonLoader,
    normalizer::{has_identifier, Normalizer},
};
use crate::domain::question::NormalizedQuestion;
use crate::domain::record::{InputShape, LoadedInput};
use crate::domain::traits::RecordSource;
use crate::infra::output_store::OutputStore;

// ─── Run Configuration ───────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct PrepareConfig {
    pub input:      PathBuf,
    pub out_dir:    PathBuf,
    pub chunk_size: usize,
}

/// What a finished run produced
#[derive(Debug, Clone, PartialEq)]
pub struct PrepareReport {
    /// Shape the input was read as
    pub shape:   InputShape,
    /// Records read before filtering
    pub loaded:  usize,
    /// Records dropped for lacking an identifier
    pub dropped: usize,
    /// Questions written
    pub count:   usize,
    /// Chunk files written
    pub chunks:  usize,
    pub out_dir: PathBuf,
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Load the configured input file and write the output tree
    pub fn execute(&self) -> Result<PrepareReport> {
        let cfg = &self.config;

        tracing::info!("Reading questions from '{}'", cfg.input.display());
        self.execute_from(&JsonLoader::new(&cfg.input))
    }

    /// Same pipeline, with records from any RecordSource
    pub fn execute_from<S: RecordSource>(&self, source: &S) -> Result<PrepareReport> {
        let cfg = &self.config;

        // ── Step 1: Load and detect shape ─────────────────────────────────────
        let LoadedInput { shape, records } = source.load_all()?;
        let loaded = records.len();

        // ── Step 2 + 3: Filter and normalise ──────────────────────────────────
        let normalizer = Normalizer::new();
        let questions: Vec<NormalizedQuestion> = records
            .iter()
            .filter(|r| has_identifier(r))
            .map(|r| normalizer.normalize(r))
            .collect();

        let dropped = loaded - questions.len();
        if dropped > 0 {
            tracing::warn!("Dropped {} records with no uId, id or questionId", dropped);
        }
        tracing::info!("Normalised {} questions", questions.len());

        // ── Step 4: Output directories ────────────────────────────────────────
        let store = OutputStore::new(&cfg.out_dir).with_context(|| {
            format!("Cannot prepare output directory '{}'", cfg.out_dir.display())
        })?;

        // ── Step 5 + 6: Chunks, then the manifest that lists them ─────────────
        let chunker  = Chunker::new(cfg.chunk_size);
        let manifest = store.write_chunks(&questions, &chunker)?;
        debug_assert_eq!(manifest.chunked_total(), manifest.count);
        let manifest_path = store.write_manifest(&manifest)?;
        tracing::debug!("Manifest written to '{}'", manifest_path.display());
        tracing::info!(
            "Wrote {} chunks of up to {} questions",
            manifest.chunks.len(),
            chunker.chunk_size()
        );

        // ── Step 7: Facet lookup ──────────────────────────────────────────────
        let lookup      = build_lookup(&questions);
        let lookup_path = store.write_lookup(&lookup)?;
        tracing::debug!("Lookup written to '{}'", lookup_path.display());

        Ok(PrepareReport {
            shape,
            loaded,
            dropped,
            count:   manifest.count,
            chunks:  manifest.chunks.len(),
            out_dir: cfg.out_dir.clone(),
        })
    }
}
