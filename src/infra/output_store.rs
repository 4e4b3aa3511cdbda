// ============================================================
// Layer 6 — Output Store
// ============================================================
// Writes the static data tree a client app pages through.
//
// File layout under the output directory:
//   data/
//     manifest.json          ← version, total count, chunk list
//     lookup.json            ← distinct values per facet
//     chunks/
//       part-000.json        ← compact JSON array of questions
//       part-001.json
//       ...
//
// Chunk files are compact to keep downloads small; manifest
// and lookup are pretty-printed with two-space indentation.
//
// Existing files are overwritten without warning. Files are
// written one after another, so a crash part-way through can
// leave chunk files with a stale or missing manifest.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::data::chunker::{chunk_file_name, chunk_rel_path, Chunker, CHUNKS_DIR};
use crate::domain::lookup::LookupTable;
use crate::domain::manifest::Manifest;
use crate::domain::question::NormalizedQuestion;
use crate::error::PrepareError;

pub const MANIFEST_FILE: &str = "manifest.json";
pub const LOOKUP_FILE: &str = "lookup.json";

/// Owns the output directory for one run.
pub struct OutputStore {
    dir: PathBuf,
}

impl OutputStore {
    /// Create the store, making `dir` and `dir/chunks` if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, PrepareError> {
        let dir = dir.into();
        let chunks_dir = dir.join(CHUNKS_DIR);

        fs::create_dir_all(&chunks_dir).map_err(|source| PrepareError::Write {
            path: chunks_dir.clone(),
            source,
        })?;

        tracing::debug!("Output directory ready: '{}'", dir.display());
        Ok(Self { dir })
    }

    /// Write every chunk file in order and return the manifest
    /// describing them. The manifest itself is not written here.
    pub fn write_chunks(
        &self,
        questions: &[NormalizedQuestion],
        chunker:   &Chunker,
    ) -> Result<Manifest, PrepareError> {
        let mut manifest = Manifest::new(questions.len());
        let chunks_dir   = self.dir.join(CHUNKS_DIR);

        let expected = chunker.num_chunks(questions.len());
        manifest.chunks.reserve(expected);
        tracing::debug!(
            "Writing {} questions as {} chunk files into '{}'",
            questions.len(),
            expected,
            chunks_dir.display()
        );

        for (index, chunk) in chunker.chunk(questions).enumerate() {
            let path = chunks_dir.join(chunk_file_name(index));
            write_json(&path, chunk, false)?;

            tracing::debug!("Wrote {} questions to '{}'", chunk.len(), path.display());
            manifest.push_chunk(chunk_rel_path(index), chunk.len());
        }

        Ok(manifest)
    }

    pub fn write_manifest(&self, manifest: &Manifest) -> Result<PathBuf, PrepareError> {
        let path = self.dir.join(MANIFEST_FILE);
        write_json(&path, manifest, true)?;
        tracing::debug!("Wrote manifest with {} chunks", manifest.chunks.len());
        Ok(path)
    }

    pub fn write_lookup(&self, lookup: &LookupTable) -> Result<PathBuf, PrepareError> {
        let path = self.dir.join(LOOKUP_FILE);
        write_json(&path, lookup, true)?;
        Ok(path)
    }
}

/// Serialise `value` to `path` through a buffered writer.
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, pretty: bool) -> Result<(), PrepareError> {
    let write_err = |source| PrepareError::Write { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);

    let serialised = if pretty {
        serde_json::to_writer_pretty(&mut writer, value)
    } else {
        serde_json::to_writer(&mut writer, value)
    };
    serialised.map_err(|source| PrepareError::Serialize { path: path.to_path_buf(), source })?;

    writer.flush().map_err(write_err)
}
