// ============================================================
// Layer 3 — Manifest Domain Type
// ============================================================
// The index a client fetches first. It lists every chunk file
// in order with its record count, so chunks can be loaded on
// demand without a backend.
//
// Example manifest.json:
//   {
//     "version": 1,
//     "count": 2500,
//     "chunks": [
//       { "path": "chunks/part-000.json", "count": 1000 },
//       { "path": "chunks/part-001.json", "count": 1000 },
//       { "path": "chunks/part-002.json", "count": 500 }
//     ]
//   }

use serde::Serialize;

/// Format version written into every manifest
pub const MANIFEST_VERSION: u32 = 1;

/// One chunk file as listed in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkEntry {
    /// Path relative to the output directory, forward slashes
    pub path: String,

    /// Number of questions stored in this chunk
    pub count: usize,
}

/// Index of all chunk files for one run.
/// Built fresh every run and written once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub version: u32,

    /// Total number of questions across all chunks
    pub count: usize,

    pub chunks: Vec<ChunkEntry>,
}

impl Manifest {
    /// Create an empty manifest for a run of `count` questions
    pub fn new(count: usize) -> Self {
        Self {
            version: MANIFEST_VERSION,
            count,
            chunks:  Vec::new(),
        }
    }

    /// Append the next chunk in order
    pub fn push_chunk(&mut self, path: impl Into<String>, count: usize) {
        self.chunks.push(ChunkEntry { path: path.into(), count });
    }

    /// Sum of per-chunk counts; equals `count` for a complete run
    pub fn chunked_total(&self) -> usize {
        self.chunks.iter().map(|c| c.count).sum()
    }
}
