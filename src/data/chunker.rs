// ============================================================
// Layer 4 — Record Chunker
// ============================================================
// Splits the normalised question list into contiguous chunks
// of a fixed size. Every chunk holds exactly `chunk_size`
// questions except the last, which holds the remainder.
//
// Example with chunk_size=4:
//   Questions: q0 q1 q2 q3 q4 q5 q6 q7 q8 q9
//   Chunk 0:   q0 q1 q2 q3
//   Chunk 1:   q4 q5 q6 q7
//   Chunk 2:   q8 q9
//
// Chunk files are named by their zero-padded index:
//   chunks/part-000.json, chunks/part-001.json, ...

/// Directory, relative to the output root, holding chunk files
pub const CHUNKS_DIR: &str = "chunks";

pub struct Chunker {
    /// Questions per chunk, never less than 1
    chunk_size: usize,
}

impl Chunker {
    /// Create a new Chunker. A size of 0 is clamped to 1.
    pub fn new(chunk_size: usize) -> Self {
        Self { chunk_size: chunk_size.max(1) }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Borrow `items` as consecutive chunks, in order
    pub fn chunk<'a, T>(&self, items: &'a [T]) -> impl Iterator<Item = &'a [T]> + 'a {
        items.chunks(self.chunk_size)
    }

    /// Returns how many chunks `count` items would produce
    pub fn num_chunks(&self, count: usize) -> usize {
        count.div_ceil(self.chunk_size)
    }
}

/// File name of chunk `index`, e.g. `part-007.json`
pub fn chunk_file_name(index: usize) -> String {
    format!("part-{index:03}.json")
}

/// Manifest path of chunk `index`, e.g. `chunks/part-007.json`
pub fn chunk_rel_path(index: usize) -> String {
    format!("{CHUNKS_DIR}/{}", chunk_file_name(index))
}
