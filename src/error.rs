use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::data::loader::ParseFailure;

/// Errors raised while loading input or writing the output tree.
#[derive(Debug, Error)]
pub enum PrepareError {
    #[error("cannot read input '{}'", path.display())]
    Read { path: PathBuf, source: io::Error },
    /// Every input shape was tried and none parsed.
    #[error("could not parse input JSON: {0}")]
    UnparseableInput(ParseFailure),
    #[error("cannot write '{}'", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("cannot serialise '{}'", path.display())]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}
