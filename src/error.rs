// WHY: Typed failures for the dictionary converters; the CLI wraps these in anyhow

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictError {
    /// Input too short to hold the 4-byte magic header.
    #[error("malformed header: expected at least 4 bytes, found {len}")]
    MalformedHeader { len: usize },

    /// Input could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output could not be created, written or flushed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DictError {
    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        DictError::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: io::Error) -> Self {
        DictError::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DictError>;
