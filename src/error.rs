//! Fatal error type for the reimport run
//!
//! Every variant aborts the run immediately; non-fatal conditions (misses,
//! disqualifications, already-matching frames) go through the report
//! instead and never reach this type.

use std::path::PathBuf;
use thiserror::Error;

use crate::descriptor::ShapeError;
use crate::document::ParseError;

#[derive(Debug, Error)]
pub enum SyncError {
    /// Descriptor document is malformed.
    #[error("{}: {source}", path.display())]
    Parse { path: PathBuf, source: ParseError },

    /// Descriptor parsed but a required field is missing or mis-typed.
    #[error("{}: {source}", path.display())]
    Shape { path: PathBuf, source: ShapeError },

    /// A file or directory could not be read or written.
    #[error("{}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },

    /// Two source files share a base name; the index would be ambiguous.
    #[error("duplicate source image name: '{}' and '{}'", first.display(), second.display())]
    DuplicateSource { first: PathBuf, second: PathBuf },

    /// More than one first-frame naming variant matched for a sprite.
    #[error("multiple source image options for sprite '{sprite}': '{}' and '{}'", first.display(), second.display())]
    AmbiguousNaming { sprite: String, first: PathBuf, second: PathBuf },

    /// The destination root may only contain sprite directories.
    #[error("unexpected non-directory entry '{}' in destination", path.display())]
    NotADirectory { path: PathBuf },
}

impl SyncError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SyncError::Io { path: path.into(), source }
    }
}
