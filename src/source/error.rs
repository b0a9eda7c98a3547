//! Error types for record sources.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised when constructing or reading a record source.
///
/// All failures are deterministic and local; there is nothing to retry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    /// The backing file was missing or unreadable at construction time.
    ///
    /// Construction fails entirely; no partial load is kept.
    #[error("failed to load backing file {path}: {source}")]
    Load {
        /// Path of the backing file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The record separator token was empty.
    #[error("record separator must not be empty")]
    EmptySeparator,

    /// A read was requested but the backing collection holds no records.
    #[error("record source is empty")]
    Empty,

    /// The requested index is at or beyond the configured replay size.
    ///
    /// Reads past the backing collection length wrap around instead; this
    /// error only fires past the replay size itself. The source never
    /// silently clamps.
    #[error("record index {index} out of range for replay size {size}")]
    OutOfRange {
        /// Index that was requested.
        index: usize,
        /// Replay size in effect at the time of the read.
        size: usize,
    },
}
