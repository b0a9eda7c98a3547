//! Bounded, replayable record sources.
//!
//! A record source owns an ordered collection of byte records, loaded once at
//! construction and immutable afterwards. Indexed reads are pure and
//! deterministic, so a replay can be repeated any number of times with
//! identical results. Requesting more records than the backing collection
//! holds wraps around onto it via modulo indexing.

pub mod error;
pub mod list;
pub mod repeat;

pub use error::SourceError;
pub use list::ListSource;
pub use repeat::RepeatSource;

use bytes::Bytes;

/// Seam between record storage and the replay and verification layers.
///
/// Implementations are read-only after construction; `size` and `record` are
/// safe to call concurrently from multiple readers. Configuring a replay size
/// is an operation on the concrete type and must complete before replay
/// begins.
pub trait RecordSource: Send + Sync {
    /// Number of records a replay of this source produces.
    ///
    /// Returns the explicitly configured replay size when one was set,
    /// otherwise the backing collection length.
    fn size(&self) -> usize;

    /// Record at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::OutOfRange`] when `index >= size()` and
    /// [`SourceError::Empty`] when the backing collection holds no records.
    fn record(&self, index: usize) -> Result<Bytes, SourceError>;
}

/// Reject indices at or beyond the configured replay size.
pub(crate) fn ensure_in_range(index: usize, size: usize) -> Result<(), SourceError> {
    if index < size {
        Ok(())
    } else {
        Err(SourceError::OutOfRange { index, size })
    }
}

#[cfg(test)]
mod tests;
