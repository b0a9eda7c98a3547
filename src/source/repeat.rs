//! Record source repeating a single payload.

use bytes::Bytes;

use super::{RecordSource, SourceError, ensure_in_range};

/// Record source yielding the same payload for every index.
///
/// Useful when a replay only needs volume, not varied content. The default
/// replay size is one; [`set_size`](Self::set_size) scales it up.
#[derive(Clone, Debug)]
pub struct RepeatSource {
    payload: Bytes,
    size: usize,
}

impl RepeatSource {
    /// Create a source repeating `payload` once.
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self {
            payload: payload.into(),
            size: 1,
        }
    }

    /// Set the number of records a replay of this source produces.
    pub fn set_size(&mut self, size: usize) { self.size = size; }
}

impl RecordSource for RepeatSource {
    fn size(&self) -> usize { self.size }

    fn record(&self, index: usize) -> Result<Bytes, SourceError> {
        ensure_in_range(index, self.size)?;
        Ok(self.payload.clone())
    }
}
