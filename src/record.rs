//! Indexed records exchanged between the replay driver and consumers.

use bytes::Bytes;

/// One logical message produced by a replay: a record payload tagged with its
/// zero-based position in the replay sequence.
///
/// The index tag lets a consumer (or a verifier downstream of it) confirm
/// ordering without trusting arrival order alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedRecord {
    /// Position of this record in the replay sequence.
    pub index: usize,
    /// Record payload bytes.
    pub payload: Bytes,
}

impl IndexedRecord {
    /// Create a record from an index and any payload convertible to [`Bytes`].
    #[must_use]
    pub fn new(index: usize, payload: impl Into<Bytes>) -> Self {
        Self {
            index,
            payload: payload.into(),
        }
    }
}
