//! Sequence verification for replayed records.
//!
//! [`SequenceVerifier`] confirms a consumer observed exactly the records a
//! source produces: the right count, in index order, with payloads intact.
//! Verification is a collaborator of the source, not part of it; the source
//! itself only exposes indexed reads.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::warn;

use crate::{
    record::IndexedRecord,
    replay::{RecordSink, SinkError},
    source::{RecordSource, SourceError},
};

/// Errors raised when an observed sequence deviates from the source.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VerifyError {
    /// A record arrived out of order.
    #[error("expected record index {expected}, got {actual}")]
    IndexMismatch {
        /// Index the verifier expected next.
        expected: usize,
        /// Index carried by the record that arrived.
        actual: usize,
    },

    /// A record's payload differed from the source's record at that index.
    #[error("payload mismatch at index {index}")]
    PayloadMismatch {
        /// Index at which the payloads diverged.
        index: usize,
        /// Payload the source produces at this index.
        expected: Bytes,
        /// Payload the consumer observed.
        actual: Bytes,
    },

    /// More records arrived than the source's replay size allows.
    #[error("received record {index} beyond replay size {size}")]
    ExcessRecord {
        /// Index carried by the surplus record.
        index: usize,
        /// Replay size of the source under verification.
        size: usize,
    },

    /// Fewer records arrived than the source's replay size requires.
    #[error("replay incomplete: received {received} of {expected} records")]
    Incomplete {
        /// Records observed before the sequence ended.
        received: usize,
        /// Records the source's replay size requires.
        expected: usize,
    },

    /// Looking up the expected record failed.
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Checks that records arrive in index order with the payloads the source
/// produces.
///
/// Feed every received record to [`observe`](Self::observe), then call
/// [`finish`](Self::finish) once the sequence ends to confirm nothing is
/// missing.
pub struct SequenceVerifier<'a> {
    source: &'a dyn RecordSource,
    next_index: usize,
}

impl<'a> SequenceVerifier<'a> {
    /// Create a verifier expecting the replay sequence of `source`.
    #[must_use]
    pub fn new(source: &'a dyn RecordSource) -> Self {
        Self {
            source,
            next_index: 0,
        }
    }

    /// Number of records observed so far.
    #[must_use]
    pub fn received(&self) -> usize { self.next_index }

    /// Check one received record against the expected sequence.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::ExcessRecord`] past the replay size,
    /// [`VerifyError::IndexMismatch`] on out-of-order arrival, and
    /// [`VerifyError::PayloadMismatch`] when content diverges.
    pub fn observe(&mut self, record: &IndexedRecord) -> Result<(), VerifyError> {
        let size = self.source.size();
        if self.next_index >= size {
            warn!(index = record.index, size, "record beyond replay size");
            record_failure();
            return Err(VerifyError::ExcessRecord {
                index: record.index,
                size,
            });
        }
        if record.index != self.next_index {
            warn!(
                expected = self.next_index,
                actual = record.index,
                "record arrived out of order"
            );
            record_failure();
            return Err(VerifyError::IndexMismatch {
                expected: self.next_index,
                actual: record.index,
            });
        }
        let expected = self.source.record(record.index)?;
        if expected != record.payload {
            warn!(index = record.index, "payload mismatch");
            record_failure();
            return Err(VerifyError::PayloadMismatch {
                index: record.index,
                expected,
                actual: record.payload.clone(),
            });
        }
        self.next_index += 1;
        Ok(())
    }

    /// Confirm the full replay sequence was observed.
    ///
    /// Returns the verified record count.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Incomplete`] if fewer than `source.size()`
    /// records were observed.
    pub fn finish(self) -> Result<usize, VerifyError> {
        let expected = self.source.size();
        if self.next_index != expected {
            record_failure();
            return Err(VerifyError::Incomplete {
                received: self.next_index,
                expected,
            });
        }
        #[cfg(feature = "metrics")]
        crate::metrics::inc_verifications(crate::metrics::Outcome::Passed);
        Ok(self.next_index)
    }
}

fn record_failure() {
    #[cfg(feature = "metrics")]
    crate::metrics::inc_verifications(crate::metrics::Outcome::Failed);
}

/// Sink buffering every delivered record for after-the-fact verification.
#[derive(Debug, Default)]
pub struct CollectingSink {
    records: Vec<IndexedRecord>,
}

impl CollectingSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Records delivered so far, in arrival order.
    #[must_use]
    pub fn records(&self) -> &[IndexedRecord] { &self.records }

    /// Verify the buffered records against the replay sequence of `source`.
    ///
    /// Returns the verified record count.
    ///
    /// # Errors
    ///
    /// Propagates the first [`VerifyError`] the sequence check raises.
    pub fn verify_against(&self, source: &dyn RecordSource) -> Result<usize, VerifyError> {
        let mut verifier = SequenceVerifier::new(source);
        for record in &self.records {
            verifier.observe(record)?;
        }
        verifier.finish()
    }
}

#[async_trait]
impl RecordSink for CollectingSink {
    async fn deliver(&mut self, record: IndexedRecord) -> Result<(), SinkError> {
        self.records.push(record);
        Ok(())
    }
}
