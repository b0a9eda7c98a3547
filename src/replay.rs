//! Replay driver streaming records from a source to a consumer.
//!
//! [`feed`] pushes every record of a source, tagged with its index, into a
//! [`RecordSink`] in increasing index order, honouring the pacing and
//! progress-reporting knobs of a [`ReplayConfig`]. [`stream`] exposes the
//! same sequence as a [`futures::Stream`] for pull-based pipelines.

use async_trait::async_trait;
use futures::Stream;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::{
    config::ReplayConfig,
    record::IndexedRecord,
    source::{RecordSource, SourceError},
};

/// Boxed error type returned by sinks.
pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// Consumer seam for replayed records.
///
/// The replay driver calls [`deliver`](Self::deliver) once per logical
/// message, in increasing index order.
#[async_trait]
pub trait RecordSink {
    /// Deliver one record to the consumer.
    ///
    /// # Errors
    ///
    /// Returns an error if the consumer cannot accept the record; the replay
    /// stops at the first rejection.
    async fn deliver(&mut self, record: IndexedRecord) -> Result<(), SinkError>;
}

/// Bounded channels double as sinks so a replay can run against a consumer
/// task without adapter glue.
#[async_trait]
impl RecordSink for mpsc::Sender<IndexedRecord> {
    async fn deliver(&mut self, record: IndexedRecord) -> Result<(), SinkError> {
        self.send(record).await.map_err(|error| Box::new(error) as SinkError)
    }
}

/// Errors produced while feeding a replay into a sink.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReplayError {
    /// Reading a record from the source failed.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// The sink rejected a record.
    #[error("sink rejected record {index}: {source}")]
    Sink {
        /// Index of the rejected record.
        index: usize,
        /// Error reported by the sink.
        #[source]
        source: SinkError,
    },
}

/// Stream every record of `source` into `sink` in index order.
///
/// Returns the number of records delivered, which equals `source.size()` on
/// success. Progress is logged every `config.report_interval` records, and
/// `config.pacing` inserts a delay between consecutive deliveries.
///
/// # Errors
///
/// Returns [`ReplayError::Source`] if a record read fails and
/// [`ReplayError::Sink`] if the sink rejects a delivery. The replay stops at
/// the first error; records already delivered stay delivered.
pub async fn feed<S, K>(
    source: &S,
    sink: &mut K,
    config: &ReplayConfig,
) -> Result<usize, ReplayError>
where
    S: RecordSource + ?Sized,
    K: RecordSink + ?Sized,
{
    let total = source.size();
    for index in 0..total {
        let payload = source.record(index)?;
        sink.deliver(IndexedRecord { index, payload })
            .await
            .map_err(|source| ReplayError::Sink { index, source })?;
        #[cfg(feature = "metrics")]
        crate::metrics::inc_records_fed();
        if let Some(every) = config.report_interval {
            if (index + 1) % every == 0 {
                info!(sent = index + 1, total, "replay progress");
            }
        }
        if let Some(delay) = config.pacing {
            if index + 1 < total {
                tokio::time::sleep(delay).await;
            }
        }
    }
    debug!(total, "replay complete");
    Ok(total)
}

/// Expose the replay sequence of `source` as a stream of indexed records.
///
/// Each item is read lazily when polled, so an error surfaces at the failing
/// index rather than up front.
pub fn stream<S>(source: &S) -> impl Stream<Item = Result<IndexedRecord, SourceError>> + '_
where
    S: RecordSource + ?Sized,
{
    futures::stream::iter((0..source.size()).map(move |index| {
        source
            .record(index)
            .map(|payload| IndexedRecord { index, payload })
    }))
}
