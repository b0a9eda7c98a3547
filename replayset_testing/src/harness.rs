//! Harness driving a record source through an in-memory pipeline.
//!
//! [`drive`] builds the minimal pipeline: a bounded channel, a feed future
//! pushing indexed records through it, and a receive loop feeding a
//! [`SequenceVerifier`]. The source is passed in explicitly; there is no
//! registry or shared fixture state.

use replayset::{
    IndexedRecord,
    RecordSource,
    ReplayConfig,
    ReplayError,
    SequenceVerifier,
    VerifyError,
};
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors surfaced by [`drive`].
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The replay driver failed before delivering every record.
    #[error("replay failed: {0}")]
    Replay(#[from] ReplayError),
    /// The received sequence deviated from the source.
    #[error("verification failed: {0}")]
    Verify(#[from] VerifyError),
    /// The feed future panicked.
    #[error("feed panicked")]
    FeedPanicked,
}

/// Replay `source` through a bounded channel and verify the received
/// sequence, using the default configuration.
///
/// # Errors
///
/// See [`drive_with_config`].
pub async fn drive<S: RecordSource>(source: &S) -> Result<usize, HarnessError> {
    drive_with_config(source, &ReplayConfig::default()).await
}

/// Replay `source` through a bounded channel sized by `config` and verify the
/// received sequence, returning the verified record count.
///
/// # Errors
///
/// Returns the verification failure when the consumer side bailed out first;
/// the feed side then only reports the closed channel. Source read failures
/// and feed panics are reported as such.
pub async fn drive_with_config<S: RecordSource>(
    source: &S,
    config: &ReplayConfig,
) -> Result<usize, HarnessError> {
    use futures::FutureExt as _;

    let (tx, mut rx) = mpsc::channel::<IndexedRecord>(config.channel_capacity);

    let feed_task = async move {
        let mut sink = tx;
        replayset::feed(source, &mut sink, config).await
    };
    let feed_task = async {
        match std::panic::AssertUnwindSafe(feed_task).catch_unwind().await {
            Ok(result) => result.map_err(HarnessError::Replay),
            Err(_panic) => Err(HarnessError::FeedPanicked),
        }
    };

    let verify_task = async {
        let mut verifier = SequenceVerifier::new(source);
        while let Some(record) = rx.recv().await {
            verifier.observe(&record)?;
        }
        verifier.finish().map_err(HarnessError::from)
    };

    let (fed, verified) = tokio::join!(feed_task, verify_task);
    match (fed, verified) {
        (Ok(_), verified) => verified,
        // A sink rejection means the consumer side closed the channel first;
        // its error names the actual deviation.
        (Err(HarnessError::Replay(ReplayError::Sink { .. })), Err(verify_error)) => {
            Err(verify_error)
        }
        (Err(feed_error), _) => Err(feed_error),
    }
}
