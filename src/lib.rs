#![doc(html_root_url = "https://docs.rs/replayset/latest")]
//! Public API for the `replayset` library.
//!
//! This crate provides deterministic, replayable bounded record sources for
//! exercising message consumers in tests, together with a replay driver that
//! streams indexed records to a consumer and a verifier that confirms the
//! consumer observed exactly the expected sequence.

pub mod config;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod record;
pub mod replay;
pub mod source;
pub mod verify;

pub use config::ReplayConfig;
pub use record::IndexedRecord;
pub use replay::{RecordSink, ReplayError, SinkError, feed, stream};
pub use source::{ListSource, RecordSource, RepeatSource, SourceError};
pub use verify::{CollectingSink, SequenceVerifier, VerifyError};
