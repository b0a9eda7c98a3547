//! Metric helpers for `replayset`.
//!
//! This module defines metric names and simple helper functions wrapping the
//! [`metrics`](https://docs.rs/metrics) crate.

use metrics::counter;

/// Name of the counter tracking records fed to sinks.
pub const RECORDS_FED: &str = "replayset_records_fed_total";
/// Name of the counter tracking verification outcomes.
pub const VERIFICATIONS: &str = "replayset_verifications_total";

/// Outcome of a sequence verification.
#[derive(Clone, Copy)]
pub enum Outcome {
    /// The consumer observed exactly the expected sequence.
    Passed,
    /// The sequence deviated in order, content, or count.
    Failed,
}

impl Outcome {
    fn as_str(self) -> &'static str {
        match self {
            Outcome::Passed => "passed",
            Outcome::Failed => "failed",
        }
    }
}

/// Record one record delivered to a sink.
pub fn inc_records_fed() { counter!(RECORDS_FED).increment(1); }

/// Record a verification outcome.
pub fn inc_verifications(outcome: Outcome) {
    counter!(VERIFICATIONS, "outcome" => outcome.as_str()).increment(1);
}
