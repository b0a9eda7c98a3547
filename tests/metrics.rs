#![cfg(feature = "metrics")]
//! Tests for `replayset` metrics helpers.
//!
//! These tests verify that counters update as expected using
//! `metrics_util::debugging::DebuggingRecorder`.
use metrics_util::debugging::{DebugValue, DebuggingRecorder, Snapshotter};

/// Creates a debugging recorder and snapshotter for metrics testing.
fn debugging_recorder_setup() -> (Snapshotter, DebuggingRecorder) {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    (snapshotter, recorder)
}

#[test]
fn fed_record_metric_increments() {
    let (snapshotter, recorder) = debugging_recorder_setup();
    metrics::with_local_recorder(&recorder, || {
        replayset::metrics::inc_records_fed();
    });

    let metrics = snapshotter.snapshot().into_vec();
    let found = metrics.iter().any(|(k, _, _, v)| {
        k.key().name() == replayset::metrics::RECORDS_FED
            && matches!(v, DebugValue::Counter(c) if *c > 0)
    });
    assert!(found, "fed records metric not recorded");
}

#[test]
fn failed_verification_metric_is_labelled() {
    let (snapshotter, recorder) = debugging_recorder_setup();
    metrics::with_local_recorder(&recorder, || {
        replayset::metrics::inc_verifications(replayset::metrics::Outcome::Failed);
    });

    let metrics = snapshotter.snapshot().into_vec();
    let found = metrics.iter().any(|(k, _, _, v)| {
        k.key().name() == replayset::metrics::VERIFICATIONS
            && k.key()
                .labels()
                .any(|l| l.key() == "outcome" && l.value() == "failed")
            && matches!(v, DebugValue::Counter(c) if *c > 0)
    });
    assert!(found, "failed verification metric not recorded");
}

#[test]
fn passed_verification_metric_is_labelled() {
    let (snapshotter, recorder) = debugging_recorder_setup();
    metrics::with_local_recorder(&recorder, || {
        replayset::metrics::inc_verifications(replayset::metrics::Outcome::Passed);
    });

    let metrics = snapshotter.snapshot().into_vec();
    let found = metrics.iter().any(|(k, _, _, v)| {
        k.key().name() == replayset::metrics::VERIFICATIONS
            && k.key()
                .labels()
                .any(|l| l.key() == "outcome" && l.value() == "passed")
            && matches!(v, DebugValue::Counter(c) if *c > 0)
    });
    assert!(found, "passed verification metric not recorded");
}
