//! Replay configuration types.
//!
//! This module defines the knobs a replay honours: pacing between records,
//! periodic progress reporting, and the buffering of the in-memory pipeline
//! used by test harnesses.

use std::time::Duration;

/// Default capacity of the channel connecting a replay to a consumer task.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Controls pacing, progress reporting, and pipeline buffering for a replay.
///
/// Methods consume and return `self` so a configuration can be built up in a
/// single chained expression:
///
/// ```
/// use std::time::Duration;
///
/// use replayset::ReplayConfig;
///
/// let config = ReplayConfig::new()
///     .pacing(Duration::from_millis(3))
///     .report_interval(100);
/// assert_eq!(config.report_interval, Some(100));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ReplayConfig {
    /// Delay inserted between consecutive records, if any.
    pub pacing: Option<Duration>,
    /// Emit a progress log line every this many records.
    pub report_interval: Option<usize>,
    /// Capacity of the channel connecting the driver to a consumer task.
    pub channel_capacity: usize,
}

impl ReplayConfig {
    /// Create a configuration with no pacing, no periodic reporting, and the
    /// default channel capacity.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pacing: None,
            report_interval: None,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }

    /// Insert `delay` between consecutive records.
    #[must_use]
    pub const fn pacing(mut self, delay: Duration) -> Self {
        self.pacing = Some(delay);
        self
    }

    /// Log replay progress every `every` records.
    ///
    /// # Panics
    ///
    /// Panics if `every` is zero.
    #[must_use]
    pub const fn report_interval(mut self, every: usize) -> Self {
        assert!(every > 0, "report interval must be positive");
        self.report_interval = Some(every);
        self
    }

    /// Size the pipeline channel to hold `capacity` records.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub const fn channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }
}

impl Default for ReplayConfig {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{DEFAULT_CHANNEL_CAPACITY, ReplayConfig};

    #[test]
    fn defaults_leave_pacing_and_reporting_off() {
        let config = ReplayConfig::default();
        assert!(config.pacing.is_none());
        assert!(config.report_interval.is_none());
        assert_eq!(config.channel_capacity, DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn setters_chain() {
        let config = ReplayConfig::new()
            .pacing(Duration::from_millis(3))
            .report_interval(5)
            .channel_capacity(8);
        assert_eq!(config.pacing, Some(Duration::from_millis(3)));
        assert_eq!(config.report_interval, Some(5));
        assert_eq!(config.channel_capacity, 8);
    }

    #[test]
    #[should_panic(expected = "report interval must be positive")]
    fn zero_report_interval_is_rejected() { let _ = ReplayConfig::new().report_interval(0); }
}
