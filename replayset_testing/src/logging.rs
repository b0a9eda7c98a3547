//! Serialised capture of log output for harness assertions.

use std::sync::{Mutex, MutexGuard, OnceLock};

use logtest::Logger;
use rstest::fixture;

/// Handle to the global logger with exclusive access.
///
/// Replay progress reporting is asserted through captured log records; this
/// guard serialises access to the single [`logtest::Logger`] so concurrent
/// tests do not interleave their captures.
pub struct LoggerHandle {
    guard: MutexGuard<'static, Logger>,
}

impl LoggerHandle {
    /// Acquire the global [`Logger`] instance, draining records left over
    /// from earlier tests.
    pub fn new() -> Self {
        static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

        let logger = LOGGER.get_or_init(|| Mutex::new(Logger::start()));
        let guard = logger.lock().expect("logger poisoned");

        let mut handle = Self { guard };
        handle.drain();
        handle
    }

    /// Discard every captured record.
    pub fn drain(&mut self) { while self.guard.pop().is_some() {} }

    /// Pop captured records, returning the messages that contain `needle`.
    pub fn messages_containing(&mut self, needle: &str) -> Vec<String> {
        let mut messages = Vec::new();
        while let Some(record) = self.guard.pop() {
            if record.args().contains(needle) {
                messages.push(record.args().to_string());
            }
        }
        messages
    }

    /// Pop captured records, returning the messages logged at `level` that
    /// contain `needle`.
    pub fn messages_at(&mut self, level: log::Level, needle: &str) -> Vec<String> {
        let mut messages = Vec::new();
        while let Some(record) = self.guard.pop() {
            if record.level() == level && record.args().contains(needle) {
                messages.push(record.args().to_string());
            }
        }
        messages
    }
}

impl Default for LoggerHandle {
    fn default() -> Self { Self::new() }
}

impl std::ops::Deref for LoggerHandle {
    type Target = Logger;

    fn deref(&self) -> &Self::Target { &self.guard }
}

impl std::ops::DerefMut for LoggerHandle {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.guard }
}

#[allow(
    unused_braces,
    reason = "rustc false positive for single line rstest fixtures"
)]
#[fixture]
pub fn logger() -> LoggerHandle { LoggerHandle::new() }
