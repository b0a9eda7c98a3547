//! Utilities for driving a [`RecordSource`](replayset::RecordSource) through
//! an in-memory pipeline during tests.
//!
//! These helpers replay a source over a bounded channel, verify the received
//! sequence against the source, and provide fixtures for backing files and
//! log capture.
//!
//! ```rust
//! use replayset::ListSource;
//! use replayset_testing::drive;
//!
//! # async fn example() {
//! let source = ListSource::new(["a", "b"]);
//! let verified = drive(&source).await.unwrap();
//! assert_eq!(verified, 2);
//! # }
//! ```

pub mod fixtures;
pub mod harness;
pub mod logging;

pub use fixtures::{LINE_SEPARATOR, TEN_LINES, lines_file, ten_line_file};
pub use harness::{HarnessError, drive, drive_with_config};
pub use logging::{LoggerHandle, logger};
