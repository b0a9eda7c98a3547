//! Backing-file fixtures for record source tests.

use std::io::Write as _;

use rstest::fixture;
use tempfile::NamedTempFile;

/// Record separator used by the generated fixtures: the platform line ending.
pub const LINE_SEPARATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Number of records in the canonical ten-line fixture file.
pub const TEN_LINES: usize = 10;

/// Write `Line 1`..`Line {count}` to a temporary file, one record per line,
/// each terminated by [`LINE_SEPARATOR`].
///
/// The returned guard deletes the file when dropped; read its path with
/// [`NamedTempFile::path`].
///
/// # Panics
///
/// Panics if the temporary file cannot be created or written.
#[must_use]
pub fn lines_file(count: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create backing file");
    for n in 1..=count {
        write!(file, "Line {n}{LINE_SEPARATOR}").expect("write backing file");
    }
    file.flush().expect("flush backing file");
    file
}

/// The canonical ten-line backing file sources are loaded from.
#[fixture]
pub fn ten_line_file() -> NamedTempFile { lines_file(TEN_LINES) }
