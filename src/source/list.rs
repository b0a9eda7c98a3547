//! In-memory record source backed by an ordered list.

use std::{fs, path::Path};

use bytes::Bytes;
use tracing::debug;

use super::{RecordSource, SourceError, ensure_in_range};

/// Record source holding an ordered, immutable list of byte records.
///
/// The list is populated once at construction, either directly from an
/// iterator of payloads or by splitting a backing file at separator
/// boundaries. Reads never mutate the list; the only mutable state is the
/// optional replay size set through [`set_size`](Self::set_size).
#[derive(Clone, Debug)]
pub struct ListSource {
    records: Vec<Bytes>,
    requested_size: Option<usize>,
}

impl ListSource {
    /// Create a source from an ordered collection of record payloads.
    pub fn new<I, B>(records: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Bytes>,
    {
        Self {
            records: records.into_iter().map(Into::into).collect(),
            requested_size: None,
        }
    }

    /// Load a source from `path`, splitting the file into records at each
    /// occurrence of `separator`.
    ///
    /// The separator is matched as an exact byte sequence. A trailing
    /// separator is optional: a final separator ends the last record rather
    /// than opening an empty one. The file is read fully before the source
    /// is constructed.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::EmptySeparator`] if `separator` is empty and
    /// [`SourceError::Load`] if the file is missing or unreadable.
    pub fn from_file(path: impl AsRef<Path>, separator: &str) -> Result<Self, SourceError> {
        let path = path.as_ref();
        if separator.is_empty() {
            return Err(SourceError::EmptySeparator);
        }
        let raw = fs::read(path).map_err(|source| SourceError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let records = split_records(&raw, separator.as_bytes());
        debug!(
            path = %path.display(),
            records = records.len(),
            "loaded backing file"
        );
        Ok(Self {
            records,
            requested_size: None,
        })
    }

    /// Set the number of records a replay of this source produces.
    ///
    /// No upper bound is enforced; a size larger than the backing list
    /// replays it repeatedly via modulo indexing.
    pub fn set_size(&mut self, size: usize) { self.requested_size = Some(size); }

    /// Number of records in the backing list.
    #[must_use]
    pub fn backing_len(&self) -> usize { self.records.len() }

    /// Whether the backing list holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

impl RecordSource for ListSource {
    fn size(&self) -> usize { self.requested_size.unwrap_or(self.records.len()) }

    fn record(&self, index: usize) -> Result<Bytes, SourceError> {
        ensure_in_range(index, self.size())?;
        if self.records.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(self.records[index % self.records.len()].clone())
    }
}

/// Split `raw` into records at each occurrence of `separator`.
///
/// A trailing separator produces no empty final record; interior empty
/// segments are kept, since they are genuine empty records.
fn split_records(raw: &[u8], separator: &[u8]) -> Vec<Bytes> {
    let mut records = Vec::new();
    let mut start = 0;
    let mut cursor = 0;
    while cursor + separator.len() <= raw.len() {
        if &raw[cursor..cursor + separator.len()] == separator {
            records.push(Bytes::copy_from_slice(&raw[start..cursor]));
            cursor += separator.len();
            start = cursor;
        } else {
            cursor += 1;
        }
    }
    if start < raw.len() {
        records.push(Bytes::copy_from_slice(&raw[start..]));
    }
    records
}

#[cfg(test)]
pub(super) fn split_records_for_tests(raw: &[u8], separator: &[u8]) -> Vec<Bytes> {
    split_records(raw, separator)
}
