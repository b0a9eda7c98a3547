//! Unit tests for record sources and separator splitting.

use std::io::Write as _;

use bytes::Bytes;
use rstest::rstest;
use tempfile::NamedTempFile;

use super::{
    ListSource,
    RecordSource,
    RepeatSource,
    SourceError,
    list::split_records_for_tests as split_records,
};

fn lines(count: usize) -> ListSource {
    ListSource::new((1..=count).map(|n| format!("Line {n}")))
}

#[test]
fn size_defaults_to_backing_length() {
    let source = lines(10);
    assert_eq!(source.size(), 10);
    assert_eq!(source.backing_len(), 10);
}

#[test]
fn records_are_returned_in_insertion_order() {
    let source = lines(10);
    assert_eq!(source.record(0).unwrap(), Bytes::from("Line 1"));
    assert_eq!(source.record(9).unwrap(), Bytes::from("Line 10"));
}

#[test]
fn reads_are_idempotent() {
    let source = lines(3);
    for _ in 0..3 {
        assert_eq!(source.record(1).unwrap(), Bytes::from("Line 2"));
    }
}

#[test]
fn set_size_beyond_backing_wraps_around() {
    let mut source = lines(10);
    source.set_size(20);
    assert_eq!(source.size(), 20);
    assert_eq!(source.record(10).unwrap(), Bytes::from("Line 1"));
    assert_eq!(source.record(19).unwrap(), Bytes::from("Line 10"));
}

#[test]
fn read_past_replay_size_is_rejected() {
    let mut source = lines(10);
    source.set_size(20);
    match source.record(20) {
        Err(SourceError::OutOfRange { index: 20, size: 20 }) => {}
        other => panic!("expected OutOfRange, got {other:?}"),
    }
}

#[test]
fn set_size_below_backing_truncates_the_replay() {
    let mut source = lines(10);
    source.set_size(4);
    assert_eq!(source.size(), 4);
    assert!(source.record(3).is_ok());
    assert!(matches!(
        source.record(4),
        Err(SourceError::OutOfRange { index: 4, size: 4 })
    ));
}

#[test]
fn empty_backing_with_positive_size_reports_empty() {
    let mut source = ListSource::new(Vec::<Bytes>::new());
    assert_eq!(source.size(), 0);
    source.set_size(5);
    assert!(matches!(source.record(2), Err(SourceError::Empty)));
}

#[test]
fn empty_backing_without_size_reports_out_of_range() {
    let source = ListSource::new(Vec::<Bytes>::new());
    assert!(matches!(
        source.record(0),
        Err(SourceError::OutOfRange { index: 0, size: 0 })
    ));
}

#[test]
fn from_file_loads_records_in_order() {
    let mut file = NamedTempFile::new().expect("create temp file");
    write!(file, "Line 1\nLine 2\nLine 3\n").expect("write temp file");
    let source = ListSource::from_file(file.path(), "\n").expect("load");
    assert_eq!(source.backing_len(), 3);
    assert_eq!(source.record(2).unwrap(), Bytes::from("Line 3"));
}

#[test]
fn from_file_missing_path_fails_to_load() {
    let error = ListSource::from_file("/nonexistent/records.txt", "\n").unwrap_err();
    match error {
        SourceError::Load { path, .. } => {
            assert_eq!(path.to_str(), Some("/nonexistent/records.txt"));
        }
        other => panic!("expected Load, got {other:?}"),
    }
}

#[test]
fn from_file_rejects_empty_separator() {
    let file = NamedTempFile::new().expect("create temp file");
    assert!(matches!(
        ListSource::from_file(file.path(), ""),
        Err(SourceError::EmptySeparator)
    ));
}

#[rstest]
#[case(b"a\nb\nc\n", b"\n", vec!["a", "b", "c"])]
#[case(b"a\nb\nc", b"\n", vec!["a", "b", "c"])]
#[case(b"a\n\nb", b"\n", vec!["a", "", "b"])]
#[case(b"", b"\n", vec![])]
#[case(b"\n", b"\n", vec![""])]
#[case(b"a\r\nb\r\n", b"\r\n", vec!["a", "b"])]
#[case(b"a\r\nb", b"\r\n", vec!["a", "b"])]
#[case(b"one", b"\n", vec!["one"])]
fn split_records_cases(
    #[case] raw: &[u8],
    #[case] separator: &[u8],
    #[case] expected: Vec<&str>,
) {
    let records = split_records(raw, separator);
    let expected: Vec<Bytes> = expected
        .into_iter()
        .map(|s| Bytes::copy_from_slice(s.as_bytes()))
        .collect();
    assert_eq!(records, expected);
}

#[test]
fn repeat_source_defaults_to_one_record() {
    let source = RepeatSource::new("ping");
    assert_eq!(source.size(), 1);
    assert_eq!(source.record(0).unwrap(), Bytes::from("ping"));
}

#[test]
fn repeat_source_scales_to_requested_size() {
    let mut source = RepeatSource::new("ping");
    source.set_size(1000);
    assert_eq!(source.size(), 1000);
    assert_eq!(source.record(999).unwrap(), Bytes::from("ping"));
    assert!(matches!(
        source.record(1000),
        Err(SourceError::OutOfRange { .. })
    ));
}
