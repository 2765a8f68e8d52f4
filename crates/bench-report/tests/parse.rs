// File: crates/bench-report/tests/parse.rs
// Purpose: Record parsing: blank lines, field checks, error positions.

use std::path::Path;

use bench_report::dataset::parse_series;
use bench_report::{Record, RecordError, ReportError, Series};

fn parse(text: &str) -> Result<Series, ReportError> {
    parse_series(text.as_bytes(), Path::new("find.csv"))
}

fn pairs(series: &Series) -> Vec<(i64, i64)> {
    series.records().iter().map(|r| (r.count, r.duration)).collect()
}

#[test]
fn parses_records_in_file_order() {
    let series = parse("10,100\n20,250\n").expect("parse");
    assert_eq!(series.records(), &[Record::new(10, 100), Record::new(20, 250)]);
}

#[test]
fn keeps_unsorted_order() {
    let series = parse("1000,90\n100,40\n10000,130\n100,41\n").expect("parse");
    assert_eq!(pairs(&series), vec![(1000, 90), (100, 40), (10000, 130), (100, 41)]);
}

#[test]
fn blank_lines_are_skipped() {
    let plain = parse("10,100\n20,250\n").expect("plain");
    let with_blank = parse("10,100\n\n20,250\n").expect("with blank");
    assert_eq!(plain, with_blank);

    let padded = parse("\n\n10,100\n   \n\t\n20,250\n\n").expect("padded");
    assert_eq!(plain, padded);
}

#[test]
fn crlf_and_missing_trailing_newline() {
    let series = parse("10,100\r\n\r\n20,250").expect("parse");
    assert_eq!(pairs(&series), vec![(10, 100), (20, 250)]);
}

#[test]
fn surrounding_whitespace_in_fields_is_tolerated() {
    let series = parse(" 10 , 100 \n-3,+7\n").expect("parse");
    assert_eq!(pairs(&series), vec![(10, 100), (-3, 7)]);
}

#[test]
fn empty_input_gives_empty_series() {
    assert!(parse("").expect("empty").is_empty());
    assert!(parse("\n\n  \n").expect("blank only").is_empty());
}

#[test]
fn non_integer_field_is_a_parse_error() {
    let err = parse("10,100\nabc,100\n").unwrap_err();
    match err {
        ReportError::Parse { line, reason, path } => {
            assert_eq!(line, 2);
            assert_eq!(path, Path::new("find.csv"));
            assert_eq!(reason, RecordError::NotAnInteger { field: "count", value: "abc".into() });
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = parse("10,1.5\n").unwrap_err();
    assert!(matches!(
        err,
        ReportError::Parse { line: 1, reason: RecordError::NotAnInteger { field: "duration", .. }, .. }
    ));
}

#[test]
fn wrong_field_count_is_a_parse_error() {
    let err = parse("1,2,3\n").unwrap_err();
    assert!(matches!(err, ReportError::Parse { line: 1, reason: RecordError::FieldCount(3), .. }));

    let err = parse("10,100\n42\n").unwrap_err();
    assert!(matches!(err, ReportError::Parse { line: 2, reason: RecordError::FieldCount(1), .. }));

    let err = parse(",\n").unwrap_err();
    assert!(matches!(err, ReportError::Parse { reason: RecordError::NotAnInteger { field: "count", .. }, .. }));
}

#[test]
fn invalid_utf8_is_a_parse_error() {
    let bytes: &[u8] = b"10,100\n\xff\xfe,1\n";
    let err = parse_series(bytes, Path::new("delete.csv")).unwrap_err();
    assert!(matches!(err, ReportError::Parse { reason: RecordError::InvalidUtf8, .. }), "got {err:?}");
}

#[test]
fn parsing_is_idempotent() {
    let text = "100,812\n1000,1204\n\n10000,1590\n";
    assert_eq!(parse(text).expect("first"), parse(text).expect("second"));
}

#[test]
fn parse_error_message_names_file_and_line() {
    let err = parse("10,100\nabc,100\n").unwrap_err();
    assert_eq!(err.to_string(), "find.csv:2: count `abc` is not an integer");
}

#[test]
fn series_display_matches_pair_list() {
    let series: Series = vec![Record::new(10, 100), Record::new(20, 250)].into();
    assert_eq!(series.to_string(), "[(10, 100), (20, 250)]");
    assert_eq!(Series::new().to_string(), "[]");
}

#[test]
fn quoted_fields_are_not_integers() {
    let err = parse("\"10\",\"100\"\n").unwrap_err();
    assert!(matches!(
        err,
        ReportError::Parse { line: 1, reason: RecordError::NotAnInteger { field: "count", .. }, .. }
    ), "got {err:?}");
}

#[test]
fn stray_quote_fails_on_its_own_line() {
    let err = parse("10,\"100\n20,250\n").unwrap_err();
    match err {
        ReportError::Parse { line, reason, .. } => {
            assert_eq!(line, 1);
            assert_eq!(reason, RecordError::NotAnInteger { field: "duration", value: "\"100".into() });
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
