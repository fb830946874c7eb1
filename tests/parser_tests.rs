// Record parser tests: field counts, timestamp/numeric recovery, unit conversion

mod common;

use common::{HEADER, csv_log, raw_row, row};
use speedview::parser::{LogError, load_samples, parse_samples};

#[test]
fn parses_well_formed_rows_in_file_order() {
    let csv = csv_log(&[
        row("ISP A - Town", 12.5, 100.0, 20.0, "2024-01-15T10:00:00+00:00"),
        row("ISP B - City", 8.0, 250.0, 40.0, "2024-01-15T11:00:00+00:00"),
    ]);
    let samples = parse_samples(csv.as_bytes()).unwrap();
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].server_name, "ISP A - Town");
    assert_eq!(samples[0].ping_ms, 12.5);
    assert_eq!(samples[0].download_mbps, 100.0);
    assert_eq!(samples[0].upload_mbps, 20.0);
    assert_eq!(samples[1].server_name, "ISP B - City");
    assert_eq!(samples[1].download_mbps, 250.0);
}

#[test]
fn converts_bytes_per_second_to_mbps() {
    let csv = csv_log(&[raw_row("s", "10", "12345678", "1000000", "2024-01-15T10:00:00Z")]);
    let samples = parse_samples(csv.as_bytes()).unwrap();
    let s = &samples[0];
    assert!((s.download_mbps - 12_345_678.0 * 8.0 / 1_000_000.0).abs() < 1e-9);
    assert_eq!(s.upload_mbps, 8.0);
    // and back
    assert!((s.download_mbps * 1_000_000.0 / 8.0 - 12_345_678.0).abs() < 1e-6);
}

#[test]
fn header_only_yields_no_samples() {
    let csv = format!("{HEADER}\n");
    let samples = parse_samples(csv.as_bytes()).unwrap();
    assert!(samples.is_empty());
}

#[test]
fn empty_input_yields_no_samples() {
    let samples = parse_samples("".as_bytes()).unwrap();
    assert!(samples.is_empty());
}

#[test]
fn rows_with_wrong_field_count_are_dropped() {
    let good = row("good", 10.0, 100.0, 10.0, "2024-01-15T10:00:00Z");
    // 21 fields: the CLI row without the appended timestamp
    let short = good.rsplit_once(',').unwrap().0.to_string();
    let long = format!("{good},\"extra\"");
    let csv = csv_log(&[short, good.clone(), long]);
    let samples = parse_samples(csv.as_bytes()).unwrap();
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].server_name, "good");
}

#[test]
fn bad_timestamp_drops_the_row() {
    let csv = csv_log(&[
        row("bad", 10.0, 100.0, 10.0, "yesterday"),
        row("good", 10.0, 100.0, 10.0, "2024-01-15T10:00:00+01:00"),
    ]);
    let samples = parse_samples(csv.as_bytes()).unwrap();
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].server_name, "good");
}

// Unlike the timestamp, unparseable numbers are zero-filled and the row is kept.
#[test]
fn bad_numeric_fields_default_to_zero_and_keep_the_row() {
    let csv = csv_log(&[raw_row(
        "zeroed",
        "n/a",
        "",
        "oops",
        "2024-01-15T10:00:00Z",
    )]);
    let samples = parse_samples(csv.as_bytes()).unwrap();
    assert_eq!(samples.len(), 1);
    let s = &samples[0];
    assert_eq!(s.ping_ms, 0.0);
    assert_eq!(s.download_mbps, 0.0);
    assert_eq!(s.upload_mbps, 0.0);
}

#[test]
fn empty_server_name_is_allowed() {
    let csv = csv_log(&[row("", 10.0, 100.0, 10.0, "2024-01-15T10:00:00Z")]);
    let samples = parse_samples(csv.as_bytes()).unwrap();
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].server_name, "");
}

#[test]
fn timestamp_keeps_logged_offset_for_display() {
    let csv = csv_log(&[row("s", 10.0, 100.0, 10.0, "2024-03-09T23:30:15-05:00")]);
    let samples = parse_samples(csv.as_bytes()).unwrap();
    assert_eq!(samples[0].display_timestamp(), "2024-03-09 23:30:15 -05:00");
}

#[test]
fn non_utf8_server_name_keeps_every_row() {
    let mut rows: Vec<String> = (0..50)
        .map(|i| row(&format!("ISP {i}"), 10.0, 100.0, 10.0, "2024-01-15T10:00:00Z"))
        .collect();
    rows.push(row("M?nchen", 10.0, 100.0, 10.0, "2024-01-16T10:00:00Z"));
    let mut bytes = csv_log(&rows).into_bytes();
    // Latin-1 'ü' in the last row's server name
    let pos = bytes.iter().rposition(|&b| b == b'?').unwrap();
    bytes[pos] = 0xfc;

    let samples = parse_samples(bytes.as_slice()).unwrap();
    assert_eq!(samples.len(), 51);
    assert_eq!(samples[0].server_name, "ISP 0");
    assert_eq!(samples[50].server_name, "M\u{FFFD}nchen");
    assert_eq!(samples[50].download_mbps, 100.0);
}

// NaN/inf are valid f64 text; they are kept as-is rather than zero-filled.
#[test]
fn nan_and_inf_numbers_are_kept() {
    let csv = csv_log(&[
        raw_row("nan", "10", "NaN", "1000000", "2024-01-15T10:00:00Z"),
        raw_row("inf", "10", "inf", "1000000", "2024-01-15T11:00:00Z"),
    ]);
    let samples = parse_samples(csv.as_bytes()).unwrap();
    assert_eq!(samples.len(), 2);
    assert!(samples[0].download_mbps.is_nan());
    assert_eq!(samples[1].download_mbps, f64::INFINITY);
}

#[test]
fn load_samples_reads_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("log.csv");
    std::fs::write(
        &path,
        csv_log(&[row("s", 10.0, 100.0, 10.0, "2024-01-15T10:00:00Z")]),
    )
    .unwrap();
    let samples = load_samples(&path).unwrap();
    assert_eq!(samples.len(), 1);
}

#[test]
fn load_samples_missing_file_is_open_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = load_samples(dir.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, LogError::Open { .. }));
    assert!(err.to_string().contains("missing.csv"));
}
