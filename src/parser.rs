// Record parser: Ookla speedtest CSV log -> Sample.
// Bad row shape or timestamp drops the row; bad numbers become 0.0 and the row is kept.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, FixedOffset};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{Sample, bytes_per_sec_to_mbps};

/// Field count of a data row: the 21 Ookla CLI columns plus the logged timestamp.
pub const EXPECTED_FIELDS: usize = 22;

const COL_SERVER_NAME: usize = 0;
const COL_PING: usize = 2;
const COL_DOWNLOAD: usize = 5;
const COL_UPLOAD: usize = 6;
const COL_TIMESTAMP: usize = 21;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("could not open log file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not read CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Opens the log at `path` and decodes every well-formed row.
pub fn load_samples(path: impl AsRef<Path>) -> Result<Vec<Sample>, LogError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LogError::Open {
        path: path.display().to_string(),
        source,
    })?;
    parse_samples(file)
}

/// Decodes CSV content (header row first). Rows that cannot become a Sample are skipped;
/// only a reader failure (I/O) fails the whole call. Fields are decoded lossily, so a
/// stray non-UTF-8 byte only mangles that field.
pub fn parse_samples<R: Read>(reader: R) -> Result<Vec<Sample>, LogError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut samples = Vec::new();
    let mut rows_seen: usize = 0;
    for record in rdr.byte_records() {
        let record = record?;
        rows_seen += 1;
        // Header is line 1.
        let line = rows_seen + 1;
        if let Some(sample) = decode_record(&record, line) {
            samples.push(sample);
        }
    }

    if rows_seen == 0 {
        info!("CSV file is empty or contains only headers");
    } else if samples.len() < rows_seen {
        warn!(
            rows = rows_seen,
            kept = samples.len(),
            skipped = rows_seen - samples.len(),
            "some CSV rows were skipped"
        );
    }
    Ok(samples)
}

fn decode_record(record: &csv::ByteRecord, line: usize) -> Option<Sample> {
    if record.len() != EXPECTED_FIELDS {
        warn!(
            line,
            fields = record.len(),
            expected = EXPECTED_FIELDS,
            "skipping malformed row"
        );
        return None;
    }
    let field = |idx: usize| String::from_utf8_lossy(record.get(idx).unwrap_or_default());

    let raw_timestamp = field(COL_TIMESTAMP);
    let timestamp = match parse_timestamp(&raw_timestamp) {
        Ok(ts) => ts,
        Err(e) => {
            warn!(line, value = %raw_timestamp, error = %e, "skipping row with bad timestamp");
            return None;
        }
    };

    Some(Sample {
        timestamp,
        server_name: field(COL_SERVER_NAME).into_owned(),
        download_mbps: bytes_per_sec_to_mbps(parse_number(&field(COL_DOWNLOAD), "download", line)),
        upload_mbps: bytes_per_sec_to_mbps(parse_number(&field(COL_UPLOAD), "upload", line)),
        ping_ms: parse_number(&field(COL_PING), "ping", line),
    })
}

/// Parses an ISO-8601 timestamp with offset (`2024-01-15T10:30:00+01:00`).
pub fn parse_timestamp(raw: &str) -> chrono::ParseResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw.trim())
}

fn parse_number(raw: &str, column: &'static str, line: usize) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) => v,
        Err(e) => {
            debug!(line, column, value = raw, error = %e, "unparseable number, using 0.0");
            0.0
        }
    }
}
