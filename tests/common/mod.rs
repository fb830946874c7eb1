// Shared test helpers: build speedtest CSV logs in the logger's 22-column layout

#![allow(dead_code)]

use speedview::models::Sample;
use speedview::parser::parse_timestamp;

pub const HEADER: &str = "\"server name\",\"server id\",\"idle latency\",\"idle jitter\",\"packet loss\",\"download\",\"upload\",\"download bytes\",\"upload bytes\",\"share url\",\"download server count\",\"download latency\",\"download latency jitter\",\"download latency low\",\"download latency high\",\"upload latency\",\"upload latency jitter\",\"upload latency low\",\"upload latency high\",\"idle latency low\",\"idle latency high\",\"timestamp\"";

/// Bytes/sec figure the CLI would log for `mbps` megabits/sec.
pub fn mbps_to_bytes_per_sec(mbps: f64) -> f64 {
    mbps * 125_000.0
}

/// One data row with raw (string) ping/download/upload/timestamp fields.
pub fn raw_row(server: &str, ping: &str, download: &str, upload: &str, timestamp: &str) -> String {
    format!(
        "\"{server}\",\"12345\",\"{ping}\",\"1.25\",\"0\",\"{download}\",\"{upload}\",\"100000000\",\"50000000\",\"\",\"1\",\"15.1\",\"2.3\",\"9.8\",\"40.2\",\"18.4\",\"3.1\",\"10.2\",\"55.7\",\"7.9\",\"12.4\",\"{timestamp}\""
    )
}

/// One well-formed data row; throughput given in Mbps.
pub fn row(server: &str, ping: f64, download_mbps: f64, upload_mbps: f64, timestamp: &str) -> String {
    raw_row(
        server,
        &ping.to_string(),
        &mbps_to_bytes_per_sec(download_mbps).to_string(),
        &mbps_to_bytes_per_sec(upload_mbps).to_string(),
        timestamp,
    )
}

/// Header plus `rows`, newline-terminated.
pub fn csv_log(rows: &[String]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for r in rows {
        out.push_str(r);
        out.push('\n');
    }
    out
}

pub fn sample(timestamp: &str, download_mbps: f64, upload_mbps: f64, ping_ms: f64) -> Sample {
    Sample {
        timestamp: parse_timestamp(timestamp).expect("valid test timestamp"),
        server_name: "Test ISP - Springfield".into(),
        download_mbps,
        upload_mbps,
        ping_ms,
    }
}
