// One speedtest result, decoded from a single CSV row

use chrono::{DateTime, FixedOffset};

/// Display format for sample timestamps: `YYYY-MM-DD HH:MM:SS +HH:MM`.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S %:z";

#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Time the test ran, in the offset it was logged with.
    pub timestamp: DateTime<FixedOffset>,
    pub server_name: String,
    pub download_mbps: f64,
    pub upload_mbps: f64,
    pub ping_ms: f64,
}

impl Sample {
    /// Timestamp rendered for the results table.
    pub fn display_timestamp(&self) -> String {
        self.timestamp.format(DISPLAY_FORMAT).to_string()
    }
}

/// Converts a bytes-per-second throughput figure to megabits per second.
pub fn bytes_per_sec_to_mbps(raw: f64) -> f64 {
    (raw * 8.0) / 1_000_000.0
}
