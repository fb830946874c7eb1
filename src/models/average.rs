// Per-period averages: one row per calendar bucket (day, month or year)

/// Mean throughput and latency over every sample whose timestamp falls in `period`.
#[derive(Debug, Clone, PartialEq)]
pub struct Average {
    /// Bucket key: `YYYY-MM-DD`, `YYYY-MM` or `YYYY`.
    pub period: String,
    pub avg_download: f64,
    pub avg_upload: f64,
    pub avg_ping: f64,
    /// Always >= 1; empty buckets are never emitted.
    pub num_data_points: usize,
}

/// The three averaged series, each ordered ascending by period.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Averages {
    pub daily: Vec<Average>,
    pub monthly: Vec<Average>,
    pub yearly: Vec<Average>,
}
