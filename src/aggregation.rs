// Bucketing: group samples by calendar day / month / year and average each bucket.
// Buckets live in a BTreeMap so output order is the key order (chronological for
// zero-padded keys).

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};

use crate::models::{Average, Averages, Sample};

/// Calendar granularity of a bucket key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Day,
    Month,
    Year,
}

impl Granularity {
    fn format(self) -> &'static str {
        match self {
            Granularity::Day => "%Y-%m-%d",
            Granularity::Month => "%Y-%m",
            Granularity::Year => "%Y",
        }
    }

    /// Bucket key for `ts`, truncated in the timestamp's own offset.
    pub fn key(self, ts: &DateTime<FixedOffset>) -> String {
        ts.format(self.format()).to_string()
    }
}

/// Computes daily, monthly and yearly averages, each ascending by period.
pub fn compute_averages(samples: &[Sample]) -> Averages {
    Averages {
        daily: average_by(samples, Granularity::Day),
        monthly: average_by(samples, Granularity::Month),
        yearly: average_by(samples, Granularity::Year),
    }
}

/// Groups `samples` by `granularity` and returns one Average per non-empty bucket,
/// ascending by period.
pub fn average_by(samples: &[Sample], granularity: Granularity) -> Vec<Average> {
    let mut buckets: BTreeMap<String, Vec<&Sample>> = BTreeMap::new();
    for s in samples {
        buckets
            .entry(granularity.key(&s.timestamp))
            .or_default()
            .push(s);
    }

    buckets
        .into_iter()
        .map(|(period, refs)| average_bucket(period, &refs))
        .collect()
}

/// `refs` is never empty: a bucket exists only once a sample lands in it.
fn average_bucket(period: String, refs: &[&Sample]) -> Average {
    let n = refs.len() as f64;
    Average {
        period,
        avg_download: refs.iter().map(|s| s.download_mbps).sum::<f64>() / n,
        avg_upload: refs.iter().map(|s| s.upload_mbps).sum::<f64>() / n,
        avg_ping: refs.iter().map(|s| s.ping_ms).sum::<f64>() / n,
        num_data_points: refs.len(),
    }
}
