// Domain models: parsed speedtest samples and per-period averages

mod average;
mod sample;

pub use average::{Average, Averages};
pub use sample::{DISPLAY_FORMAT, Sample, bytes_per_sec_to_mbps};
