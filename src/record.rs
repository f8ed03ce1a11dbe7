pub const REPORT_HEADER: &str = "timestamp,commit_hash,mean,lower_bound,upper_bound";

/// One row of the trend log. The statistics stay opaque strings so rows
/// render byte-for-byte as the report emitted them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchRecord {
    pub timestamp: u64,
    pub commit: String,
    pub mean: String,
    pub lower_bound: String,
    pub upper_bound: String,
}

impl BenchRecord {
    pub fn csv_line(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.timestamp, self.commit, self.mean, self.lower_bound, self.upper_bound
        )
    }

    pub fn summary(&self) -> String {
        format!(
            "{}: mean={} bounds=[{}, {}]",
            self.commit, self.mean, self.lower_bound, self.upper_bound
        )
    }
}
