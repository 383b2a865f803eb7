use super::metric_key::MetricKey;
use super::time_series::TimeSeries;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A metric series after alignment.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AlignedSeries {
    pub key: MetricKey,
    pub series: TimeSeries,
}

/// Every series of one run on the shared simulation time axis.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct AlignedRun {
    /// Wall clock nanoseconds mapped to t=0
    pub origin_ns: i64,

    /// End of the shared time axis in seconds
    pub horizon_s: f64,

    /// Harness counter dump interval in seconds
    pub dump_interval_s: f64,

    /// Aligned series in load order
    pub series: Vec<AlignedSeries>,
}

impl AlignedRun {
    pub fn get(&self, key: &MetricKey) -> Option<&TimeSeries> {
        self.series
            .iter()
            .find(|s| &s.key == key)
            .map(|s| &s.series)
    }

    /// Like `get`, but absent and empty series are both `None`.
    pub fn non_empty(&self, key: &MetricKey) -> Option<&TimeSeries> {
        self.get(key).filter(|s| !s.is_empty())
    }

    pub fn total_samples(&self) -> usize {
        self.series.iter().map(|s| s.series.len()).sum()
    }

    pub fn non_empty_series(&self) -> usize {
        self.series.iter().filter(|s| !s.series.is_empty()).count()
    }

    pub fn dump_to_json(&self, output_dir: &Path) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(output_dir)?;

        let path = output_dir.join("aligned.json");
        let json = serde_json::to_string(self).map_err(std::io::Error::other)?;
        std::fs::write(&path, json)?;
        Ok(path)
    }
}
