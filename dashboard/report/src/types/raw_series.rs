use serde::{Deserialize, Serialize};

/// One recorded sample as written by the harness: wall clock nanoseconds and value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct RawSample {
    pub timestamp_ns: i64,
    pub value: f64,
}

impl RawSample {
    pub fn new(timestamp_ns: i64, value: f64) -> Self {
        Self {
            timestamp_ns,
            value,
        }
    }
}

/// Samples of one metric file, in file order. Empty when the file is absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RawSeries {
    pub samples: Vec<RawSample>,
}

impl RawSeries {
    pub fn new(samples: Vec<RawSample>) -> Self {
        Self { samples }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn min_timestamp(&self) -> Option<i64> {
        self.samples.iter().map(|s| s.timestamp_ns).min()
    }
}
