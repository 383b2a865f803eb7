use serde::{Deserialize, Serialize};

/// A point in time series data, time in seconds since the simulation origin
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct TimePoint {
    pub time_s: f64,
    pub value: f64,
}

impl TimePoint {
    pub fn new(time_s: f64, value: f64) -> Self {
        Self { time_s, value }
    }
}

/// Time series data aligned to the simulation time axis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TimeSeries {
    pub points: Vec<TimePoint>,
    #[serde(skip)]
    pub kind: TimeSeriesKind,
}

/// Last alignment stage applied to a series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeSeriesKind {
    #[default]
    Normalized,
    Rescaled,
    Rate,
    Smoothed,
}

impl TimeSeriesKind {
    pub fn name(&self) -> &'static str {
        match self {
            TimeSeriesKind::Normalized => "normalized",
            TimeSeriesKind::Rescaled => "rescaled",
            TimeSeriesKind::Rate => "rate",
            TimeSeriesKind::Smoothed => "smoothed rate",
        }
    }
}

impl TimeSeries {
    pub fn new(points: Vec<TimePoint>, kind: TimeSeriesKind) -> Self {
        Self { points, kind }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn first_time(&self) -> Option<f64> {
        self.points.first().map(|p| p.time_s)
    }

    pub fn last_time(&self) -> Option<f64> {
        self.points.last().map(|p| p.time_s)
    }

    pub fn times(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.time_s).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn mean(&self) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }
        Some(self.points.iter().map(|p| p.value).sum::<f64>() / self.points.len() as f64)
    }

    pub fn max_value(&self) -> Option<f64> {
        self.points.iter().map(|p| p.value).reduce(f64::max)
    }

    pub fn as_charming_points(&self) -> Vec<Vec<f64>> {
        self.points
            .iter()
            .map(|p| vec![p.time_s, p.value])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(points: &[(f64, f64)]) -> TimeSeries {
        TimeSeries::new(
            points.iter().map(|&(t, v)| TimePoint::new(t, v)).collect(),
            TimeSeriesKind::Normalized,
        )
    }

    #[test]
    fn should_convert_to_charming_points() {
        let ts = series(&[(0.0, 1.0), (0.5, 2.0)]);
        assert_eq!(ts.as_charming_points(), vec![vec![0.0, 1.0], vec![0.5, 2.0]]);
    }

    #[test]
    fn should_report_bounds_and_stats() {
        let ts = series(&[(0.0, 1.0), (1.0, 5.0), (2.0, 3.0)]);
        assert_eq!(ts.first_time(), Some(0.0));
        assert_eq!(ts.last_time(), Some(2.0));
        assert_eq!(ts.mean(), Some(3.0));
        assert_eq!(ts.max_value(), Some(5.0));
    }

    #[test]
    fn should_have_no_stats_when_empty() {
        let ts = TimeSeries::default();
        assert!(ts.is_empty());
        assert_eq!(ts.last_time(), None);
        assert_eq!(ts.mean(), None);
        assert_eq!(ts.max_value(), None);
    }
}
