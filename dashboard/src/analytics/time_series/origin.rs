use crate::error::ReportError;
use bloat_report::raw_series::RawSeries;
use bloat_report::time_series::{TimePoint, TimeSeries, TimeSeriesKind};

pub const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Earliest timestamp over all anchor samples. This is t=0 of the run.
pub fn resolve_origin(anchors: &[&RawSeries]) -> Result<i64, ReportError> {
    anchors
        .iter()
        .filter_map(|series| series.min_timestamp())
        .min()
        .ok_or(ReportError::EmptyAnchors)
}

/// Shift by `origin` and convert nanoseconds to seconds.
///
/// Samples before the origin come out negative; they are not clamped.
/// The difference is taken in `i128`, so no pair of timestamps overflows.
pub fn normalize(series: &RawSeries, origin: i64) -> TimeSeries {
    let points = series
        .samples
        .iter()
        .map(|s| {
            let elapsed_ns = i128::from(s.timestamp_ns) - i128::from(origin);
            TimePoint::new(elapsed_ns as f64 / NANOS_PER_SECOND, s.value)
        })
        .collect();

    TimeSeries::new(points, TimeSeriesKind::Normalized)
}
