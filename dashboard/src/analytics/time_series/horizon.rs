use bloat_report::time_series::TimeSeries;

/// End of the shared time axis: the latest final time over all non-empty
/// series, capped at `max_length` seconds. `None` when every series is empty.
pub fn resolve_horizon(series: &[&TimeSeries], max_length: f64) -> Option<f64> {
    series
        .iter()
        .filter_map(|s| s.last_time())
        .reduce(f64::max)
        .map(|end| end.min(max_length))
}
