use bloat_report::time_series::TimeSeries;

pub mod horizon_rescaler;
pub mod moving_average;
pub mod rate;

/// Process time series data
pub trait TimeSeriesProcessor {
    fn process(&self, data: &TimeSeries) -> TimeSeries;
}
