use super::TimeSeriesProcessor;
use bloat_report::time_series::{TimeSeries, TimeSeriesKind};

/// Turns per-interval counts into per-second rates.
///
/// The harness resets its counters at every dump, so each value is the count
/// accumulated since the previous dump. Running totals must not be fed here.
pub struct RateDeriver {
    dump_interval: f64,
}

impl RateDeriver {
    pub fn new(dump_interval: f64) -> Self {
        Self { dump_interval }
    }
}

impl TimeSeriesProcessor for RateDeriver {
    fn process(&self, data: &TimeSeries) -> TimeSeries {
        derive_rate(data, self.dump_interval)
    }
}

pub fn derive_rate(series: &TimeSeries, dt: f64) -> TimeSeries {
    let mut points = series.points.clone();
    for point in points.iter_mut() {
        point.value /= dt;
    }
    TimeSeries::new(points, TimeSeriesKind::Rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloat_report::time_series::TimePoint;
    use proptest::prelude::*;

    fn series(points: &[(f64, f64)]) -> TimeSeries {
        TimeSeries::new(
            points.iter().map(|&(t, v)| TimePoint::new(t, v)).collect(),
            TimeSeriesKind::Normalized,
        )
    }

    #[test]
    fn should_divide_counts_by_dump_interval() {
        let rate = derive_rate(&series(&[(0.0, 0.0), (0.5, 4.0), (1.0, 9.0)]), 0.5);
        assert_eq!(
            rate.points,
            vec![
                TimePoint::new(0.0, 0.0),
                TimePoint::new(0.5, 8.0),
                TimePoint::new(1.0, 18.0)
            ]
        );
        assert_eq!(rate.kind, TimeSeriesKind::Rate);
    }

    #[test]
    fn should_keep_empty_series_empty() {
        assert!(RateDeriver::new(0.25).process(&TimeSeries::default()).is_empty());
    }

    proptest! {
        #[test]
        fn rate_times_interval_restores_counts(
            values in proptest::collection::vec(-1.0e9f64..1.0e9, 0..64),
            exponent in -4i32..3,
        ) {
            let dt = 2f64.powi(exponent);
            let input = series(
                &values.iter().enumerate().map(|(i, &v)| (i as f64 * dt, v)).collect::<Vec<_>>(),
            );
            let rate = derive_rate(&input, dt);
            let restored: Vec<f64> = rate.values().iter().map(|v| v * dt).collect();
            prop_assert_eq!(restored, input.values());
            prop_assert_eq!(rate.times(), input.times());
        }
    }
}
