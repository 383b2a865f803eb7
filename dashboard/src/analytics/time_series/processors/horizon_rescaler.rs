use super::TimeSeriesProcessor;
use bloat_report::time_series::{TimeSeries, TimeSeriesKind};
use tracing::debug;

/// Stretches a series linearly so its last sample lands on the horizon.
pub struct HorizonRescaler {
    horizon: f64,
}

impl HorizonRescaler {
    pub fn new(horizon: f64) -> Self {
        Self { horizon }
    }
}

impl TimeSeriesProcessor for HorizonRescaler {
    fn process(&self, data: &TimeSeries) -> TimeSeries {
        rescale_to_horizon(data, self.horizon)
    }
}

/// Multiplies every time by `horizon / last`. This assumes a uniform sampling
/// cadence; it is not a resample.
///
/// Empty series, series ending at t=0 and series already ending on the
/// horizon are returned unchanged. The last point is pinned to `horizon`
/// exactly, so rescaling twice is the same as rescaling once.
pub fn rescale_to_horizon(series: &TimeSeries, horizon: f64) -> TimeSeries {
    let Some(last) = series.last_time() else {
        return series.clone();
    };
    if last == 0.0 {
        debug!("Series ends at t=0, skipping rescale");
        return series.clone();
    }
    if last == horizon {
        return series.clone();
    }

    let factor = horizon / last;
    let mut points = series.points.clone();
    for point in points.iter_mut() {
        point.time_s *= factor;
    }
    if let Some(point) = points.last_mut() {
        point.time_s = horizon;
    }

    TimeSeries::new(points, TimeSeriesKind::Rescaled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bloat_report::time_series::TimePoint;
    use proptest::prelude::*;

    fn series(points: &[(f64, f64)]) -> TimeSeries {
        TimeSeries::new(
            points.iter().map(|&(t, v)| TimePoint::new(t, v)).collect(),
            TimeSeriesKind::Normalized,
        )
    }

    #[test]
    fn should_stretch_last_sample_onto_horizon() {
        let rescaled = rescale_to_horizon(&series(&[(0.0, 1.0), (27.0, 5.0)]), 30.0);
        assert_eq!(
            rescaled.points,
            vec![TimePoint::new(0.0, 1.0), TimePoint::new(30.0, 5.0)]
        );
        assert_eq!(rescaled.kind, TimeSeriesKind::Rescaled);
    }

    #[test]
    fn should_stretch_inner_points_linearly() {
        let rescaled = rescale_to_horizon(&series(&[(0.0, 1.0), (9.0, 2.0), (27.0, 3.0)]), 30.0);
        assert_relative_eq!(rescaled.points[1].time_s, 10.0, epsilon = 1e-12);
        assert_eq!(rescaled.values(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn should_compress_series_ending_past_horizon() {
        let rescaled = rescale_to_horizon(&series(&[(0.0, 1.0), (15.5, 1.0), (31.0, 1.0)]), 30.0);
        assert_relative_eq!(rescaled.points[1].time_s, 15.0, epsilon = 1e-12);
        assert_eq!(rescaled.last_time(), Some(30.0));
    }

    #[test]
    fn should_skip_degenerate_series() {
        let empty = TimeSeries::default();
        assert_eq!(rescale_to_horizon(&empty, 30.0), empty);

        let at_zero = series(&[(0.0, 7.0)]);
        assert_eq!(rescale_to_horizon(&at_zero, 30.0), at_zero);
    }

    #[test]
    fn should_apply_through_processor() {
        let processor = HorizonRescaler::new(30.0);
        let rescaled = processor.process(&series(&[(0.0, 1.0), (27.0, 5.0)]));
        assert_eq!(rescaled.last_time(), Some(30.0));
    }

    proptest! {
        #[test]
        fn rescale_is_idempotent(
            times in proptest::collection::vec(0.001f64..500.0, 1..32),
            horizon in 0.5f64..400.0,
        ) {
            let mut times = times;
            times.sort_by(|a, b| a.total_cmp(b));
            let input = series(&times.iter().map(|&t| (t, 1.0)).collect::<Vec<_>>());

            let once = rescale_to_horizon(&input, horizon);
            let twice = rescale_to_horizon(&once, horizon);
            prop_assert_eq!(once.last_time(), Some(horizon));
            prop_assert_eq!(&once.points, &twice.points);
        }
    }
}
