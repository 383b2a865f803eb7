use super::series_store::SeriesStore;
use super::time_series::horizon::resolve_horizon;
use super::time_series::origin::{normalize, resolve_origin};
use super::time_series::processors::horizon_rescaler::HorizonRescaler;
use super::time_series::processors::moving_average::MovingAverageProcessor;
use super::time_series::processors::rate::RateDeriver;
use super::time_series::processors::TimeSeriesProcessor;
use crate::configs::dashboard::AlignmentConfig;
use crate::error::ReportError;
use bloat_report::aligned_run::{AlignedRun, AlignedSeries};
use bloat_report::metric_key::MetricKey;
use bloat_report::raw_series::RawSeries;
use bloat_report::time_series::TimeSeries;
use tracing::{debug, info, warn};

pub struct AlignedRunBuilder;

impl AlignedRunBuilder {
    /// Load `keys` from `store` and put them all on one time axis starting at 0.
    pub fn build(
        store: &SeriesStore,
        alignment: &AlignmentConfig,
        keys: &[MetricKey],
    ) -> Result<AlignedRun, ReportError> {
        let mut loaded: Vec<(MetricKey, RawSeries)> = Vec::with_capacity(keys.len());
        for key in keys {
            if loaded.iter().any(|(k, _)| k == key) {
                continue;
            }
            let raw = store.load(key)?;
            if raw.is_empty() {
                warn!("Series {key} is empty or missing in {}", store.data_dir().display());
            } else {
                debug!("Loaded {} samples of {key}", raw.len());
            }
            loaded.push((key.clone(), raw));
        }

        let anchors: Vec<&RawSeries> = loaded
            .iter()
            .filter(|(key, _)| alignment.is_anchor(key))
            .map(|(_, raw)| raw)
            .collect();
        let origin_ns = resolve_origin(&anchors)?;
        info!("Simulation origin resolved to {origin_ns} ns from {} anchors", anchors.len());

        let normalized: Vec<(MetricKey, TimeSeries)> = loaded
            .into_iter()
            .map(|(key, raw)| {
                let series = normalize(&raw, origin_ns);
                (key, series)
            })
            .collect();

        let horizon_s = resolve_horizon(
            &normalized.iter().map(|(_, s)| s).collect::<Vec<_>>(),
            alignment.max_simulation_length,
        )
        .ok_or(ReportError::EmptyAnchors)?;
        info!("Simulation horizon resolved to {horizon_s:.3} s");

        let rescaler = HorizonRescaler::new(horizon_s);
        let rate = RateDeriver::new(alignment.dump_interval);
        let smoothing = MovingAverageProcessor::new(alignment.smoothing_window);

        let series = normalized
            .into_iter()
            .map(|(key, mut series)| {
                if alignment.is_rescaled(&key) {
                    series = rescaler.process(&series);
                }
                if alignment.is_rate(&key) {
                    series = rate.process(&series);
                    if alignment.smoothing_window > 1 {
                        series = smoothing.process(&series);
                    }
                }
                debug!("Aligned {key} as {} series, {} points", series.kind.name(), series.len());
                AlignedSeries { key, series }
            })
            .collect();

        Ok(AlignedRun {
            origin_ns,
            horizon_s,
            dump_interval_s: alignment.dump_interval,
            series,
        })
    }
}
