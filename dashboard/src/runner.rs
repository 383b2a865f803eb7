use crate::analytics::run_builder::AlignedRunBuilder;
use crate::analytics::series_store::{load_series, SeriesStore};
use crate::analytics::time_series::origin::{normalize, resolve_origin};
use crate::configs::dashboard::{DashboardConfig, OutputConfig};
use crate::error::ReportError;
use crate::plot::{plot_dashboard, plot_series, DashboardPlot};
use bloat_report::metric_key::MetricKey;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct DashboardRunner {
    data_dir: PathBuf,
    config: DashboardConfig,
}

impl DashboardRunner {
    pub fn new(data_dir: impl Into<PathBuf>, config: DashboardConfig) -> Self {
        Self {
            data_dir: data_dir.into(),
            config,
        }
    }

    /// Align the run found in the data directory and render the selected
    /// dashboard. Returns the path of the written chart.
    pub fn run(&self) -> Result<PathBuf, ReportError> {
        let kind = self.config.dashboard.kind;
        let panels = self.config.dashboard.panels()?;
        let layout = self.config.run.layout();
        let keys: Vec<MetricKey> = panels
            .iter()
            .flat_map(|panel| panel.metrics(&layout))
            .collect();

        info!(
            "Rendering {kind} dashboard from {} ({} panels, {} series)",
            self.data_dir.display(),
            panels.len(),
            keys.len()
        );

        let store = SeriesStore::new(&self.data_dir);
        let run = AlignedRunBuilder::build(&store, &self.config.alignment, &keys)?;

        info!("Printing summary");
        run.print_summary();

        let output_dir = Path::new(&self.config.output.dir);
        if self.config.output.dump_json {
            let path = run
                .dump_to_json(output_dir)
                .map_err(|source| ReportError::CannotWriteOutput {
                    path: output_dir.join("aligned.json"),
                    source,
                })?;
            info!("Aligned run written to: {}", path.display());
        }

        let plot = DashboardPlot {
            kind,
            panels: &panels,
            layout: &layout,
            remark: self.config.dashboard.remark.as_deref(),
        };
        plot_dashboard(&run, &plot, &self.config.output)
    }
}

/// Plots a single metric file on its own time axis, starting at its first sample.
pub fn plot_file(path: &Path, output: &OutputConfig) -> Result<PathBuf, ReportError> {
    let raw = load_series(path)?;
    if raw.is_empty() {
        return Err(ReportError::EmptySeries(path.to_path_buf()));
    }
    let origin_ns = resolve_origin(&[&raw])?;
    let series = normalize(&raw, origin_ns);
    info!("Loaded {} samples from {}", series.len(), path.display());

    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    plot_series(&name, &series, output)
}
