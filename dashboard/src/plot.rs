use crate::configs::dashboard::OutputConfig;
use crate::error::ReportError;
use bloat_report::aligned_run::AlignedRun;
use bloat_report::dashboard_kind::DashboardKind;
use bloat_report::panel_kind::PanelKind;
use bloat_report::run_layout::RunLayout;
use bloat_report::time_series::TimeSeries;
use charming::theme::Theme;
use charming::{Chart, HtmlRenderer};
use human_repr::HumanCount;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

pub struct DashboardPlot<'a> {
    pub kind: DashboardKind,
    pub panels: &'a [PanelKind],
    pub layout: &'a RunLayout,
    pub remark: Option<&'a str>,
}

/// Renders the dashboard of `run` into `<output.dir>/<dashboard>.html`.
pub fn plot_dashboard(
    run: &AlignedRun,
    plot: &DashboardPlot<'_>,
    output: &OutputConfig,
) -> Result<PathBuf, ReportError> {
    let data_processing_start = Instant::now();
    let chart = bloat_report::create_dashboard_chart(
        plot.kind,
        plot.panels,
        run,
        plot.layout,
        plot.remark,
        output.dark,
    );
    let data_processing_time = data_processing_start.elapsed();

    let chart_render_start = Instant::now();
    let chart_path = save_chart(
        &chart,
        plot.kind.name(),
        Path::new(&output.dir),
        output.width,
        output.chart_height(plot.panels.len()),
        output.dark,
    )?;
    let chart_render_time = chart_render_start.elapsed();

    let chart_size = file_size(&chart_path)?;

    info!(
        "Generated {} dashboard at: {} ({} panels, {} samples, size: {}, data processing: {:.2?}, chart render: {:.2?})",
        plot.kind.name(),
        chart_path.display(),
        plot.panels.len(),
        run.total_samples(),
        chart_size.human_count_bytes(),
        data_processing_time,
        chart_render_time
    );
    Ok(chart_path)
}

/// Renders one metric file as `<output.dir>/<file_stem>.html`.
pub fn plot_series(
    name: &str,
    series: &TimeSeries,
    output: &OutputConfig,
) -> Result<PathBuf, ReportError> {
    let chart_render_start = Instant::now();
    let chart = bloat_report::create_series_chart(name, series, output.dark);
    let file_name = Path::new(name)
        .file_stem()
        .map_or_else(|| name.to_owned(), |stem| stem.to_string_lossy().into_owned());
    let chart_path = save_chart(
        &chart,
        &file_name,
        Path::new(&output.dir),
        output.width,
        output.chart_height(1),
        output.dark,
    )?;
    let chart_render_time = chart_render_start.elapsed();

    info!(
        "Generated {} plot at: {} ({} samples, size: {}, chart render: {:.2?})",
        name,
        chart_path.display(),
        series.len(),
        file_size(&chart_path)?.human_count_bytes(),
        chart_render_time
    );
    Ok(chart_path)
}

fn file_size(path: &Path) -> Result<u64, ReportError> {
    std::fs::metadata(path)
        .map(|metadata| metadata.len())
        .map_err(|source| ReportError::CannotReadFile {
            path: path.to_path_buf(),
            source,
        })
}

fn save_chart(
    chart: &Chart,
    file_name: &str,
    output_directory: &Path,
    width: u64,
    height: u64,
    dark: bool,
) -> Result<PathBuf, ReportError> {
    std::fs::create_dir_all(output_directory).map_err(|source| ReportError::CannotWriteOutput {
        path: output_directory.to_path_buf(),
        source,
    })?;
    let full_output_path = output_directory.join(format!("{file_name}.html"));

    let mut renderer = HtmlRenderer::new(file_name, width, height);
    if dark {
        renderer = renderer.theme(Theme::Dark);
    }
    renderer
        .save(chart, &full_output_path)
        .map_err(|e| ReportError::CannotRenderChart(format!("{e:?}")))?;
    Ok(full_output_path)
}
