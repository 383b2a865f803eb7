use super::chart::{DashboardChart, PanelRegion};
use super::palette::actor_color;
use super::panel_kind::PanelKind;
use crate::aligned_run::AlignedRun;
use crate::dashboard_kind::DashboardKind;
use crate::run_layout::RunLayout;
use crate::time_series::TimeSeries;
use charming::Chart;
use human_repr::HumanCount;
use tracing::debug;

/// Compose one chart from `panels`, in order, each in its own region.
/// All panels share the X axis `[0, horizon]`.
pub fn create_dashboard_chart(
    kind: DashboardKind,
    panels: &[PanelKind],
    run: &AlignedRun,
    layout: &RunLayout,
    remark: Option<&str>,
    dark: bool,
) -> Chart {
    let title = run.title(kind, remark);
    let subtext = run.subtext();
    let regions = PanelRegion::stacked(panels.len(), true);

    let mut chart = DashboardChart::new(&title, &subtext, dark, false);
    for (panel, region) in panels.iter().zip(regions.iter()) {
        debug!("Rendering panel {} at region {}", panel.name(), region.index);
        let y_label = format!("{} ({})", panel, panel.y_axis_label());
        let lines = panel.lines(layout);
        chart = chart.with_panel(region, &y_label, run.horizon_s);
        chart = (panel.renderer())(chart, region, run, &lines);
    }
    chart.inner
}

/// A single panel chart of one metric file, time axis from 0 to its last sample.
pub fn create_series_chart(name: &str, series: &TimeSeries, dark: bool) -> Chart {
    let end = series.last_time().unwrap_or_default().max(0.0);
    let subtext = format!(
        "{} Samples  •  Span: {:.2} s",
        (series.len() as u64).human_count_bare(),
        end
    );
    let regions = PanelRegion::stacked(1, true);

    let mut chart = DashboardChart::new(name, &subtext, dark, false);
    for region in &regions {
        chart = chart
            .with_panel(region, "Value", end)
            .add_time_series(region, name, series.as_charming_points(), actor_color(0), 1.0);
    }
    chart.inner
}
