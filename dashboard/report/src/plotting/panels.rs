use super::chart::{DashboardChart, PanelRegion};
use super::panel_kind::{EventMarker, PanelKind, PanelLine, SeriesStyle};
use crate::aligned_run::AlignedRun;
use charming::element::Symbol;
use tracing::debug;

/// Draws the lines of one panel into its region.
pub type PanelRenderer =
    fn(DashboardChart, &PanelRegion, &AlignedRun, &[PanelLine]) -> DashboardChart;

impl PanelKind {
    pub fn renderer(&self) -> PanelRenderer {
        match self {
            PanelKind::AdmittedStacked => render_stacked,
            _ => render_lines,
        }
    }
}

impl EventMarker {
    fn symbol(&self) -> Symbol {
        match self {
            EventMarker::Circle => Symbol::Circle,
            EventMarker::Triangle => Symbol::Triangle,
            EventMarker::Diamond => Symbol::Diamond,
        }
    }
}

/// Every line on its own recorded times; absent or empty series are skipped.
pub fn render_lines(
    mut chart: DashboardChart,
    region: &PanelRegion,
    run: &AlignedRun,
    lines: &[PanelLine],
) -> DashboardChart {
    for line in lines {
        let Some(series) = run.non_empty(&line.key) else {
            debug!("Skipping empty series {} in panel {}", line.key, region.index);
            continue;
        };
        let points = series.as_charming_points();
        chart = match line.style {
            SeriesStyle::Events(marker) => chart.add_event_series(
                region,
                &line.label,
                points,
                marker.symbol(),
                line.color,
                line.opacity,
            ),
            SeriesStyle::Line | SeriesStyle::Stacked => {
                chart.add_time_series(region, &line.label, points, line.color, line.opacity)
            }
        };
    }
    chart
}

/// Stacks each group on the sample times of its first non-empty series.
/// Shorter series are padded with zeros, longer ones truncated.
pub fn render_stacked(
    mut chart: DashboardChart,
    region: &PanelRegion,
    run: &AlignedRun,
    lines: &[PanelLine],
) -> DashboardChart {
    let mut groups: Vec<&str> = Vec::new();
    for line in lines {
        if !groups.contains(&line.group.as_str()) {
            groups.push(&line.group);
        }
    }

    for group in groups {
        let members: Vec<&PanelLine> = lines.iter().filter(|l| l.group == group).collect();
        let Some(base_times) = members
            .iter()
            .find_map(|l| run.non_empty(&l.key))
            .map(|s| s.times())
        else {
            debug!("Skipping empty stack {group} in panel {}", region.index);
            continue;
        };

        for line in members {
            let Some(series) = run.non_empty(&line.key) else {
                continue;
            };
            let points = base_times
                .iter()
                .enumerate()
                .map(|(i, &time)| vec![time, series.points.get(i).map_or(0.0, |p| p.value)])
                .collect();
            chart = chart.add_stacked_series(region, &line.label, group, points, line.color);
        }
    }
    chart
}
