use crate::error::ReportError;
use bloat_report::dashboard_kind::DashboardKind;
use bloat_report::metric_key::MetricKey;
use bloat_report::panel_kind::PanelKind;
use bloat_report::run_layout::RunLayout;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub alignment: AlignmentConfig,
    pub run: RunConfig,
    pub dashboard: SelectionConfig,
    pub output: OutputConfig,
}

/// Time axis alignment. Metric lists hold families (`role.metric`).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct AlignmentConfig {
    /// Harness counter dump interval, seconds
    pub dump_interval: f64,
    /// Cap of the shared time axis, seconds
    pub max_simulation_length: f64,
    pub smoothing_window: usize,
    pub anchors: Vec<String>,
    pub rescaled: Vec<String>,
    pub rates: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub tenants: Vec<u32>,
    pub endpoints: Vec<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SelectionConfig {
    pub kind: DashboardKind,
    /// Panels of the `custom` dashboard, in drawing order
    pub panels: Vec<String>,
    pub remark: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: String,
    pub width: u64,
    pub panel_height: u64,
    pub dark: bool,
    pub dump_json: bool,
}

impl AlignmentConfig {
    pub fn is_anchor(&self, key: &MetricKey) -> bool {
        self.anchors.contains(&key.family())
    }

    pub fn is_rescaled(&self, key: &MetricKey) -> bool {
        self.rescaled.contains(&key.family())
    }

    pub fn is_rate(&self, key: &MetricKey) -> bool {
        self.rates.contains(&key.family())
    }
}

impl RunConfig {
    pub fn layout(&self) -> RunLayout {
        RunLayout::new(self.tenants.clone(), self.endpoints.clone())
    }
}

impl SelectionConfig {
    /// Preset panels of the selected dashboard, or the configured list for `custom`.
    pub fn panels(&self) -> Result<Vec<PanelKind>, ReportError> {
        if self.kind != DashboardKind::Custom {
            return Ok(self.kind.panels());
        }
        self.panels
            .iter()
            .map(|name| PanelKind::from_str(name).map_err(ReportError::InvalidConfiguration))
            .collect()
    }
}

impl OutputConfig {
    pub fn chart_height(&self, panels: usize) -> u64 {
        self.panel_height * panels.max(1) as u64 + 200
    }
}
