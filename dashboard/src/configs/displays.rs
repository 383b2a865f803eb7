use crate::configs::dashboard::{
    AlignmentConfig, DashboardConfig, OutputConfig, RunConfig, SelectionConfig,
};
use std::fmt::{Display, Formatter};

impl Display for DashboardConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ alignment: {}, run: {}, dashboard: {}, output: {} }}",
            self.alignment, self.run, self.dashboard, self.output
        )
    }
}

impl Display for AlignmentConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ dump_interval: {} s, max_simulation_length: {} s, smoothing_window: {}, anchors: {:?}, rescaled: {:?}, rates: {:?} }}",
            self.dump_interval,
            self.max_simulation_length,
            self.smoothing_window,
            self.anchors,
            self.rescaled,
            self.rates
        )
    }
}

impl Display for RunConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ tenants: {:?}, endpoints: {:?} }}",
            self.tenants, self.endpoints
        )
    }
}

impl Display for SelectionConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ kind: {}, panels: {:?}, remark: {} }}",
            self.kind,
            self.panels,
            self.remark.as_deref().unwrap_or("none")
        )
    }
}

impl Display for OutputConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ dir: {}, width: {}, panel_height: {}, dark: {}, dump_json: {} }}",
            self.dir, self.width, self.panel_height, self.dark, self.dump_json
        )
    }
}
