mod plotting;
mod prints;
mod types;

pub use plotting::chart::{DashboardChart, PanelRegion};
pub use plotting::dashboard::{create_dashboard_chart, create_series_chart};
pub use plotting::palette;
pub use plotting::panel_kind;
pub use plotting::panels::{render_lines, render_stacked, PanelRenderer};
pub use types::*;
