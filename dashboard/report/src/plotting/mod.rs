pub mod chart;
pub mod dashboard;
pub mod palette;
pub mod panel_kind;
pub mod panels;
pub mod text;
