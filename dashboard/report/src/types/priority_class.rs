use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

/// Request priority classes used by the harness admission control.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, Display,
)]
pub enum PriorityClass {
    #[display("high")]
    #[serde(rename = "high")]
    High,
    #[display("default")]
    #[serde(rename = "default")]
    Default,
    #[display("low")]
    #[serde(rename = "low")]
    Low,
}

impl PriorityClass {
    pub const ALL: [PriorityClass; 3] =
        [PriorityClass::High, PriorityClass::Default, PriorityClass::Low];

    /// Legend label, identical in every panel.
    pub fn label(&self) -> &'static str {
        match self {
            PriorityClass::High => "high_pri",
            PriorityClass::Default => "default_pri",
            PriorityClass::Low => "low_pri",
        }
    }

    /// Fixed color so a class keeps its color across all panels of a dashboard.
    pub fn color(&self) -> &'static str {
        match self {
            PriorityClass::High => "orange",
            PriorityClass::Default => "blue",
            PriorityClass::Low => "gray",
        }
    }
}
