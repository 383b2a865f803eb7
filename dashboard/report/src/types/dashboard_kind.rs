use crate::panel_kind::PanelKind;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
    Default,
    PartialOrd,
    Ord,
)]
pub enum DashboardKind {
    #[default]
    #[display("Priority")]
    #[serde(rename = "priority")]
    Priority,
    #[display("Client")]
    #[serde(rename = "client")]
    Client,
    #[display("Load Balancer")]
    #[serde(rename = "load_balancer")]
    LoadBalancer,
    #[display("Custom")]
    #[serde(rename = "custom")]
    Custom,
}

impl DashboardKind {
    /// Name used for output files.
    pub fn name(&self) -> &'static str {
        match self {
            DashboardKind::Priority => "priority",
            DashboardKind::Client => "client",
            DashboardKind::LoadBalancer => "load_balancer",
            DashboardKind::Custom => "custom",
        }
    }

    /// Preset panel list. `Custom` has none, its panels come from configuration.
    pub fn panels(&self) -> Vec<PanelKind> {
        match self {
            DashboardKind::Priority => vec![
                PanelKind::AdmittedStacked,
                PanelKind::Admitted,
                PanelKind::Sent,
            ],
            DashboardKind::Client => vec![
                PanelKind::RequestRate,
                PanelKind::Latency,
                PanelKind::Errors,
                PanelKind::Goodput,
                PanelKind::SuccessRate,
                PanelKind::ActiveRequests,
                PanelKind::Throttled,
                PanelKind::QueueSize,
            ],
            DashboardKind::LoadBalancer => {
                vec![PanelKind::EndpointRequests, PanelKind::EndpointQueues]
            }
            DashboardKind::Custom => Vec::new(),
        }
    }
}

impl FromStr for DashboardKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "priority" => Ok(DashboardKind::Priority),
            "client" => Ok(DashboardKind::Client),
            "load_balancer" | "lb" => Ok(DashboardKind::LoadBalancer),
            "custom" => Ok(DashboardKind::Custom),
            other => Err(format!(
                "unknown dashboard \"{other}\", supported: priority, client, load_balancer, custom"
            )),
        }
    }
}
