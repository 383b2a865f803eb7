use super::palette::actor_color;
use crate::metric_key::MetricKey;
use crate::priority_class::PriorityClass;
use crate::run_layout::RunLayout;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One chart panel of a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    #[display("Admitted (stackplot)")]
    AdmittedStacked,
    #[display("Admitted (line plot)")]
    Admitted,
    #[display("Sent")]
    Sent,
    #[display("Request Rate")]
    RequestRate,
    #[display("Latency")]
    Latency,
    #[display("Errors")]
    Errors,
    #[display("Goodput")]
    Goodput,
    #[display("Success Rate")]
    SuccessRate,
    #[display("Active Requests")]
    ActiveRequests,
    #[display("Throttled")]
    Throttled,
    #[display("Queue Size")]
    QueueSize,
    #[display("Endpoint Requests")]
    EndpointRequests,
    #[display("Endpoint Queues")]
    EndpointQueues,
}

/// How a series is drawn inside its panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    Line,
    /// Area stacked with the other stacked series of the same tenant
    Stacked,
    /// Discrete events, drawn as points at their recorded times
    Events(EventMarker),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventMarker {
    Circle,
    Triangle,
    Diamond,
}

/// A series a panel draws, with its legend label and color.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLine {
    pub key: MetricKey,
    pub label: String,
    pub color: &'static str,
    pub opacity: f64,
    pub style: SeriesStyle,
    /// Stack group for `SeriesStyle::Stacked`
    pub group: String,
}

impl PanelLine {
    fn new(key: MetricKey, label: String, color: &'static str, style: SeriesStyle) -> Self {
        Self {
            key,
            label,
            color,
            opacity: 1.0,
            style,
            group: String::new(),
        }
    }

    fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    fn group(mut self, group: String) -> Self {
        self.group = group;
        self
    }
}

impl PanelKind {
    pub const ALL: [PanelKind; 13] = [
        PanelKind::AdmittedStacked,
        PanelKind::Admitted,
        PanelKind::Sent,
        PanelKind::RequestRate,
        PanelKind::Latency,
        PanelKind::Errors,
        PanelKind::Goodput,
        PanelKind::SuccessRate,
        PanelKind::ActiveRequests,
        PanelKind::Throttled,
        PanelKind::QueueSize,
        PanelKind::EndpointRequests,
        PanelKind::EndpointQueues,
    ];

    /// Name used in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            PanelKind::AdmittedStacked => "admitted_stacked",
            PanelKind::Admitted => "admitted",
            PanelKind::Sent => "sent",
            PanelKind::RequestRate => "request_rate",
            PanelKind::Latency => "latency",
            PanelKind::Errors => "errors",
            PanelKind::Goodput => "goodput",
            PanelKind::SuccessRate => "success_rate",
            PanelKind::ActiveRequests => "active_requests",
            PanelKind::Throttled => "throttled",
            PanelKind::QueueSize => "queue_size",
            PanelKind::EndpointRequests => "endpoint_requests",
            PanelKind::EndpointQueues => "endpoint_queues",
        }
    }

    pub fn y_axis_label(&self) -> &'static str {
        match self {
            PanelKind::AdmittedStacked | PanelKind::Admitted | PanelKind::Sent => "rq/s",
            PanelKind::RequestRate | PanelKind::Goodput | PanelKind::Throttled => "rq/s",
            PanelKind::Latency => "s",
            PanelKind::Errors => "events",
            PanelKind::SuccessRate => "ratio",
            PanelKind::ActiveRequests => "requests",
            PanelKind::QueueSize | PanelKind::EndpointQueues => "queued",
            PanelKind::EndpointRequests => "requests",
        }
    }

    /// Series drawn by this panel for the actors of a run.
    pub fn lines(&self, layout: &RunLayout) -> Vec<PanelLine> {
        match self {
            PanelKind::AdmittedStacked => {
                priority_lines(layout, "processed.success", SeriesStyle::Stacked, true)
            }
            PanelKind::Admitted => {
                priority_lines(layout, "processed.success", SeriesStyle::Line, true)
            }
            PanelKind::Sent => priority_lines(layout, "rq.count", SeriesStyle::Line, false),
            PanelKind::Throttled => {
                priority_lines(layout, "processed.throttled", SeriesStyle::Line, true)
            }
            PanelKind::RequestRate => tenant_lines(
                layout,
                &[
                    (MetricKey::client("rps"), "target_rps", 0.5, SeriesStyle::Line),
                    (MetricKey::client("rq.total.count"), "sent", 1.0, SeriesStyle::Line),
                    (MetricKey::client("rq.retry.count"), "retries", 0.7, SeriesStyle::Line),
                ],
            ),
            PanelKind::Latency => tenant_lines(
                layout,
                &[
                    (
                        MetricKey::client("rq.latency"),
                        "latency",
                        0.6,
                        SeriesStyle::Events(EventMarker::Circle),
                    ),
                    (
                        MetricKey::server("expected_latency"),
                        "expected_latency",
                        1.0,
                        SeriesStyle::Line,
                    ),
                ],
            ),
            PanelKind::Errors => tenant_lines(
                layout,
                &[
                    (
                        MetricKey::client("rq.timeout"),
                        "timeouts",
                        1.0,
                        SeriesStyle::Events(EventMarker::Triangle),
                    ),
                    (
                        MetricKey::client("rq.503"),
                        "503s",
                        1.0,
                        SeriesStyle::Events(EventMarker::Diamond),
                    ),
                ],
            ),
            PanelKind::Goodput => tenant_lines(
                layout,
                &[
                    (MetricKey::client("rq.success.count"), "success", 1.0, SeriesStyle::Line),
                    (MetricKey::client("rq.failure.count"), "failure", 0.5, SeriesStyle::Line),
                ],
            ),
            PanelKind::SuccessRate => tenant_lines(
                layout,
                &[(MetricKey::client("rq.success_rate"), "success_rate", 1.0, SeriesStyle::Line)],
            ),
            PanelKind::ActiveRequests => tenant_lines(
                layout,
                &[(MetricKey::client("active_rq"), "active_rq", 1.0, SeriesStyle::Line)],
            ),
            PanelKind::QueueSize => tenant_lines(
                layout,
                &[(MetricKey::server("queue.size"), "queue_size", 1.0, SeriesStyle::Line)],
            ),
            PanelKind::EndpointRequests => endpoint_lines(layout, "rq_count"),
            PanelKind::EndpointQueues => endpoint_lines(layout, "queue.size"),
        }
    }

    pub fn metrics(&self, layout: &RunLayout) -> Vec<MetricKey> {
        self.lines(layout).into_iter().map(|line| line.key).collect()
    }
}

fn tenant_suffix(layout: &RunLayout, tenant: u32) -> String {
    if layout.tenants.len() > 1 {
        format!(" (tenant_{tenant})")
    } else {
        String::new()
    }
}

fn priority_lines(
    layout: &RunLayout,
    metric: &str,
    style: SeriesStyle,
    server: bool,
) -> Vec<PanelLine> {
    let mut lines = Vec::new();
    for &tenant in &layout.tenants {
        for priority in PriorityClass::ALL {
            let key = if server {
                MetricKey::server(metric)
            } else {
                MetricKey::client(metric)
            }
            .priority(priority)
            .tenant(tenant);
            let label = format!("{}{}", priority.label(), tenant_suffix(layout, tenant));
            lines.push(
                PanelLine::new(key, label, priority.color(), style)
                    .group(format!("tenant_{tenant}")),
            );
        }
    }
    lines
}

fn tenant_lines(
    layout: &RunLayout,
    metrics: &[(MetricKey, &str, f64, SeriesStyle)],
) -> Vec<PanelLine> {
    let mut lines = Vec::new();
    for (position, &tenant) in layout.tenants.iter().enumerate() {
        for (key, label, opacity, style) in metrics {
            let label = format!("{label}{}", tenant_suffix(layout, tenant));
            lines.push(
                PanelLine::new(key.clone().tenant(tenant), label, actor_color(position), *style)
                    .opacity(*opacity),
            );
        }
    }
    lines
}

fn endpoint_lines(layout: &RunLayout, metric: &str) -> Vec<PanelLine> {
    layout
        .endpoints
        .iter()
        .enumerate()
        .map(|(position, &port)| {
            let key = MetricKey::server(metric).endpoint(port);
            let label = format!("endpoint_{port}");
            PanelLine::new(key, label, actor_color(position), SeriesStyle::Line)
        })
        .collect()
}

impl FromStr for PanelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PanelKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                let supported = PanelKind::ALL.map(|kind| kind.name()).join(", ");
                format!("unknown panel \"{s}\", supported: {supported}")
            })
    }
}
