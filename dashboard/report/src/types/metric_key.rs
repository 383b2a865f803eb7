use super::actor_role::ActorRole;
use super::priority_class::PriorityClass;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const FILE_EXTENSION: &str = "csv";

/// Which actor instance a metric belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorIndex {
    /// Tenant id of a client/server pair, written as the last name segment.
    Tenant(u32),
    /// Port of a load balanced server endpoint, written right after the role.
    Endpoint(u32),
}

/// Identifies one metric file of a run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MetricKey {
    pub role: ActorRole,
    pub metric: String,
    pub index: Option<ActorIndex>,
    pub priority: Option<PriorityClass>,
}

impl MetricKey {
    pub fn new(role: ActorRole, metric: &str) -> Self {
        Self {
            role,
            metric: metric.to_owned(),
            index: None,
            priority: None,
        }
    }

    pub fn client(metric: &str) -> Self {
        Self::new(ActorRole::Client, metric)
    }

    pub fn server(metric: &str) -> Self {
        Self::new(ActorRole::Server, metric)
    }

    pub fn tenant(mut self, id: u32) -> Self {
        self.index = Some(ActorIndex::Tenant(id));
        self
    }

    pub fn endpoint(mut self, port: u32) -> Self {
        self.index = Some(ActorIndex::Endpoint(port));
        self
    }

    pub fn priority(mut self, priority: PriorityClass) -> Self {
        self.priority = Some(priority);
        self
    }

    /// `role.metric`, without index or priority. Configuration refers to metrics by family.
    pub fn family(&self) -> String {
        format!("{}.{}", self.role.prefix(), self.metric)
    }

    /// Name of the file the harness writes for this metric.
    ///
    /// Server priority metrics carry the class right after the role
    /// (`server.high.processed.success.0`), client priority metrics after the
    /// first metric segment (`client.rq.high.count.0`).
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.stem(), FILE_EXTENSION)
    }

    fn stem(&self) -> String {
        let mut segments: Vec<String> = vec![self.role.prefix().to_owned()];
        if let Some(ActorIndex::Endpoint(port)) = self.index {
            segments.push(port.to_string());
        }

        let mut metric_segments = self.metric.split('.');
        match (self.role, self.priority) {
            (_, None) => segments.extend(metric_segments.map(str::to_owned)),
            (ActorRole::Server, Some(priority)) => {
                segments.push(priority.to_string());
                segments.extend(metric_segments.map(str::to_owned));
            }
            (ActorRole::Client, Some(priority)) => {
                if let Some(first) = metric_segments.next() {
                    segments.push(first.to_owned());
                }
                segments.push(priority.to_string());
                segments.extend(metric_segments.map(str::to_owned));
            }
        }

        if let Some(ActorIndex::Tenant(id)) = self.index {
            segments.push(id.to_string());
        }
        segments.join(".")
    }
}

impl Display for MetricKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.stem())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_suffix_tenant_index() {
        let key = MetricKey::client("rq.latency").tenant(0);
        assert_eq!(key.file_name(), "client.rq.latency.0.csv");
        assert_eq!(key.family(), "client.rq.latency");
    }

    #[test]
    fn should_place_endpoint_after_role() {
        let key = MetricKey::server("queued_rq").endpoint(9002);
        assert_eq!(key.file_name(), "server.9002.queued_rq.csv");
        assert_eq!(key.family(), "server.queued_rq");
        assert_eq!(key.to_string(), "server.9002.queued_rq");
    }

    #[test]
    fn should_place_server_priority_after_role() {
        let key = MetricKey::server("processed.success")
            .priority(PriorityClass::High)
            .tenant(1);
        assert_eq!(key.file_name(), "server.high.processed.success.1.csv");
        assert_eq!(key.family(), "server.processed.success");
    }

    #[test]
    fn should_place_client_priority_inside_metric() {
        let key = MetricKey::client("rq.count")
            .priority(PriorityClass::Low)
            .tenant(0);
        assert_eq!(key.file_name(), "client.rq.low.count.0.csv");
    }

    #[test]
    fn should_build_name_without_index() {
        assert_eq!(MetricKey::client("rps").file_name(), "client.rps.csv");
    }

    #[test]
    fn should_distinguish_tenants_and_priorities() {
        let a = MetricKey::client("rq.count").priority(PriorityClass::High).tenant(0);
        let b = MetricKey::client("rq.count").priority(PriorityClass::High).tenant(1);
        let c = MetricKey::client("rq.count").priority(PriorityClass::Low).tenant(0);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.family(), c.family());
    }
}
