use crate::configs::dashboard::{AlignmentConfig, OutputConfig, RunConfig};

const DEFAULT_DUMP_INTERVAL: f64 = 0.5;
const DEFAULT_MAX_SIMULATION_LENGTH: f64 = 300.0;
const DEFAULT_OUTPUT_DIR: &str = "reports";

const DEFAULT_ANCHORS: [&str; 10] = [
    "client.rps",
    "client.rq.total.count",
    "client.rq.latency",
    "client.rq.timeout",
    "client.rq.503",
    "client.rq.success.count",
    "client.rq.failure.count",
    "server.processed.success",
    "server.rq_count",
    "server.queue.size",
];

const DEFAULT_RATES: [&str; 7] = [
    "client.rq.count",
    "client.rq.total.count",
    "client.rq.retry.count",
    "client.rq.success.count",
    "client.rq.failure.count",
    "server.processed.success",
    "server.processed.throttled",
];

/// Event series (latency, timeouts, 503s) are left out so they keep their
/// recorded cadence.
const DEFAULT_RESCALED: [&str; 13] = [
    "client.rps",
    "client.rq.count",
    "client.rq.total.count",
    "client.rq.retry.count",
    "client.rq.success.count",
    "client.rq.failure.count",
    "client.rq.success_rate",
    "client.active_rq",
    "server.processed.success",
    "server.processed.throttled",
    "server.expected_latency",
    "server.queue.size",
    "server.rq_count",
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for AlignmentConfig {
    fn default() -> AlignmentConfig {
        AlignmentConfig {
            dump_interval: DEFAULT_DUMP_INTERVAL,
            max_simulation_length: DEFAULT_MAX_SIMULATION_LENGTH,
            smoothing_window: 1,
            anchors: owned(&DEFAULT_ANCHORS),
            rescaled: owned(&DEFAULT_RESCALED),
            rates: owned(&DEFAULT_RATES),
        }
    }
}

impl Default for RunConfig {
    fn default() -> RunConfig {
        RunConfig {
            tenants: vec![0],
            endpoints: (9002..9007).collect(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> OutputConfig {
        OutputConfig {
            dir: DEFAULT_OUTPUT_DIR.to_owned(),
            width: 1600,
            panel_height: 320,
            dark: true,
            dump_json: false,
        }
    }
}
