mod common;

use crate::common::{counter_rows, write_series, SECOND_NS};
use bloat_report::aligned_run::AlignedRun;
use bloat_report::dashboard_kind::DashboardKind;
use bloat_report::metric_key::MetricKey;
use bloat_report::priority_class::PriorityClass;
use bloat_report::time_series::TimeSeriesKind;
use dashboard::configs::dashboard::DashboardConfig;
use dashboard::error::ReportError;
use dashboard::runner::{self, DashboardRunner};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const START_NS: i64 = 1_700_000_000 * SECOND_NS;

fn config(kind: DashboardKind, output_dir: &Path) -> DashboardConfig {
    let mut config = DashboardConfig::default();
    config.dashboard.kind = kind;
    config.output.dir = output_dir.to_string_lossy().into_owned();
    config.output.dump_json = true;
    config.alignment.max_simulation_length = 30.0;
    config
}

fn read_aligned(output_dir: &Path) -> AlignedRun {
    let json = fs::read_to_string(output_dir.join("aligned.json")).unwrap();
    serde_json::from_str(&json).unwrap()
}

fn priority_run(data_dir: &Path) {
    for priority in [PriorityClass::High, PriorityClass::Default] {
        let admitted = MetricKey::server("processed.success")
            .priority(priority)
            .tenant(0);
        // The server keeps dumping a few seconds after the nominal end.
        write_series(data_dir, &admitted, START_NS, &counter_rows(27.0, 0.5, 2.0));
        let sent = MetricKey::client("rq.count").priority(priority).tenant(0);
        write_series(data_dir, &sent, START_NS + SECOND_NS, &counter_rows(26.0, 0.5, 3.0));
    }
}

#[test]
fn should_render_priority_dashboard() {
    let data = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    priority_run(data.path());

    let path = DashboardRunner::new(data.path(), config(DashboardKind::Priority, output.path()))
        .run()
        .unwrap();

    assert_eq!(path, output.path().join("priority.html"));
    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("echarts"));
    assert!(html.contains("Priority Dashboard"));

    let run = read_aligned(output.path());
    assert_eq!(run.origin_ns, START_NS);
    assert_eq!(run.horizon_s, 27.0);

    let admitted = run
        .get(
            &MetricKey::server("processed.success")
                .priority(PriorityClass::High)
                .tenant(0),
        )
        .unwrap();
    assert_eq!(admitted.points.first().unwrap().time_s, 0.0);
    assert_eq!(admitted.last_time(), Some(27.0));
    assert!(admitted.values().iter().all(|&v| v == 4.0));

    // Sent series start one second late but still end on the horizon.
    let sent = run
        .get(
            &MetricKey::client("rq.count")
                .priority(PriorityClass::Default)
                .tenant(0),
        )
        .unwrap();
    assert_eq!(sent.last_time(), Some(27.0));
    assert!(sent.values().iter().all(|&v| v == 6.0));

    // Low priority traffic was not recorded.
    assert!(run
        .get(
            &MetricKey::server("processed.success")
                .priority(PriorityClass::Low)
                .tenant(0)
        )
        .unwrap()
        .is_empty());
}

#[test]
fn should_cap_horizon_and_keep_event_times() {
    let data = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let rps = MetricKey::client("rps").tenant(0);
    let latency = MetricKey::client("rq.latency").tenant(0);
    let queue = MetricKey::server("queue.size").tenant(0);
    write_series(data.path(), &rps, START_NS, &counter_rows(31.0, 0.5, 100.0));
    write_series(
        data.path(),
        &latency,
        START_NS,
        &[(0.25, 0.01), (12.5, 0.2), (28.4, 0.05)],
    );
    write_series(data.path(), &queue, START_NS, &counter_rows(29.9, 0.1, 3.0));

    DashboardRunner::new(data.path(), config(DashboardKind::Client, output.path()))
        .run()
        .unwrap();

    let run = read_aligned(output.path());
    assert_eq!(run.horizon_s, 30.0);
    assert_eq!(run.get(&rps).unwrap().last_time(), Some(30.0));
    assert_eq!(run.get(&queue).unwrap().last_time(), Some(30.0));

    let latency = run.get(&latency).unwrap();
    assert_eq!(latency.kind, TimeSeriesKind::Normalized);
    assert_eq!(latency.last_time(), Some(28.4));
    assert!(output.path().join("client.html").is_file());
}

#[test]
fn should_render_load_balancer_dashboard() {
    let data = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    for port in [9002, 9003] {
        let requests = MetricKey::server("rq_count").endpoint(port);
        write_series(data.path(), &requests, START_NS, &counter_rows(10.0, 0.5, 5.0));
    }

    let mut config = config(DashboardKind::LoadBalancer, output.path());
    config.run.tenants.clear();
    config.run.endpoints = vec![9002, 9003, 9004];
    let path = DashboardRunner::new(data.path(), config).run().unwrap();

    assert_eq!(path, output.path().join("load_balancer.html"));
    let run = read_aligned(output.path());
    assert_eq!(run.horizon_s, 10.0);
    assert_eq!(run.non_empty_series(), 2);
}

#[test]
fn should_fail_when_no_anchor_series_exist() {
    let data = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let result =
        DashboardRunner::new(data.path(), config(DashboardKind::Client, output.path())).run();

    assert!(matches!(result, Err(ReportError::EmptyAnchors)));
    assert!(!output.path().join("client.html").exists());
}

#[test]
fn should_fail_on_malformed_file_without_output() {
    let data = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    priority_run(data.path());
    let broken = MetricKey::client("rq.count")
        .priority(PriorityClass::Low)
        .tenant(0);
    fs::write(data.path().join(broken.file_name()), "100,1\n200,abc\n").unwrap();

    let result =
        DashboardRunner::new(data.path(), config(DashboardKind::Priority, output.path())).run();

    match result {
        Err(ReportError::Parse { path, line, .. }) => {
            assert_eq!(path, data.path().join("client.rq.low.count.0.csv"));
            assert_eq!(line, 2);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(!output.path().join("priority.html").exists());
}

#[test]
fn should_render_custom_panel_selection() {
    let data = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    priority_run(data.path());

    let mut config = config(DashboardKind::Custom, output.path());
    config.dashboard.panels = vec!["sent".to_owned()];
    config.dashboard.remark = Some("fifo".to_owned());
    let path = DashboardRunner::new(data.path(), config).run().unwrap();

    assert_eq!(path, output.path().join("custom.html"));
    let html = fs::read_to_string(path).unwrap();
    assert!(html.contains("Custom Dashboard (fifo)"));
}

#[test]
fn should_plot_single_metric_file() {
    let data = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let rps = MetricKey::client("rps").tenant(0);
    write_series(data.path(), &rps, START_NS, &[(0.0, 10.0), (0.5, 12.0), (1.0, 9.0)]);

    let config = config(DashboardKind::Client, output.path());
    let path = runner::plot_file(&data.path().join(rps.file_name()), &config.output).unwrap();

    assert_eq!(path, output.path().join("client.rps.0.html"));
    let html = fs::read_to_string(path).unwrap();
    assert!(html.contains("client.rps.0.csv"));
    assert!(html.contains("3 Samples"));
}

#[test]
fn should_fail_to_plot_missing_metric_file() {
    let data = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let missing = data.path().join("client.rq.timeout.0.csv");

    let config = config(DashboardKind::Client, output.path());
    let result = runner::plot_file(&missing, &config.output);

    assert!(matches!(result, Err(ReportError::EmptySeries(path)) if path == missing));
}
