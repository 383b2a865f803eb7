use bloat_report::metric_key::MetricKey;
use std::fs;
use std::path::Path;

pub const SECOND_NS: i64 = 1_000_000_000;

/// Writes `(seconds_from_start, value)` rows as the harness does, starting at `start_ns`.
pub fn write_series(dir: &Path, key: &MetricKey, start_ns: i64, rows: &[(f64, f64)]) {
    let content: String = rows
        .iter()
        .map(|&(t, v)| {
            let timestamp = start_ns + (t * SECOND_NS as f64).round() as i64;
            format!("{timestamp},{v:.6}\n")
        })
        .collect();
    fs::write(dir.join(key.file_name()), content).expect("Cannot write series file");
}

/// One sample per dump interval over `[0, end]`.
pub fn counter_rows(end: f64, dump_interval: f64, per_dump: f64) -> Vec<(f64, f64)> {
    let steps = (end / dump_interval).round() as usize;
    (0..=steps)
        .map(|i| (i as f64 * dump_interval, per_dump))
        .collect()
}
