use colored::{Color, ColoredString, Colorize};
use tracing::info;

use crate::aligned_run::{AlignedRun, AlignedSeries};

impl AlignedRun {
    pub fn print_summary(&self) {
        println!();
        let axis_print = format!(
            "Run: origin {} ns, horizon {:.2} s, dump interval {} s, {} series ({} empty), {} samples\n",
            self.origin_ns,
            self.horizon_s,
            self.dump_interval_s,
            self.series.len(),
            self.series.len() - self.non_empty_series(),
            self.total_samples(),
        )
        .blue();

        info!("{}", axis_print);

        self.series
            .iter()
            .for_each(|s| info!("{}", s.formatted_string()));
    }
}

impl AlignedSeries {
    pub fn formatted_string(&self) -> ColoredString {
        if self.series.is_empty() {
            return format!("{}: absent", self.key).color(Color::Yellow);
        }

        let first = self.series.first_time().unwrap_or_default();
        let last = self.series.last_time().unwrap_or_default();
        let mean = self.series.mean().unwrap_or_default();
        let max = self.series.max_value().unwrap_or_default();

        format!(
            "{}: {} samples, {}, span {:.2}..{:.2} s, mean {:.2}, max {:.2}",
            self.key,
            self.series.len(),
            self.series.kind.name(),
            first,
            last,
            mean,
            max,
        )
        .color(Color::Green)
    }
}
