use crate::aligned_run::AlignedRun;
use human_repr::HumanCount;

impl AlignedRun {
    pub fn subtext(&self) -> String {
        let axis = self.format_axis();
        let samples = self.format_samples();
        format!("{axis}\n{samples}")
    }

    fn format_axis(&self) -> String {
        format!(
            "Origin: {} ns  •  Horizon: {:.2} s  •  Dump interval: {} s",
            self.origin_ns, self.horizon_s, self.dump_interval_s
        )
    }

    fn format_samples(&self) -> String {
        let empty = self.series.len() - self.non_empty_series();
        let mut text = format!(
            "{} Series  •  {} Samples",
            self.non_empty_series(),
            (self.total_samples() as u64).human_count_bare()
        );
        if empty > 0 {
            text.push_str(&format!("  •  {empty} Absent"));
        }
        text
    }
}
