use crate::configs::dashboard::DashboardConfig;
use bloat_report::dashboard_kind::DashboardKind;
use clap::Parser;
use tracing::info;

const DEFAULT_DATA_DIR: &str = "data";

#[derive(Parser, Debug)]
#[command(author, version, about = "Bufferbloater run dashboard generator", long_about = None)]
pub struct DashboardArgs {
    /// Directory holding the metric files of one run
    #[arg(default_value_t = DEFAULT_DATA_DIR.to_owned())]
    pub data_dir: String,

    /// Dashboard to render, overrides the configured one
    #[arg(long, short = 'd', value_parser = parse_dashboard_kind)]
    pub dashboard: Option<DashboardKind>,

    /// Configuration file path, falls back to BLOAT_CONFIG_PATH and then configs/dashboard.toml
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// Output directory for the rendered dashboard
    #[arg(long, short = 'o')]
    pub output_dir: Option<String>,

    /// Additional remark shown in the dashboard title (e.g. lifo-queue)
    #[arg(long)]
    pub remark: Option<String>,

    /// Plot a single metric file instead of a dashboard
    #[arg(long, short = 'f', conflicts_with = "dashboard")]
    pub file: Option<String>,

    /// Also write the aligned run as aligned.json next to the dashboard
    #[arg(long, default_value_t = false)]
    pub dump_json: bool,
}

fn parse_dashboard_kind(value: &str) -> Result<DashboardKind, String> {
    value.parse()
}

impl DashboardArgs {
    /// Command line values take precedence over the configuration file.
    pub fn apply_to(&self, config: &mut DashboardConfig) {
        if let Some(kind) = self.dashboard {
            info!("Dashboard overridden from command line: {kind}");
            config.dashboard.kind = kind;
        }
        if let Some(output_dir) = &self.output_dir {
            config.output.dir = output_dir.clone();
        }
        if let Some(remark) = &self.remark {
            config.dashboard.remark = Some(remark.clone());
        }
        if self.dump_json {
            config.output.dump_json = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::validators::Validatable;

    #[test]
    fn should_default_data_dir() {
        let args = DashboardArgs::parse_from(["bloat-dashboard"]);
        assert_eq!(args.data_dir, "data");
        assert!(args.dashboard.is_none());
        assert!(!args.dump_json);
    }

    #[test]
    fn should_override_config_from_arguments() {
        let args = DashboardArgs::parse_from([
            "bloat-dashboard",
            "runs/lifo",
            "-d",
            "lb",
            "-o",
            "out",
            "--remark",
            "lifo",
            "--dump-json",
        ]);
        let mut config = DashboardConfig::default();
        args.apply_to(&mut config);

        assert_eq!(args.data_dir, "runs/lifo");
        assert_eq!(config.dashboard.kind, DashboardKind::LoadBalancer);
        assert_eq!(config.output.dir, "out");
        assert_eq!(config.dashboard.remark.as_deref(), Some("lifo"));
        assert!(config.output.dump_json);
    }

    #[test]
    fn should_validate_after_dashboard_override() {
        let mut config = DashboardConfig::default();
        config.dashboard.kind = DashboardKind::Custom;
        assert!(config.validate().is_err());

        DashboardArgs::parse_from(["bloat-dashboard", "-d", "priority"]).apply_to(&mut config);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_parse_single_file_mode() {
        let args = DashboardArgs::parse_from(["bloat-dashboard", "--file", "data/client.rps.0.csv"]);
        assert_eq!(args.file.as_deref(), Some("data/client.rps.0.csv"));
        assert!(
            DashboardArgs::try_parse_from(["bloat-dashboard", "-f", "a.csv", "-d", "client"])
                .is_err()
        );
    }

    #[test]
    fn should_reject_unknown_dashboard() {
        assert!(DashboardArgs::try_parse_from(["bloat-dashboard", "-d", "histogram"]).is_err());
    }
}
