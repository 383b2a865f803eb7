use clap::Parser;
use dashboard::args::DashboardArgs;
use dashboard::configs::config_provider;
use dashboard::configs::validators::Validatable;
use dashboard::runner::{self, DashboardRunner};
use std::path::Path;
use std::process;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

fn main() {
    let args = DashboardArgs::parse();
    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("INFO")))
        .init();

    if args.file.is_none() && !Path::new(&args.data_dir).is_dir() {
        error!("No data directory provided or found.");
        process::exit(1);
    }

    let config_provider = config_provider::resolve(args.config.clone());
    let mut config = match config_provider.load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };
    args.apply_to(&mut config);
    if let Err(e) = config.validate() {
        error!("{e}");
        process::exit(1);
    }

    let result = match &args.file {
        Some(file) => runner::plot_file(Path::new(file), &config.output),
        None => DashboardRunner::new(&args.data_dir, config).run(),
    };
    match result {
        Ok(path) => info!("Finished, chart saved to {}", path.display()),
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}
