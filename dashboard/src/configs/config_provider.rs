use crate::configs::dashboard::DashboardConfig;
use crate::error::ReportError;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::{env, path::Path};
use tracing::info;

pub const DEFAULT_CONFIG_PATH: &str = "configs/dashboard.toml";
const CONFIG_PATH_ENV: &str = "BLOAT_CONFIG_PATH";
const ENV_PREFIX: &str = "BLOAT_";

/// Loads the configuration without validating it; command line overrides
/// are applied first and the caller validates the result.
pub trait ConfigProvider {
    fn load_config(&self) -> Result<DashboardConfig, ReportError>;
}

#[derive(Debug)]
pub struct FileConfigProvider {
    path: String,
}

impl FileConfigProvider {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

/// Explicit path first, then `BLOAT_CONFIG_PATH`, then the default location.
pub fn resolve(path: Option<String>) -> Box<dyn ConfigProvider> {
    let path = path
        .or_else(|| env::var(CONFIG_PATH_ENV).ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    Box::new(FileConfigProvider::new(path))
}

/// Same lookup as figment: relative paths are searched upwards from the working directory.
fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();

    if path.is_absolute() {
        return path.is_file();
    }

    let Ok(cwd) = env::current_dir() else {
        return false;
    };

    let mut current_dir = cwd.as_path();
    loop {
        if current_dir.join(path).is_file() {
            return true;
        }
        current_dir = match current_dir.parent() {
            Some(parent) => parent,
            None => return false,
        };
    }
}

impl ConfigProvider for FileConfigProvider {
    fn load_config(&self) -> Result<DashboardConfig, ReportError> {
        info!("Loading config from path: '{}'...", self.path);

        if !file_exists(&self.path) {
            return Err(ReportError::CannotLoadConfiguration(format!(
                "Cannot find configuration file at path: '{}'.",
                self.path,
            )));
        }

        let extension = self.path.rsplit('.').next().unwrap_or("");
        if extension != "toml" {
            return Err(ReportError::CannotLoadConfiguration(format!(
                "invalid file extension: {extension}, only .toml is supported."
            )));
        }

        let config: DashboardConfig = Figment::new()
            .merge(Toml::file(&self.path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|error| {
                ReportError::CannotLoadConfiguration(format!(
                    "Failed to load configuration: {error}"
                ))
            })?;

        info!("Config loaded from path: '{}'", self.path);
        info!("Using Config: {}", config);
        Ok(config)
    }
}
