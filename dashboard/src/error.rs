use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Cannot parse {path}, line {line}: {reason}")]
    Parse {
        path: PathBuf,
        line: u64,
        reason: String,
    },
    #[error("Cannot read file {path}: {source}")]
    CannotReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("All anchor series are empty, cannot resolve the simulation origin")]
    EmptyAnchors,
    #[error("Series file {0} is missing or has no samples")]
    EmptySeries(PathBuf),
    #[error("Cannot load configuration: {0}")]
    CannotLoadConfiguration(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Cannot write output {path}: {source}")]
    CannotWriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot render chart: {0}")]
    CannotRenderChart(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn should_include_io_cause_in_message() {
        let error = ReportError::CannotReadFile {
            path: PathBuf::from("data/client.rps.0.csv"),
            source: Error::new(ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(
            error.to_string(),
            "Cannot read file data/client.rps.0.csv: permission denied"
        );

        let error = ReportError::CannotWriteOutput {
            path: PathBuf::from("reports"),
            source: Error::new(ErrorKind::Other, "disk full"),
        };
        assert!(error.to_string().ends_with(": disk full"));
    }
}
