use crate::error::ReportError;
use bloat_report::metric_key::MetricKey;
use bloat_report::raw_series::{RawSample, RawSeries};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads metric files of one run directory.
#[derive(Debug, Clone)]
pub struct SeriesStore {
    data_dir: PathBuf,
}

impl SeriesStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path(&self, key: &MetricKey) -> PathBuf {
        self.data_dir.join(key.file_name())
    }

    pub fn load(&self, key: &MetricKey) -> Result<RawSeries, ReportError> {
        load_series(&self.path(key))
    }
}

/// Reads a headerless `timestamp,value` file.
///
/// An absent file is an empty series. Any malformed row fails the whole file.
pub fn load_series(path: &Path) -> Result<RawSeries, ReportError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            debug!("Series file {} not found, using empty series", path.display());
            return Ok(RawSeries::default());
        }
        Err(source) => {
            return Err(ReportError::CannotReadFile {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let mut samples = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| read_error(path, error))?;
        if is_blank(&record) {
            continue;
        }
        let sample = parse_row(&record).map_err(|reason| ReportError::Parse {
            path: path.to_path_buf(),
            line: record.position().map_or(0, |p| p.line()),
            reason,
        })?;
        samples.push(sample);
    }

    debug!("Loaded {} samples from {}", samples.len(), path.display());
    Ok(RawSeries::new(samples))
}

/// A whitespace-only line. Empty lines never reach us, the reader skips them.
fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record[0].is_empty()
}

fn parse_row(record: &StringRecord) -> Result<RawSample, String> {
    if record.len() != 2 {
        return Err(format!("expected 2 fields, found {}", record.len()));
    }
    let timestamp_ns = parse_timestamp(&record[0])?;
    let value = match record[1].parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => return Err(format!("invalid value \"{}\"", &record[1])),
    };
    Ok(RawSample::new(timestamp_ns, value))
}

/// Integer nanoseconds; real valued stamps are truncated and must fit in `i64`.
fn parse_timestamp(field: &str) -> Result<i64, String> {
    if let Ok(timestamp) = field.parse::<i64>() {
        return Ok(timestamp);
    }
    // i64::MAX is not representable, `as f64` rounds it up to 2^63.
    match field.parse::<f64>() {
        Ok(timestamp) if timestamp >= i64::MIN as f64 && timestamp < i64::MAX as f64 => {
            Ok(timestamp as i64)
        }
        Ok(_) => Err(format!("timestamp \"{field}\" out of range")),
        Err(_) => Err(format!("invalid timestamp \"{field}\"")),
    }
}

fn read_error(path: &Path, error: csv::Error) -> ReportError {
    let line = error.position().map_or(0, |p| p.line());
    let reason = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(source) => ReportError::CannotReadFile {
            path: path.to_path_buf(),
            source,
        },
        _ => ReportError::Parse {
            path: path.to_path_buf(),
            line,
            reason,
        },
    }
}
