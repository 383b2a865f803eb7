use crate::configs::dashboard::{
    AlignmentConfig, DashboardConfig, OutputConfig, RunConfig, SelectionConfig,
};
use crate::error::ReportError;
use bloat_report::dashboard_kind::DashboardKind;
use tracing::error;

pub trait Validatable<E> {
    fn validate(&self) -> Result<(), E>;
}

impl Validatable<ReportError> for DashboardConfig {
    fn validate(&self) -> Result<(), ReportError> {
        self.alignment.validate()?;
        self.run.validate()?;
        self.dashboard.validate()?;
        self.output.validate()?;

        Ok(())
    }
}

fn invalid(message: &str) -> ReportError {
    error!("{message}");
    ReportError::InvalidConfiguration(message.to_owned())
}

impl Validatable<ReportError> for AlignmentConfig {
    fn validate(&self) -> Result<(), ReportError> {
        if !(self.dump_interval.is_finite() && self.dump_interval > 0.0) {
            return Err(invalid(
                "Alignment configuration -> dump interval must be a positive number of seconds.",
            ));
        }
        if !(self.max_simulation_length.is_finite() && self.max_simulation_length > 0.0) {
            return Err(invalid(
                "Alignment configuration -> max simulation length must be a positive number of seconds.",
            ));
        }
        if self.smoothing_window == 0 {
            return Err(invalid(
                "Alignment configuration -> smoothing window must be at least 1.",
            ));
        }
        if self.anchors.is_empty() {
            return Err(invalid(
                "Alignment configuration -> at least one anchor family is required.",
            ));
        }

        Ok(())
    }
}

impl Validatable<ReportError> for RunConfig {
    fn validate(&self) -> Result<(), ReportError> {
        if self.tenants.is_empty() && self.endpoints.is_empty() {
            return Err(invalid(
                "Run configuration -> at least one tenant or endpoint is required.",
            ));
        }

        Ok(())
    }
}

impl Validatable<ReportError> for SelectionConfig {
    fn validate(&self) -> Result<(), ReportError> {
        if self.kind == DashboardKind::Custom && self.panels.is_empty() {
            return Err(invalid(
                "Dashboard configuration -> custom dashboard requires a list of panels.",
            ));
        }
        self.panels()?;

        Ok(())
    }
}

impl Validatable<ReportError> for OutputConfig {
    fn validate(&self) -> Result<(), ReportError> {
        if self.width == 0 || self.panel_height == 0 {
            return Err(invalid(
                "Output configuration -> chart width and panel height must be positive.",
            ));
        }

        Ok(())
    }
}
