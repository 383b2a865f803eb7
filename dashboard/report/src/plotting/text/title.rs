use crate::{aligned_run::AlignedRun, dashboard_kind::DashboardKind};

/// Returns a title for a run dashboard
impl AlignedRun {
    pub fn title(&self, kind: DashboardKind, remark: Option<&str>) -> String {
        if let Some(remark) = remark {
            format!("{kind} Dashboard ({remark})")
        } else {
            format!("{kind} Dashboard")
        }
    }
}
