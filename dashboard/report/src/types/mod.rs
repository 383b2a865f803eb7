pub mod actor_role;
pub mod aligned_run;
pub mod dashboard_kind;
pub mod metric_key;
pub mod priority_class;
pub mod raw_series;
pub mod run_layout;
pub mod time_series;
