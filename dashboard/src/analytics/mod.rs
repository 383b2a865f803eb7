pub mod run_builder;
pub mod series_store;
pub mod time_series;
