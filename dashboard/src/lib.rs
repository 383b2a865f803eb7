pub mod analytics;
pub mod args;
pub mod configs;
pub mod error;
pub mod plot;
pub mod runner;
