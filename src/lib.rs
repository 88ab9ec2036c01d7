//! Rental listing analytics: dataset provider, filter engine and the
//! summary / chart data behind the dashboard UI.

pub mod config;
pub mod data;
pub mod report;
