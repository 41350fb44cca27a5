//! Orchestration and I/O for Tứ Hóa readings.
//!
//! This crate provides:
//! - A comma-separated table reader
//! - Loading of the chart, condition, calendar and solar-term tables
//! - `EngineConfig`, read from TOML
//! - `compute_reading`, the full date → badges pipeline

pub mod config;
pub mod dataset;
pub mod error;
pub mod reading;
pub mod table;

pub use config::EngineConfig;
pub use dataset::{DataPaths, Datasets, calendar_rows, chart_rows, solar_term_events};
pub use error::EngineError;
pub use reading::{DailyReading, ReadingQuery, compute_reading, month_options};
pub use table::{Table, parse_rows};
