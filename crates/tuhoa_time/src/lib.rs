//! Calendrical indices for Tứ Hóa readings.
//!
//! This crate provides:
//! - Solar-date and solar-term timestamp parsing
//! - The solar date → lunisolar year-stem index
//! - Per-timezone solar-term index with active-month resolution

pub mod calendar;
pub mod date;
pub mod error;
pub mod solar_term;
pub mod solar_term_types;

pub use calendar::{CalendarIndex, CalendarRecord, CalendarRow};
pub use date::{effective_start, parse_iso_date, parse_local_timestamp, parse_solar_date};
pub use error::TimeError;
pub use solar_term::SolarTermIndex;
pub use solar_term_types::{
    ALL_MONTH_START_TERMS, ActiveSolarMonth, DEFAULT_CUTOFF_HOUR, MonthStartTerm,
    SolarTermConfig, SolarTermEvent,
};
