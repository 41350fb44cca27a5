//! Error types for calendar and solar-term lookups.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use tuhoa_base::{BaseError, ErrorKind};

/// Errors from calendar lookup or solar-term month resolution.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string is not `YYYY-MM-DD` (or `M/D/YYYY`).
    InvalidDate(String),
    /// The calendar table has no row for this solar date.
    DateNotInCalendar(NaiveDate),
    /// The calendar row exists but its year-stem cell is blank.
    MissingYearStem(NaiveDate),
    /// No solar-term events are loaded for this timezone.
    NoSolarTerms { timezone: String },
    /// No month-opening term could be resolved for this timezone and year.
    NoMonthStart { timezone: String, year: i32 },
    /// Stem/branch parsing failed.
    Base(BaseError),
}

impl TimeError {
    /// Classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDate(_) => ErrorKind::InvalidInput,
            Self::DateNotInCalendar(_)
            | Self::MissingYearStem(_)
            | Self::NoSolarTerms { .. }
            | Self::NoMonthStart { .. } => ErrorKind::DataError,
            Self::Base(e) => e.kind(),
        }
    }
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "invalid date: {s:?}"),
            Self::DateNotInCalendar(d) => write!(f, "date {d} not found in calendar table"),
            Self::MissingYearStem(d) => write!(f, "calendar row for {d} has no year stem"),
            Self::NoSolarTerms { timezone } => {
                write!(f, "no solar-term data for timezone {timezone}")
            }
            Self::NoMonthStart { timezone, year } => write!(
                f,
                "no month-opening solar term for timezone {timezone} around {year}"
            ),
            Self::Base(e) => write!(f, "{e}"),
        }
    }
}

impl Error for TimeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Base(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BaseError> for TimeError {
    fn from(e: BaseError) -> Self {
        Self::Base(e)
    }
}
