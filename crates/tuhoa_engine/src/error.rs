//! Error types for data loading, configuration, and readings.

use std::error::Error;
use std::fmt::{Display, Formatter};

use tuhoa_base::{BaseError, ErrorKind};
use tuhoa_chart::ChartError;
use tuhoa_time::TimeError;

/// Errors from the engine layer, wrapping the lower crates' errors.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
    /// I/O error reading a data or config file.
    Io(String),
    /// Delimited text could not be split into records.
    TableParse(String),
    /// A required column is absent from a table's header.
    MissingColumn { table: &'static str, column: String },
    /// Config file could not be parsed or holds an invalid value.
    Config(String),
    Base(BaseError),
    Time(TimeError),
    Chart(ChartError),
}

impl EngineError {
    /// Classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) | Self::TableParse(_) | Self::MissingColumn { .. } => ErrorKind::DataError,
            Self::Config(_) => ErrorKind::InvalidInput,
            Self::Base(e) => e.kind(),
            Self::Time(e) => e.kind(),
            Self::Chart(e) => e.kind(),
        }
    }
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::TableParse(msg) => write!(f, "table parse error: {msg}"),
            Self::MissingColumn { table, column } => {
                write!(f, "{table} table has no {column:?} column")
            }
            Self::Config(msg) => write!(f, "config error: {msg}"),
            Self::Base(e) => write!(f, "{e}"),
            Self::Time(e) => write!(f, "{e}"),
            Self::Chart(e) => write!(f, "{e}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Base(e) => Some(e),
            Self::Time(e) => Some(e),
            Self::Chart(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EngineError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<BaseError> for EngineError {
    fn from(e: BaseError) -> Self {
        Self::Base(e)
    }
}

impl From<TimeError> for EngineError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<ChartError> for EngineError {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}
