//! Error types for stem/branch parsing and month-label derivation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::month::MonthLabel;

/// Broad classification shared by every error in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed caller input: date, stem, branch, or a label that does not
    /// belong to the derived set.
    InvalidInput,
    /// A lookup entry the data set must provide is absent.
    DataError,
    /// A requested item (e.g. chart group) does not exist.
    NotFound,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput => f.write_str("invalid input"),
            Self::DataError => f.write_str("data error"),
            Self::NotFound => f.write_str("not found"),
        }
    }
}

/// Errors from the static tables and month-label builders.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BaseError {
    /// String is not one of the 10 stem names.
    InvalidStem(String),
    /// String is not one of the 12 branch names.
    InvalidBranch(String),
    /// String is not a "stem branch" month label.
    InvalidMonthLabel(String),
    /// The Tý anchor label is not among the 12 months of the year.
    AnchorNotInMonths(MonthLabel),
    /// No house carries the requested month label.
    MonthLabelNotFound(MonthLabel),
}

impl BaseError {
    /// Classification of this error.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

impl Display for BaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStem(s) => write!(f, "invalid stem: {s:?}"),
            Self::InvalidBranch(s) => write!(f, "invalid branch: {s:?}"),
            Self::InvalidMonthLabel(s) => write!(f, "invalid month label: {s:?}"),
            Self::AnchorNotInMonths(l) => {
                write!(f, "month label {l} at Tý is not one of this year's 12 solar months")
            }
            Self::MonthLabelNotFound(l) => {
                write!(f, "no house carries the solar month label {l}")
            }
        }
    }
}

impl Error for BaseError {}
