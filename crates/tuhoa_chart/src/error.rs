//! Error types for chart indexing and transformation lookups.

use std::error::Error;
use std::fmt::{Display, Formatter};

use tuhoa_base::{BaseError, ErrorKind, Stem};

use crate::placement::FloatingStar;

/// Errors from chart building, star placement, and the transformation table.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// A chart row names a house that is not one of the 12 branches.
    UnknownHouse { group_id: u32, house: String },
    /// No chart group with this id.
    GroupNotFound(u32),
    /// No chart group is registered for this pair of main stars at Tý.
    PairNotFound { first: String, second: String },
    /// A floating star was given no house.
    MissingPlacement(FloatingStar),
    /// The condition table has no row starting with "Can".
    MissingStemHeader,
    /// The transformation table has no row for this stem.
    MissingTransforms(Stem),
    /// Stem/branch parsing failed.
    Base(BaseError),
}

impl ChartError {
    /// Classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownHouse { .. } | Self::MissingPlacement(_) => ErrorKind::InvalidInput,
            Self::GroupNotFound(_) | Self::PairNotFound { .. } => ErrorKind::NotFound,
            Self::MissingStemHeader | Self::MissingTransforms(_) => ErrorKind::DataError,
            Self::Base(e) => e.kind(),
        }
    }
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownHouse { group_id, house } => {
                write!(f, "group {group_id}: unknown house {house:?}")
            }
            Self::GroupNotFound(id) => write!(f, "chart group {id} not found"),
            Self::PairNotFound { first, second } => {
                write!(f, "no chart group for main stars {first}|{second} at Tý")
            }
            Self::MissingPlacement(star) => write!(f, "no house given for {star}"),
            Self::MissingStemHeader => f.write_str("condition table has no \"Can\" header row"),
            Self::MissingTransforms(stem) => {
                write!(f, "no transformation data for stem {stem}")
            }
            Self::Base(e) => write!(f, "{e}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Base(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BaseError> for ChartError {
    fn from(e: BaseError) -> Self {
        Self::Base(e)
    }
}
