//! Thiên Can (heavenly stems).
//!
//! The 10 stems cycle continuously: Giáp (index 0) through Quý (index 9).
//! Arithmetic on stems is always modulo 10.

use crate::error::BaseError;

/// The 10 heavenly stems, in cyclic order starting from Giáp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stem {
    Giap,
    At,
    Binh,
    Dinh,
    Mau,
    Ky,
    Canh,
    Tan,
    Nham,
    Quy,
}

/// All 10 stems in order (0 = Giáp, 9 = Quý).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Giap,
    Stem::At,
    Stem::Binh,
    Stem::Dinh,
    Stem::Mau,
    Stem::Ky,
    Stem::Canh,
    Stem::Tan,
    Stem::Nham,
    Stem::Quy,
];

impl Stem {
    /// Vietnamese name of the stem, as it appears in the data tables.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Giap => "Giáp",
            Self::At => "Ất",
            Self::Binh => "Bính",
            Self::Dinh => "Đinh",
            Self::Mau => "Mậu",
            Self::Ky => "Kỷ",
            Self::Canh => "Canh",
            Self::Tan => "Tân",
            Self::Nham => "Nhâm",
            Self::Quy => "Quý",
        }
    }

    /// 0-based index (Giáp=0 .. Quý=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Giap => 0,
            Self::At => 1,
            Self::Binh => 2,
            Self::Dinh => 3,
            Self::Mau => 4,
            Self::Ky => 5,
            Self::Canh => 6,
            Self::Tan => 7,
            Self::Nham => 8,
            Self::Quy => 9,
        }
    }

    /// Stem for an index, wrapping modulo 10.
    pub const fn from_index(index: u8) -> Self {
        ALL_STEMS[(index % 10) as usize]
    }

    /// Advance `steps` positions around the 10-stem cycle.
    pub const fn advance(self, steps: u8) -> Self {
        Self::from_index(((self.index() as u16 + steps as u16) % 10) as u8)
    }

    /// Parse a stem from its name. Surrounding whitespace is ignored;
    /// the comparison is otherwise exact.
    pub fn from_name(name: &str) -> Result<Self, BaseError> {
        let trimmed = name.trim();
        ALL_STEMS
            .iter()
            .copied()
            .find(|s| s.name() == trimmed)
            .ok_or_else(|| BaseError::InvalidStem(trimmed.to_string()))
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Stem {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
