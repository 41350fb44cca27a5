//! Địa Chi (earthly branches), which double as the 12 chart houses.
//!
//! House order follows branch order starting at Tý (index 0) and wrapping
//! after Hợi (index 11).

use crate::error::BaseError;

/// The 12 earthly branches, in cyclic order starting from Tý.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Branch {
    Ty,
    Suu,
    Dan,
    Mao,
    Thin,
    Ti,
    Ngo,
    Mui,
    Than,
    Dau,
    Tuat,
    Hoi,
}

/// All 12 branches in house order (0 = Tý, 11 = Hợi).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ty,
    Branch::Suu,
    Branch::Dan,
    Branch::Mao,
    Branch::Thin,
    Branch::Ti,
    Branch::Ngo,
    Branch::Mui,
    Branch::Than,
    Branch::Dau,
    Branch::Tuat,
    Branch::Hoi,
];

/// Branch order of the 12 solar-term months, starting with the Dần month
/// that opens at start of spring.
pub const SOLAR_MONTH_BRANCHES: [Branch; 12] = [
    Branch::Dan,
    Branch::Mao,
    Branch::Thin,
    Branch::Ti,
    Branch::Ngo,
    Branch::Mui,
    Branch::Than,
    Branch::Dau,
    Branch::Tuat,
    Branch::Hoi,
    Branch::Ty,
    Branch::Suu,
];

impl Branch {
    /// Vietnamese name of the branch, as it appears in the data tables.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ty => "Tý",
            Self::Suu => "Sửu",
            Self::Dan => "Dần",
            Self::Mao => "Mão",
            Self::Thin => "Thìn",
            Self::Ti => "Tỵ",
            Self::Ngo => "Ngọ",
            Self::Mui => "Mùi",
            Self::Than => "Thân",
            Self::Dau => "Dậu",
            Self::Tuat => "Tuất",
            Self::Hoi => "Hợi",
        }
    }

    /// Zodiac animal of the branch.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Ty => "Rat",
            Self::Suu => "Ox",
            Self::Dan => "Tiger",
            Self::Mao => "Rabbit",
            Self::Thin => "Dragon",
            Self::Ti => "Snake",
            Self::Ngo => "Horse",
            Self::Mui => "Goat",
            Self::Than => "Monkey",
            Self::Dau => "Rooster",
            Self::Tuat => "Dog",
            Self::Hoi => "Pig",
        }
    }

    /// 0-based house index (Tý=0 .. Hợi=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ty => 0,
            Self::Suu => 1,
            Self::Dan => 2,
            Self::Mao => 3,
            Self::Thin => 4,
            Self::Ti => 5,
            Self::Ngo => 6,
            Self::Mui => 7,
            Self::Than => 8,
            Self::Dau => 9,
            Self::Tuat => 10,
            Self::Hoi => 11,
        }
    }

    /// Branch for an index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// Advance `steps` houses forward around the chart.
    pub const fn advance(self, steps: u32) -> Self {
        Self::from_index(((self.index() as u32 + steps % 12) % 12) as u8)
    }

    /// Position of this branch in the solar-month order (Dần=0 .. Sửu=11).
    pub const fn solar_month_offset(self) -> u8 {
        (self.index() + 10) % 12
    }

    /// Parse a branch from its name. Surrounding whitespace is ignored;
    /// the comparison is otherwise exact.
    pub fn from_name(name: &str) -> Result<Self, BaseError> {
        let trimmed = name.trim();
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.name() == trimmed)
            .ok_or_else(|| BaseError::InvalidBranch(trimmed.to_string()))
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Branch {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
