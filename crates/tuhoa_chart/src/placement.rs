//! Floating-star placement and chart expansion.
//!
//! Four auxiliary stars are not part of the base chart; their houses are
//! supplied per person and merged onto the group's main stars.

use tuhoa_base::{Branch, HouseMap};

use crate::chart::ChartGroup;
use crate::error::ChartError;

/// Stars placed by the user on top of a base chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatingStar {
    TaPhu,
    HuuBat,
    VanXuong,
    VanKhuc,
}

/// All 4 floating stars, in merge order.
pub const ALL_FLOATING_STARS: [FloatingStar; 4] = [
    FloatingStar::TaPhu,
    FloatingStar::HuuBat,
    FloatingStar::VanXuong,
    FloatingStar::VanKhuc,
];

impl FloatingStar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::TaPhu => "Tả Phù",
            Self::HuuBat => "Hữu Bật",
            Self::VanXuong => "Văn Xương",
            Self::VanKhuc => "Văn Khúc",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::TaPhu => 0,
            Self::HuuBat => 1,
            Self::VanXuong => 2,
            Self::VanKhuc => 3,
        }
    }
}

impl std::fmt::Display for FloatingStar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// House of each floating star. All four are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraStarPlacement {
    houses: [Branch; 4],
}

impl ExtraStarPlacement {
    pub const fn new(ta_phu: Branch, huu_bat: Branch, van_xuong: Branch, van_khuc: Branch) -> Self {
        Self {
            houses: [ta_phu, huu_bat, van_xuong, van_khuc],
        }
    }

    /// Build from house names in [`ALL_FLOATING_STARS`] order.
    ///
    /// A blank name is [`ChartError::MissingPlacement`]; an unrecognised
    /// one is a branch parse error.
    pub fn from_names(names: [&str; 4]) -> Result<Self, ChartError> {
        let mut houses = [Branch::Ty; 4];
        for (star, name) in ALL_FLOATING_STARS.iter().zip(names) {
            if name.trim().is_empty() {
                return Err(ChartError::MissingPlacement(*star));
            }
            houses[star.index()] = Branch::from_name(name)?;
        }
        Ok(Self { houses })
    }

    /// House of one floating star.
    pub fn house(&self, star: FloatingStar) -> Branch {
        self.houses[star.index()]
    }

    /// `(star, house)` pairs in merge order.
    pub fn iter(&self) -> impl Iterator<Item = (FloatingStar, Branch)> + '_ {
        ALL_FLOATING_STARS.iter().map(|s| (*s, self.house(*s)))
    }
}

/// Star names per house after merging floating stars onto a base chart.
pub type ExpandedChart = HouseMap<Vec<String>>;

/// Merge the floating stars onto a copy of `group`'s houses.
///
/// Each floating star is appended to its house. Duplicates are kept.
pub fn expand(group: &ChartGroup, placement: &ExtraStarPlacement) -> ExpandedChart {
    let mut houses = group.houses.clone();
    for (star, house) in placement.iter() {
        houses[house].push(star.name().to_string());
    }
    houses
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuhoa_base::ErrorKind;

    fn group() -> ChartGroup {
        let mut houses: HouseMap<Vec<String>> = HouseMap::default();
        houses[Branch::Ty].push("Tử Vi".into());
        ChartGroup {
            id: 1,
            kind: String::new(),
            houses,
        }
    }

    #[test]
    fn expand_appends_without_touching_base() {
        let g = group();
        let p = ExtraStarPlacement::new(Branch::Ty, Branch::Ty, Branch::Mao, Branch::Dau);
        let e = expand(&g, &p);
        assert_eq!(e[Branch::Ty], ["Tử Vi", "Tả Phù", "Hữu Bật"]);
        assert_eq!(e[Branch::Mao], ["Văn Xương"]);
        assert_eq!(e[Branch::Dau], ["Văn Khúc"]);
        assert_eq!(g.houses[Branch::Ty], ["Tử Vi"]);
    }

    #[test]
    fn from_names_requires_all_four() {
        let p = ExtraStarPlacement::from_names(["Tý", "Sửu", "Dần", "Mão"]).unwrap();
        assert_eq!(p.house(FloatingStar::VanKhuc), Branch::Mao);

        let err = ExtraStarPlacement::from_names(["Tý", "Sửu", " ", "Mão"]).unwrap_err();
        assert_eq!(err, ChartError::MissingPlacement(FloatingStar::VanXuong));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = ExtraStarPlacement::from_names(["Tý", "Sửu", "Dần", "Moon"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
