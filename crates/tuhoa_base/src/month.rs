//! Solar-term month labels and the day-house rotation.
//!
//! A solar year has 12 months opening at Dần (start of spring). Each month
//! is labelled "stem branch"; the stem of the Dần month depends on the year
//! stem through the fixed five-pair rule (Ngũ Hổ Độn), after which stems
//! advance by one per month.
//!
//! The user anchors one of these labels at house Tý; the remaining labels
//! are laid out around the chart in house order. The house of "day N" of
//! the active month is then found by counting N-1 houses forward from the
//! house that carries the active month's label.

use crate::branch::{Branch, SOLAR_MONTH_BRANCHES};
use crate::error::BaseError;
use crate::house::HouseMap;
use crate::stem::Stem;

/// A month name such as "Bính Dần".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthLabel {
    pub stem: Stem,
    pub branch: Branch,
}

impl MonthLabel {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Parse "Stem Branch" (any run of whitespace between the two words).
    pub fn parse(s: &str) -> Result<Self, BaseError> {
        let mut words = s.split_whitespace();
        let (Some(stem), Some(branch), None) = (words.next(), words.next(), words.next()) else {
            return Err(BaseError::InvalidMonthLabel(s.trim().to_string()));
        };
        Ok(Self {
            stem: Stem::from_name(stem)?,
            branch: Branch::from_name(branch)?,
        })
    }
}

impl std::fmt::Display for MonthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.stem.name(), self.branch.name())
    }
}

impl std::str::FromStr for MonthLabel {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Stem of the Dần month for a given year stem.
///
/// Giáp/Kỷ → Bính, Ất/Canh → Mậu, Bính/Tân → Canh, Đinh/Nhâm → Nhâm,
/// Mậu/Quý → Giáp.
pub const fn first_month_stem(year_stem: Stem) -> Stem {
    match year_stem {
        Stem::Giap | Stem::Ky => Stem::Binh,
        Stem::At | Stem::Canh => Stem::Mau,
        Stem::Binh | Stem::Tan => Stem::Canh,
        Stem::Dinh | Stem::Nham => Stem::Nham,
        Stem::Mau | Stem::Quy => Stem::Giap,
    }
}

/// The 12 solar-month labels of a year, Dần month first.
pub fn solar_months(year_stem: Stem) -> [MonthLabel; 12] {
    let first = first_month_stem(year_stem);
    std::array::from_fn(|i| MonthLabel::new(first.advance(i as u8), SOLAR_MONTH_BRANCHES[i]))
}

/// [`solar_months`] for a year stem given by name.
pub fn solar_months_from_name(year_stem: &str) -> Result<[MonthLabel; 12], BaseError> {
    Ok(solar_months(Stem::from_name(year_stem)?))
}

/// Label of the month whose branch is `branch`.
///
/// Every branch names exactly one solar month, so this cannot fail for a
/// well-formed `months` array from [`solar_months`].
pub fn month_label_for_branch(branch: Branch, months: &[MonthLabel; 12]) -> MonthLabel {
    months[branch.solar_month_offset() as usize]
}

/// Lay the 12 month labels around the chart so that `anchor` sits at Tý.
pub fn month_labels_by_house(
    anchor: MonthLabel,
    months: &[MonthLabel; 12],
) -> Result<HouseMap<MonthLabel>, BaseError> {
    let start = months
        .iter()
        .position(|m| *m == anchor)
        .ok_or(BaseError::AnchorNotInMonths(anchor))?;
    Ok(HouseMap::from_fn(|h| months[(start + h.index() as usize) % 12]))
}

/// House for day `day_index` (1-based) of the month labelled `label`.
///
/// Day 1 is the house carrying `label`; each later day moves one house
/// forward. Indices below 1 count backwards around the same cycle.
pub fn day_house(
    label: MonthLabel,
    day_index: i64,
    labels_by_house: &HouseMap<MonthLabel>,
) -> Result<Branch, BaseError> {
    let start = labels_by_house
        .find_house(|l| *l == label)
        .ok_or(BaseError::MonthLabelNotFound(label))?;
    let steps = (day_index.rem_euclid(12) + 11) % 12;
    Ok(start.advance(steps as u32))
}
