//! Tứ Hóa categories and the relation kinds a transformation spreads along.

use std::ops::{Index, IndexMut};

/// The four transformation categories, in their traditional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransformCategory {
    /// Hóa Lộc.
    Wealth,
    /// Hóa Quyền.
    Power,
    /// Hóa Khoa.
    Status,
    /// Hóa Kỵ.
    Hazard,
}

/// All 4 categories in order (Lộc, Quyền, Khoa, Kỵ).
pub const ALL_CATEGORIES: [TransformCategory; 4] = [
    TransformCategory::Wealth,
    TransformCategory::Power,
    TransformCategory::Status,
    TransformCategory::Hazard,
];

impl TransformCategory {
    /// Vietnamese label used in badges, e.g. "Hóa Lộc".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wealth => "Hóa Lộc",
            Self::Power => "Hóa Quyền",
            Self::Status => "Hóa Khoa",
            Self::Hazard => "Hóa Kỵ",
        }
    }

    /// 0-based index (Wealth=0 .. Hazard=3).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wealth => 0,
            Self::Power => 1,
            Self::Status => 2,
            Self::Hazard => 3,
        }
    }
}

impl std::fmt::Display for TransformCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How a house is reached from a transformation's own house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Relation {
    /// Tự hóa: the house holding the transformed star.
    Core,
    /// Đối cung.
    Opposite,
    /// Nhị hợp.
    Paired,
    /// Tam hợp.
    Triadic,
}

/// All 4 relations in badge order.
pub const ALL_RELATIONS: [Relation; 4] = [
    Relation::Core,
    Relation::Opposite,
    Relation::Paired,
    Relation::Triadic,
];

impl Relation {
    /// Short Vietnamese tag used inside badges ("tự", "đối", "nhị", "tam").
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Core => "tự",
            Self::Opposite => "đối",
            Self::Paired => "nhị",
            Self::Triadic => "tam",
        }
    }

    /// Column heading used in the statistics table.
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Core => "Tự hóa",
            Self::Opposite => "Đối cung",
            Self::Paired => "Nhị hợp",
            Self::Triadic => "Tam hợp",
        }
    }
}

/// One value per transformation category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryMap<T> {
    slots: [T; 4],
}

impl<T> CategoryMap<T> {
    /// Build a map by evaluating `f` for each category in order.
    pub fn from_fn(mut f: impl FnMut(TransformCategory) -> T) -> Self {
        Self {
            slots: std::array::from_fn(|i| f(ALL_CATEGORIES[i])),
        }
    }

    /// Iterate `(category, value)` pairs in category order.
    pub fn iter(&self) -> impl Iterator<Item = (TransformCategory, &T)> {
        ALL_CATEGORIES.iter().copied().zip(self.slots.iter())
    }

    /// Transform every slot, keeping category positions.
    pub fn map<U>(&self, mut f: impl FnMut(TransformCategory, &T) -> U) -> CategoryMap<U> {
        CategoryMap::from_fn(|c| f(c, &self[c]))
    }
}

impl<T> Index<TransformCategory> for CategoryMap<T> {
    type Output = T;

    fn index(&self, c: TransformCategory) -> &T {
        &self.slots[c.index() as usize]
    }
}

impl<T> IndexMut<TransformCategory> for CategoryMap<T> {
    fn index_mut(&mut self, c: TransformCategory) -> &mut T {
        &mut self.slots[c.index() as usize]
    }
}
