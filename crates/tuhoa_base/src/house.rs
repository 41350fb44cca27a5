//! Fixed 12-slot container keyed by house.

use std::ops::{Index, IndexMut};

use crate::branch::{ALL_BRANCHES, Branch};

/// One value per house, stored in house order (Tý first).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HouseMap<T> {
    slots: [T; 12],
}

impl<T> HouseMap<T> {
    /// Build a map by evaluating `f` for each house in order.
    pub fn from_fn(mut f: impl FnMut(Branch) -> T) -> Self {
        Self {
            slots: std::array::from_fn(|i| f(ALL_BRANCHES[i])),
        }
    }

    /// Value for a house.
    pub fn get(&self, house: Branch) -> &T {
        &self.slots[house.index() as usize]
    }

    /// Mutable value for a house.
    pub fn get_mut(&mut self, house: Branch) -> &mut T {
        &mut self.slots[house.index() as usize]
    }

    /// Iterate `(house, value)` pairs in house order.
    pub fn iter(&self) -> impl Iterator<Item = (Branch, &T)> {
        ALL_BRANCHES.iter().copied().zip(self.slots.iter())
    }

    /// First house (in house order) whose value satisfies `pred`.
    pub fn find_house(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Branch> {
        self.iter().find(|(_, v)| pred(v)).map(|(h, _)| h)
    }
}

impl<T: Default> Default for HouseMap<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<Branch> for HouseMap<T> {
    type Output = T;

    fn index(&self, house: Branch) -> &T {
        self.get(house)
    }
}

impl<T> IndexMut<Branch> for HouseMap<T> {
    fn index_mut(&mut self, house: Branch) -> &mut T {
        self.get_mut(house)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_uses_house_order() {
        let m = HouseMap::from_fn(|h| h.index());
        for (h, v) in m.iter() {
            assert_eq!(h.index(), *v);
        }
    }

    #[test]
    fn index_mut_targets_one_slot() {
        let mut m: HouseMap<Vec<&str>> = HouseMap::default();
        m[Branch::Ngo].push("x");
        assert_eq!(m[Branch::Ngo], vec!["x"]);
        assert!(m[Branch::Ty].is_empty());
    }

    #[test]
    fn find_house_returns_first_match() {
        let m = HouseMap::from_fn(|h| h.index() % 3 == 2);
        assert_eq!(m.find_house(|v| *v), Some(Branch::Dan));
        let none: HouseMap<bool> = HouseMap::default();
        assert_eq!(none.find_house(|v| *v), None);
    }
}
