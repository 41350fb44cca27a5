//! Birth-chart groups and the Tý star-pair lookup.
//!
//! The chart table has one row per (group, house, main star). A group is one
//! of the 144 base charts; which one applies to a person is identified by
//! the two main stars sitting in house Tý, registered on the group's rows as
//! a "A|B" pair key.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tuhoa_base::{Branch, HouseMap};

use crate::error::ChartError;

/// One chart-table row as loaded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChartRow {
    pub group_id: u32,
    /// Chart type label (`Loại`).
    pub kind: String,
    /// House name (`Cung địa chi`), possibly blank.
    pub house: String,
    /// Main star (`Chính Tinh`), possibly blank.
    pub star: String,
    /// Tý pair key (`Lá tại Tý`), e.g. "Tử Vi|Thiên Phủ"; usually blank.
    pub pair_key: String,
}

/// One base chart: main stars per house.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartGroup {
    pub id: u32,
    pub kind: String,
    pub houses: HouseMap<Vec<String>>,
}

impl ChartGroup {
    fn new(id: u32, kind: &str) -> Self {
        Self {
            id,
            kind: kind.trim().to_string(),
            houses: HouseMap::default(),
        }
    }

    /// Main stars of one house.
    pub fn stars(&self, house: Branch) -> &[String] {
        &self.houses[house]
    }
}

/// Unordered star pair, normalized as (smaller, larger).
fn pair(a: &str, b: &str) -> (String, String) {
    let (a, b) = (a.trim(), b.trim());
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// All chart groups, with lookups by id and by Tý star pair.
#[derive(Debug, Clone, Default)]
pub struct ChartIndex {
    groups: BTreeMap<u32, ChartGroup>,
    pairs: HashMap<(String, String), u32>,
    main_stars: BTreeSet<String>,
}

impl ChartIndex {
    /// Build the index from chart rows.
    ///
    /// A group's kind is taken from its first row. Every group has all 12
    /// houses, possibly empty. Pair keys that do not split into exactly two
    /// non-blank parts on `|` are ignored; a later row for the same pair wins.
    pub fn build<I>(rows: I) -> Result<Self, ChartError>
    where
        I: IntoIterator<Item = ChartRow>,
    {
        let mut index = Self::default();
        for row in rows {
            let group = index
                .groups
                .entry(row.group_id)
                .or_insert_with(|| ChartGroup::new(row.group_id, &row.kind));

            let house = row.house.trim();
            let star = row.star.trim();
            if !house.is_empty() && !star.is_empty() {
                let branch = Branch::from_name(house).map_err(|_| ChartError::UnknownHouse {
                    group_id: row.group_id,
                    house: house.to_string(),
                })?;
                group.houses[branch].push(star.to_string());
                index.main_stars.insert(star.to_string());
            }

            let key = row.pair_key.trim();
            if key.is_empty() {
                continue;
            }
            let parts: Vec<&str> = key.split('|').map(str::trim).collect();
            match parts.as_slice() {
                [a, b] if !a.is_empty() && !b.is_empty() => {
                    index.pairs.insert(pair(a, b), row.group_id);
                }
                _ => {}
            }
        }
        Ok(index)
    }

    /// Group by id.
    pub fn group(&self, id: u32) -> Result<&ChartGroup, ChartError> {
        self.groups.get(&id).ok_or(ChartError::GroupNotFound(id))
    }

    /// Group id registered for the two main stars at Tý, in either order.
    pub fn find_group_by_pair(&self, a: &str, b: &str) -> Result<u32, ChartError> {
        let key = pair(a, b);
        self.pairs.get(&key).copied().ok_or(ChartError::PairNotFound {
            first: key.0,
            second: key.1,
        })
    }

    /// Every main star name seen, sorted.
    pub fn main_stars(&self) -> Vec<&str> {
        self.main_stars.iter().map(String::as_str).collect()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the index has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of registered Tý pairs.
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }
}
