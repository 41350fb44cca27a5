//! Stem → star assignments for the four transformation categories.
//!
//! The condition sheet holds several blocks; the Tứ Hóa block starts at the
//! row whose first cell is "Can" and lists one stem per row:
//!
//! ```text
//! Can,  Hóa Lộc,   Hóa Quyền, Hóa Khoa,  Hóa Kỵ
//! Giáp, Liêm Trinh, Phá Quân, Vũ Khúc,   Thái Dương
//! ...
//! ```
//!
//! The block ends at the first row with a blank stem cell.

use std::collections::BTreeMap;

use tuhoa_base::{ALL_CATEGORIES, CategoryMap, Stem, TransformCategory};

use crate::error::ChartError;

const HEADER_CELL: &str = "Can";

/// Star assigned to each category, per stem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformTable {
    rows: BTreeMap<Stem, CategoryMap<String>>,
}

fn cell(row: &[String], i: usize) -> &str {
    row.get(i).map(|s| s.trim()).unwrap_or("")
}

impl TransformTable {
    /// Build from explicit assignments.
    pub fn from_assignments<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (Stem, CategoryMap<String>)>,
    {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    /// Parse the Tứ Hóa block out of raw condition-sheet rows.
    pub fn from_raw_rows(rows: &[Vec<String>]) -> Result<Self, ChartError> {
        let start = rows
            .iter()
            .position(|r| cell(r, 0) == HEADER_CELL)
            .ok_or(ChartError::MissingStemHeader)?;

        let mut table = BTreeMap::new();
        for row in &rows[start + 1..] {
            let name = cell(row, 0);
            if name.is_empty() {
                break;
            }
            let stem = Stem::from_name(name)?;
            let stars = CategoryMap::from_fn(|c| cell(row, 1 + c.index() as usize).to_string());
            table.insert(stem, stars);
        }
        Ok(Self { rows: table })
    }

    /// Star per category for one stem.
    pub fn assignments(&self, stem: Stem) -> Result<&CategoryMap<String>, ChartError> {
        self.rows.get(&stem).ok_or(ChartError::MissingTransforms(stem))
    }

    /// Categories a star carries for any stem, in category order.
    pub fn categories_for_star(&self, star: &str) -> Vec<TransformCategory> {
        let star = star.trim();
        if star.is_empty() {
            return Vec::new();
        }
        ALL_CATEGORIES
            .iter()
            .copied()
            .filter(|c| self.rows.values().any(|m| m[*c] == star))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
