//! Static tables for Tứ Hóa charting.
//!
//! This crate provides:
//! - The 10 stems and 12 branches as closed enums with fixed indices
//! - A 12-slot `HouseMap` keyed by branch
//! - Opposite / paired / triadic house relations
//! - Solar-term month labels and the day-house rotation
//! - Transformation categories and relation kinds
//!
//! Nothing in this crate performs I/O.

pub mod branch;
pub mod error;
pub mod house;
pub mod month;
pub mod relations;
pub mod stem;
pub mod transform;

pub use branch::{ALL_BRANCHES, Branch, SOLAR_MONTH_BRANCHES};
pub use error::{BaseError, ErrorKind};
pub use house::HouseMap;
pub use month::{
    MonthLabel, day_house, first_month_stem, month_label_for_branch, month_labels_by_house,
    solar_months, solar_months_from_name,
};
pub use relations::{TRIADIC_GROUPS, opposite, paired, triadic, triadic_group_index};
pub use stem::{ALL_STEMS, Stem};
pub use transform::{
    ALL_CATEGORIES, ALL_RELATIONS, CategoryMap, Relation, TransformCategory,
};
