//! Chart-side Tứ Hóa computation.
//!
//! This crate provides:
//! - The chart index (base charts by group, lookup by the Tý star pair)
//! - Floating-star placement and chart expansion
//! - The stem → star transformation table
//! - Core transformation hits, one-hop propagation, and house badges
//!
//! All functions are pure; indices are built once and passed by reference.

pub mod badge;
pub mod chart;
pub mod error;
pub mod placement;
pub mod propagate;
pub mod transform_core;
pub mod transform_table;

pub use badge::{BadgeMap, DAY_MARKER, HouseBadge, add_source, aggregate, mark_day_house};
pub use chart::{ChartGroup, ChartIndex, ChartRow};
pub use error::ChartError;
pub use placement::{ALL_FLOATING_STARS, ExpandedChart, ExtraStarPlacement, FloatingStar, expand};
pub use propagate::{PropagationResult, RelationSets, propagate};
pub use transform_core::{CoreHits, compute_core};
pub use transform_table::TransformTable;
