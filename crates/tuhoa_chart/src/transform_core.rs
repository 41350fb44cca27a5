//! Tự hóa: which houses hold each category's transformed star.

use tuhoa_base::{ALL_BRANCHES, Branch, CategoryMap, Stem};

use crate::error::ChartError;
use crate::placement::ExpandedChart;
use crate::transform_table::TransformTable;

/// Houses hit by each category, in house order.
pub type CoreHits = CategoryMap<Vec<Branch>>;

/// Houses whose star list contains the star `stem` assigns to each category.
///
/// Star names are compared exactly after trimming both sides. A category may
/// hit no house (star absent) or several (duplicated star).
pub fn compute_core(
    stem: Stem,
    table: &TransformTable,
    chart: &ExpandedChart,
) -> Result<CoreHits, ChartError> {
    let assignments = table.assignments(stem)?;
    Ok(assignments.map(|_, star| {
        let star = star.trim();
        ALL_BRANCHES
            .iter()
            .copied()
            .filter(|h| !star.is_empty() && chart[*h].iter().any(|s| s.trim() == star))
            .collect()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuhoa_base::{ErrorKind, HouseMap, TransformCategory};

    fn table() -> TransformTable {
        TransformTable::from_assignments([(
            Stem::At,
            CategoryMap::from_fn(|c| match c {
                TransformCategory::Wealth => "X".to_string(),
                TransformCategory::Power => "Y".to_string(),
                TransformCategory::Status => "Z".to_string(),
                TransformCategory::Hazard => String::new(),
            }),
        )])
    }

    #[test]
    fn finds_every_house_with_star() {
        let mut chart: ExpandedChart = HouseMap::default();
        chart[Branch::Ty].push(" X ".into());
        chart[Branch::Thin].push("Y".into());
        chart[Branch::Tuat].push("Y".into());
        chart[Branch::Hoi].push("x".into());

        let core = compute_core(Stem::At, &table(), &chart).unwrap();
        assert_eq!(core[TransformCategory::Wealth], [Branch::Ty]);
        assert_eq!(core[TransformCategory::Power], [Branch::Thin, Branch::Tuat]);
        assert!(core[TransformCategory::Status].is_empty());
        assert!(core[TransformCategory::Hazard].is_empty());
    }

    #[test]
    fn unknown_stem_is_data_error() {
        let chart: ExpandedChart = HouseMap::default();
        let err = compute_core(Stem::Giap, &table(), &chart).unwrap_err();
        assert_eq!(err, ChartError::MissingTransforms(Stem::Giap));
        assert_eq!(err.kind(), ErrorKind::DataError);
    }
}
