//! Per-house badge lists for a reading.

use tuhoa_base::{ALL_RELATIONS, Branch, HouseMap, Relation, TransformCategory};

use crate::propagate::PropagationResult;

/// Text of the day-house marker.
pub const DAY_MARKER: &str = "Ô ngày (lưu nhật)";

/// One badge shown on a house.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HouseBadge {
    /// The house of the queried day.
    DayMarker,
    /// A transformation reaching the house, e.g. "Hóa Lộc (năm, tự)".
    Transform {
        category: TransformCategory,
        source: String,
        relation: Relation,
    },
}

impl std::fmt::Display for HouseBadge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DayMarker => f.write_str(DAY_MARKER),
            Self::Transform {
                category,
                source,
                relation,
            } => write!(f, "{} ({}, {})", category.name(), source, relation.tag()),
        }
    }
}

/// Badges per house.
pub type BadgeMap = HouseMap<Vec<HouseBadge>>;

/// Append the badges of one source.
///
/// Order: category (Lộc, Quyền, Khoa, Kỵ), then relation (tự, đối, nhị,
/// tam), then house.
pub fn add_source(badges: &mut BadgeMap, spread: &PropagationResult, label: &str) {
    for (category, sets) in spread.iter() {
        for relation in ALL_RELATIONS {
            for &house in sets.get(relation) {
                badges[house].push(HouseBadge::Transform {
                    category,
                    source: label.to_string(),
                    relation,
                });
            }
        }
    }
}

/// Badges from two sources, `a` before `b`. Nothing is sorted or merged.
pub fn aggregate(
    a: &PropagationResult,
    label_a: &str,
    b: &PropagationResult,
    label_b: &str,
) -> BadgeMap {
    let mut badges = BadgeMap::default();
    add_source(&mut badges, a, label_a);
    add_source(&mut badges, b, label_b);
    badges
}

/// Put the day marker first on `house`.
pub fn mark_day_house(badges: &mut BadgeMap, house: Branch) {
    badges[house].insert(0, HouseBadge::DayMarker);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::propagate::propagate;
    use crate::transform_core::CoreHits;

    fn spread(category: TransformCategory, houses: &[Branch]) -> PropagationResult {
        let mut core = CoreHits::default();
        core[category] = houses.to_vec();
        propagate(&core)
    }

    fn texts(badges: &BadgeMap, house: Branch) -> Vec<String> {
        badges[house].iter().map(ToString::to_string).collect()
    }

    #[test]
    fn badge_text() {
        let b = HouseBadge::Transform {
            category: TransformCategory::Status,
            source: "tiết".into(),
            relation: Relation::Paired,
        };
        assert_eq!(b.to_string(), "Hóa Khoa (tiết, nhị)");
        assert_eq!(HouseBadge::DayMarker.to_string(), "Ô ngày (lưu nhật)");
    }

    #[test]
    fn sources_in_order_without_dedup() {
        let a = spread(TransformCategory::Wealth, &[Branch::Ty]);
        let b = spread(TransformCategory::Hazard, &[Branch::Ngo]);
        let badges = aggregate(&a, "năm", &b, "tiết");
        assert_eq!(texts(&badges, Branch::Ty), ["Hóa Lộc (năm, tự)", "Hóa Kỵ (tiết, đối)"]);
        assert_eq!(texts(&badges, Branch::Ngo), ["Hóa Lộc (năm, đối)", "Hóa Kỵ (tiết, tự)"]);
        assert!(badges[Branch::Mao].is_empty());
    }

    #[test]
    fn same_source_twice_repeats_badges() {
        let a = spread(TransformCategory::Power, &[Branch::Dan]);
        let badges = aggregate(&a, "năm", &a, "năm");
        assert_eq!(badges[Branch::Dan].len(), 2);
        assert_eq!(badges[Branch::Dan][0], badges[Branch::Dan][1]);
    }

    #[test]
    fn day_marker_goes_first() {
        let a = spread(TransformCategory::Wealth, &[Branch::Ty]);
        let mut badges = aggregate(&a, "năm", &PropagationResult::default(), "tiết");
        mark_day_house(&mut badges, Branch::Ty);
        mark_day_house(&mut badges, Branch::Hoi);
        assert_eq!(texts(&badges, Branch::Ty), ["Ô ngày (lưu nhật)", "Hóa Lộc (năm, tự)"]);
        assert_eq!(badges[Branch::Hoi], [HouseBadge::DayMarker]);
    }
}
