//! One-hop spreading of transformations to related houses.

use std::collections::BTreeSet;

use tuhoa_base::{Branch, CategoryMap, Relation, opposite, paired, triadic};

use crate::transform_core::CoreHits;

/// Houses reached from a category's core houses, by relation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationSets {
    pub core: BTreeSet<Branch>,
    pub opposite: BTreeSet<Branch>,
    pub paired: BTreeSet<Branch>,
    pub triadic: BTreeSet<Branch>,
}

impl RelationSets {
    /// Spread a set of core houses one hop along each relation.
    pub fn from_core(core: &[Branch]) -> Self {
        let mut sets = Self::default();
        for &h in core {
            sets.core.insert(h);
            sets.opposite.insert(opposite(h));
            sets.paired.insert(paired(h));
            sets.triadic.extend(triadic(h));
        }
        sets
    }

    /// Houses for one relation, in house order.
    pub fn get(&self, relation: Relation) -> &BTreeSet<Branch> {
        match relation {
            Relation::Core => &self.core,
            Relation::Opposite => &self.opposite,
            Relation::Paired => &self.paired,
            Relation::Triadic => &self.triadic,
        }
    }

    /// Whether no house is reached at all.
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }
}

/// Relation sets for each category.
pub type PropagationResult = CategoryMap<RelationSets>;

/// Spread every category's core houses one hop.
///
/// Opposite, paired and triadic houses are taken from the core houses only;
/// a house reached by one relation is not spread further.
pub fn propagate(core: &CoreHits) -> PropagationResult {
    core.map(|_, houses| RelationSets::from_core(houses))
}
