//! Aggregate counts over a collection. Recomputed from scratch whenever the
//! collection changes; never patched incrementally.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::animal::{AnimalRecord, Category, ConservationStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalStats {
    pub total_animals: usize,
    pub by_category: BTreeMap<Category, usize>,
    pub by_conservation_status: BTreeMap<ConservationStatus, usize>,
    pub by_continent: BTreeMap<String, usize>,
}

impl AnimalStats {
    pub fn from_animals(animals: &[AnimalRecord]) -> Self {
        animals.iter().fold(
            AnimalStats {
                total_animals: animals.len(),
                ..Default::default()
            },
            |mut stats, animal| {
                *stats.by_category.entry(animal.category).or_default() += 1;
                *stats
                    .by_conservation_status
                    .entry(animal.conservation_status)
                    .or_default() += 1;
                *stats
                    .by_continent
                    .entry(animal.location.continent.clone())
                    .or_default() += 1;
                stats
            },
        )
    }

    /// Count of animals at or above `status` on the risk scale.
    pub fn at_risk(&self, status: ConservationStatus) -> usize {
        self.by_conservation_status
            .range(status..)
            .map(|(_, n)| n)
            .sum()
    }
}
