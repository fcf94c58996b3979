//! # Filter & Search
//!
//! Pure functions that narrow the catalogue. Nothing here touches `App`;
//! callers pass a slice and get an owned subsequence back in source order.
//!
//! ```text
//! collection ──search(term)──► ──category──► ──status──► ──continent──► view
//! ```
//!
//! Every pass only removes records, so `filter` is a subset of its input and
//! applying the same criteria twice changes nothing.

use serde::{Deserialize, Serialize};

use crate::core::animal::{AnimalRecord, Category, ConservationStatus};

/// Default number of entries returned by [`similar`].
pub const DEFAULT_SIMILAR_LIMIT: usize = 3;

const MAX_ANIMAL_SUGGESTIONS: usize = 5;
const MAX_CATEGORY_SUGGESTIONS: usize = 3;
const MAX_STATUS_SUGGESTIONS: usize = 2;

/// Narrowing criteria. `None` fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub category: Option<Category>,
    pub conservation_status: Option<ConservationStatus>,
    pub continent: Option<String>,
    pub search_term: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.conservation_status.is_none()
            && self.continent.is_none()
            && self.search_term.is_none()
    }

    /// Shallow merge: every field present in `patch` overrides ours.
    pub fn merge(&mut self, patch: FilterCriteria) {
        if patch.category.is_some() {
            self.category = patch.category;
        }
        if patch.conservation_status.is_some() {
            self.conservation_status = patch.conservation_status;
        }
        if patch.continent.is_some() {
            self.continent = patch.continent;
        }
        if patch.search_term.is_some() {
            self.search_term = patch.search_term;
        }
    }

    /// Short human summary, e.g. `"Mammal · Asia"`. Empty when nothing is set.
    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(category) = self.category {
            parts.push(category.label().to_string());
        }
        if let Some(status) = self.conservation_status {
            parts.push(status.label().to_string());
        }
        if let Some(ref continent) = self.continent {
            parts.push(continent.clone());
        }
        if let Some(ref term) = self.search_term {
            parts.push(format!("\"{term}\""));
        }
        parts.join(" · ")
    }
}

fn matches_term(animal: &AnimalRecord, needle: &str) -> bool {
    animal.name.to_lowercase().contains(needle)
        || animal.description.to_lowercase().contains(needle)
        || animal.habitat.to_lowercase().contains(needle)
        || animal.location.continent.to_lowercase().contains(needle)
        || animal
            .facts
            .iter()
            .any(|fact| fact.to_lowercase().contains(needle))
}

/// Case-insensitive substring search over name, description, habitat,
/// continent and facts. A blank term returns the collection unchanged.
pub fn search(collection: &[AnimalRecord], term: &str) -> Vec<AnimalRecord> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return collection.to_vec();
    }
    collection
        .iter()
        .filter(|animal| matches_term(animal, &needle))
        .cloned()
        .collect()
}

/// Applies search term, category, status and continent in that order.
pub fn filter(collection: &[AnimalRecord], criteria: &FilterCriteria) -> Vec<AnimalRecord> {
    let mut result = match criteria.search_term.as_deref() {
        Some(term) => search(collection, term),
        None => collection.to_vec(),
    };

    if let Some(category) = criteria.category {
        result.retain(|a| a.category == category);
    }
    if let Some(status) = criteria.conservation_status {
        result.retain(|a| a.conservation_status == status);
    }
    if let Some(ref continent) = criteria.continent {
        result.retain(|a| a.location.continent.eq_ignore_ascii_case(continent));
    }

    result
}

/// Distinct continents in first-seen order.
pub fn continents(collection: &[AnimalRecord]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for animal in collection {
        if !seen.contains(&animal.location.continent) {
            seen.push(animal.location.continent.clone());
        }
    }
    seen
}

/// Animals sharing a category, continent or status with `current`, excluding it.
pub fn similar(collection: &[AnimalRecord], current: &AnimalRecord, limit: usize) -> Vec<AnimalRecord> {
    collection
        .iter()
        .filter(|a| a.id != current.id)
        .filter(|a| {
            a.category == current.category
                || a.location.continent == current.location.continent
                || a.conservation_status == current.conservation_status
        })
        .take(limit)
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    Animal { id: String, name: String, habitat: String },
    Category(Category),
    Status(ConservationStatus),
}

impl Suggestion {
    pub fn title(&self) -> &str {
        match self {
            Suggestion::Animal { name, .. } => name,
            Suggestion::Category(c) => c.label(),
            Suggestion::Status(s) => s.label(),
        }
    }
}

/// Typeahead suggestions for the search box: animals first, then categories,
/// then conservation statuses.
pub fn suggestions(collection: &[AnimalRecord], query: &str) -> Vec<Suggestion> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let animals = collection
        .iter()
        .filter(|a| {
            a.name.to_lowercase().contains(&needle) || a.habitat.to_lowercase().contains(&needle)
        })
        .take(MAX_ANIMAL_SUGGESTIONS)
        .map(|a| Suggestion::Animal {
            id: a.id.clone(),
            name: a.name.clone(),
            habitat: a.habitat.clone(),
        });

    let categories = Category::ALL
        .into_iter()
        .filter(|c| c.label().to_lowercase().contains(&needle))
        .take(MAX_CATEGORY_SUGGESTIONS)
        .map(Suggestion::Category);

    let statuses = ConservationStatus::ALL
        .into_iter()
        .filter(|s| s.label().to_lowercase().contains(&needle))
        .take(MAX_STATUS_SUGGESTIONS)
        .map(Suggestion::Status);

    animals.chain(categories).chain(statuses).collect()
}

/// Number of pages needed for `len` items. Always at least 1.
pub fn page_count(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    len.div_ceil(per_page).max(1)
}

/// 1-based page slice. Page 0 and pages past the end are empty.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if page == 0 || per_page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalogue::animals;

    fn ids(records: &[AnimalRecord]) -> Vec<&str> {
        records.iter().map(|a| a.id.as_str()).collect()
    }

    fn is_ordered_subset(sub: &[AnimalRecord], of: &[AnimalRecord]) -> bool {
        let mut it = of.iter();
        sub.iter().all(|s| it.any(|o| o.id == s.id))
    }

    #[test]
    fn test_blank_search_returns_input_unchanged() {
        let all = animals();
        assert_eq!(search(&all, ""), all);
        assert_eq!(search(&all, "   "), all);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let all = animals();
        assert_eq!(ids(&search(&all, "TIGER")), vec!["3"]);
    }

    #[test]
    fn test_search_matches_facts() {
        let all = animals();
        // Only the giraffe fact mentions litres of blood
        assert_eq!(ids(&search(&all, "litres of blood")), vec!["4"]);
    }

    #[test]
    fn test_search_matches_continent() {
        let all = animals();
        assert_eq!(ids(&search(&all, "europe")), vec!["7"]);
    }

    #[test]
    fn test_filter_category_keeps_all_mammals_in_order() {
        let all = animals();
        let criteria = FilterCriteria {
            category: Some(Category::Mammal),
            ..Default::default()
        };
        assert_eq!(filter(&all, &criteria), all);
    }

    #[test]
    fn test_filter_continent_asia() {
        let all = animals();
        let criteria = FilterCriteria {
            continent: Some("Asia".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&all, &criteria)), vec!["3"]);
    }

    #[test]
    fn test_filter_and_semantics() {
        let all = animals();
        let criteria = FilterCriteria {
            conservation_status: Some(ConservationStatus::Endangered),
            continent: Some("Africa".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&all, &criteria)), vec!["2", "4"]);
    }

    #[test]
    fn test_filter_subset_order_and_idempotence_across_combinations() {
        let all = animals();
        let categories = [None, Some(Category::Mammal), Some(Category::Bird)];
        let statuses = [
            None,
            Some(ConservationStatus::Endangered),
            Some(ConservationStatus::Vulnerable),
        ];
        let continents = [None, Some("Africa"), Some("asia"), Some("Oceania")];
        let terms = [None, Some("savanna"), Some("  ")];

        for category in categories {
            for status in statuses {
                for continent in continents {
                    for term in terms {
                        let criteria = FilterCriteria {
                            category,
                            conservation_status: status,
                            continent: continent.map(String::from),
                            search_term: term.map(String::from),
                        };
                        let once = filter(&all, &criteria);
                        assert!(is_ordered_subset(&once, &all), "{criteria:?}");
                        assert_eq!(filter(&once, &criteria), once, "{criteria:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let all = animals();
        assert_eq!(filter(&all, &FilterCriteria::default()), all);
    }

    #[test]
    fn test_merge_overrides_only_present_fields() {
        let mut criteria = FilterCriteria {
            category: Some(Category::Mammal),
            continent: Some("Africa".to_string()),
            ..Default::default()
        };
        criteria.merge(FilterCriteria {
            continent: Some("Asia".to_string()),
            ..Default::default()
        });
        assert_eq!(criteria.category, Some(Category::Mammal));
        assert_eq!(criteria.continent.as_deref(), Some("Asia"));
    }

    #[test]
    fn test_summary() {
        let criteria = FilterCriteria {
            category: Some(Category::Mammal),
            continent: Some("Asia".to_string()),
            ..Default::default()
        };
        assert_eq!(criteria.summary(), "Mammal · Asia");
        assert_eq!(FilterCriteria::default().summary(), "");
    }

    #[test]
    fn test_continents_first_seen_order() {
        assert_eq!(continents(&animals()), vec!["Africa", "Asia", "Europe"]);
    }

    #[test]
    fn test_similar_excludes_current_and_respects_limit() {
        let all = animals();
        let tiger = all.iter().find(|a| a.id == "3").unwrap();
        let result = similar(&all, tiger, DEFAULT_SIMILAR_LIMIT);
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|a| a.id != "3"));
        assert_eq!(ids(&result), vec!["1", "2", "4"]);
    }

    #[test]
    fn test_suggestions_mix_kinds() {
        let all = animals();
        let result = suggestions(&all, "end");
        // "Endangered" and "Critically Endangered" match; no animal name/habitat does
        assert_eq!(
            result,
            vec![
                Suggestion::Status(ConservationStatus::Endangered),
                Suggestion::Status(ConservationStatus::CriticallyEndangered),
            ]
        );
        assert!(suggestions(&all, "  ").is_empty());
    }

    #[test]
    fn test_suggestions_cap_animals() {
        let all = animals();
        let result = suggestions(&all, "a");
        let animal_count = result
            .iter()
            .filter(|s| matches!(s, Suggestion::Animal { .. }))
            .count();
        assert_eq!(animal_count, 5);
    }

    #[test]
    fn test_paginate() {
        let items = [1, 2, 3, 4, 5, 6, 7];
        assert_eq!(paginate(&items, 1, 5), &[1, 2, 3, 4, 5]);
        assert_eq!(paginate(&items, 2, 5), &[6, 7]);
        assert!(paginate(&items, 3, 5).is_empty());
        assert!(paginate(&items, 0, 5).is_empty());
        assert_eq!(page_count(items.len(), 5), 2);
        assert_eq!(page_count(0, 5), 1);
    }
}
