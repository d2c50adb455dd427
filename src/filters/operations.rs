//! Filter operations over brewery datasets
//!
//! Visibility is decided in one place, [`FilterState::matches`]; everything
//! here derives lists from a dataset with it.

use super::types::FilterState;
use crate::brewery::{Brewery, BreweryType};
use std::collections::BTreeSet;

/// Compute the visible subset of `dataset` under `filter`
///
/// The result preserves dataset order and is always a subset of `dataset`.
/// With no active predicate the full dataset is returned.
#[must_use]
pub fn apply_filters(dataset: &[Brewery], filter: &FilterState) -> Vec<Brewery> {
    if !filter.is_active() {
        return dataset.to_vec();
    }

    dataset
        .iter()
        .filter(|b| filter.matches(b))
        .cloned()
        .collect()
}

/// Distinct cities present in `dataset`, sorted ascending
#[must_use]
pub fn city_index(dataset: &[Brewery]) -> Vec<String> {
    dataset
        .iter()
        .map(|b| b.city.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Keep only breweries whose type is in `allowed`
pub fn retain_types(dataset: &mut Vec<Brewery>, allowed: &[BreweryType]) {
    dataset.retain(|b| allowed.contains(&b.brewery_type));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_dataset, texas_dataset};

    fn names(breweries: &[Brewery]) -> Vec<&str> {
        breweries.iter().map(|b| b.name.as_str()).collect()
    }

    #[test]
    fn test_no_predicates_returns_dataset() {
        let dataset = sample_dataset();
        let visible = apply_filters(&dataset, &FilterState::default());
        assert_eq!(visible, dataset);
    }

    #[test]
    fn test_refiltering_is_idempotent() {
        let dataset = texas_dataset();
        let mut filter = FilterState::new();
        filter.set_type(Some(BreweryType::Micro));
        filter.set_name_query("a");

        let once = apply_filters(&dataset, &filter);
        let twice = apply_filters(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_result_is_subset_in_order() {
        let dataset = texas_dataset();
        let mut filter = FilterState::new();
        filter.select_city("Austin");
        filter.select_city("Houston");

        let visible = apply_filters(&dataset, &filter);
        assert!(visible.iter().all(|b| dataset.contains(b)));

        let positions: Vec<usize> = visible
            .iter()
            .map(|b| dataset.iter().position(|d| d.id == b.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_type_and_city_conjunction() {
        let dataset = sample_dataset();
        let mut filter = FilterState::new();
        filter.set_type(Some(BreweryType::Micro));
        filter.select_city("Austin");

        let visible = apply_filters(&dataset, &filter);
        assert_eq!(names(&visible), vec!["Ale House"]);
    }

    #[test]
    fn test_name_search_ignores_case() {
        let dataset = sample_dataset();
        let mut filter = FilterState::new();
        filter.set_name_query("ale");

        let visible = apply_filters(&dataset, &filter);
        assert_eq!(names(&visible), vec!["Ale House", "Ale Works"]);
    }

    #[test]
    fn test_unmatched_type_yields_empty() {
        let dataset = sample_dataset();
        let mut filter = FilterState::new();
        filter.set_type(Some(BreweryType::Brewpub));

        assert!(apply_filters(&dataset, &filter).is_empty());
    }

    #[test]
    fn test_predicate_order_does_not_matter() {
        let dataset = texas_dataset();

        let mut by_type = FilterState::new();
        by_type.set_type(Some(BreweryType::Micro));
        let mut by_city = FilterState::new();
        by_city.select_city("Austin");
        let mut by_name = FilterState::new();
        by_name.set_name_query("brew");

        let forward = apply_filters(
            &apply_filters(&apply_filters(&dataset, &by_type), &by_city),
            &by_name,
        );
        let backward = apply_filters(
            &apply_filters(&apply_filters(&dataset, &by_name), &by_city),
            &by_type,
        );

        let mut combined = FilterState::new();
        combined.set_type(Some(BreweryType::Micro));
        combined.select_city("Austin");
        combined.set_name_query("brew");

        assert_eq!(forward, backward);
        assert_eq!(forward, apply_filters(&dataset, &combined));
    }

    #[test]
    fn test_city_index_dedups_and_sorts() {
        let dataset = vec![
            Brewery::new(1, "One", BreweryType::Micro, "Dallas"),
            Brewery::new(2, "Two", BreweryType::Micro, "Austin"),
            Brewery::new(3, "Three", BreweryType::Micro, "Austin"),
        ];
        assert_eq!(city_index(&dataset), vec!["Austin", "Dallas"]);
    }

    #[test]
    fn test_city_index_empty_dataset() {
        assert!(city_index(&[]).is_empty());
    }

    #[test]
    fn test_retain_types_drops_disallowed() {
        let mut dataset = sample_dataset();
        dataset.push(Brewery::new(4, "Big Brew Co", BreweryType::Large, "Austin"));
        dataset.push(Brewery::new(5, "Someday", BreweryType::Planning, "Dallas"));

        retain_types(&mut dataset, &BreweryType::SELECTABLE);

        assert_eq!(dataset.len(), 3);
        assert!(dataset.iter().all(|b| b.brewery_type != BreweryType::Large));
    }
}
