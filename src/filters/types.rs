//! Filter predicate state
//!
//! `FilterState` is mutated by the three filter controls (type selector, city
//! checklist, name search). It never holds derived data; the visible subset is
//! recomputed from it by [`apply_filters`](super::apply_filters).

use crate::brewery::{Brewery, BreweryType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The active filter predicates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Only show breweries of this type
    #[serde(default)]
    pub brewery_type: Option<BreweryType>,

    /// Only show breweries located in one of these cities
    #[serde(default)]
    pub selected_cities: BTreeSet<String>,

    /// Only show breweries whose name contains this text (case-insensitive)
    #[serde(default)]
    pub name_query: String,
}

impl FilterState {
    /// Create an empty filter state (no active predicates)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the type predicate is active
    #[must_use]
    pub const fn has_type(&self) -> bool {
        self.brewery_type.is_some()
    }

    /// Whether the city predicate is active
    #[must_use]
    pub fn has_cities(&self) -> bool {
        !self.selected_cities.is_empty()
    }

    /// Whether the name predicate is active
    #[must_use]
    pub fn has_name_query(&self) -> bool {
        !self.name_query.is_empty()
    }

    /// Whether any predicate is active
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.has_type() || self.has_cities() || self.has_name_query()
    }

    /// Set or clear the type predicate
    pub fn set_type(&mut self, brewery_type: Option<BreweryType>) {
        self.brewery_type = brewery_type;
    }

    /// Replace the name query
    pub fn set_name_query(&mut self, query: impl Into<String>) {
        self.name_query = query.into();
    }

    /// Add a city to the selection. Returns `false` if it was already selected.
    pub fn select_city(&mut self, city: impl Into<String>) -> bool {
        self.selected_cities.insert(city.into())
    }

    /// Remove a city from the selection. Returns `false` if it was not selected.
    pub fn deselect_city(&mut self, city: &str) -> bool {
        self.selected_cities.remove(city)
    }

    /// Toggle a city's membership. Returns the new membership.
    pub fn toggle_city(&mut self, city: &str) -> bool {
        if self.selected_cities.remove(city) {
            false
        } else {
            self.selected_cities.insert(city.to_string());
            true
        }
    }

    /// Whether a city is selected (drives the checkbox state)
    #[must_use]
    pub fn is_city_selected(&self, city: &str) -> bool {
        self.selected_cities.contains(city)
    }

    /// Deselect every city
    pub fn clear_cities(&mut self) {
        self.selected_cities.clear();
    }

    /// Clear all predicates
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check a single brewery against all active predicates
    #[must_use]
    pub fn matches(&self, brewery: &Brewery) -> bool {
        if let Some(wanted) = &self.brewery_type
            && brewery.brewery_type != *wanted
        {
            return false;
        }

        if self.has_cities() && !self.selected_cities.contains(&brewery.city) {
            return false;
        }

        if self.has_name_query() && !name_contains(&brewery.name, &self.name_query) {
            return false;
        }

        true
    }
}

/// Case-insensitive substring test
fn name_contains(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_inactive() {
        let filter = FilterState::default();
        assert!(!filter.is_active());
        assert!(filter.brewery_type.is_none());
        assert!(filter.selected_cities.is_empty());
        assert!(filter.name_query.is_empty());
    }

    #[test]
    fn test_select_city_is_idempotent() {
        let mut filter = FilterState::new();
        assert!(filter.select_city("Austin"));
        assert!(!filter.select_city("Austin"));
        assert_eq!(filter.selected_cities.len(), 1);

        assert!(filter.deselect_city("Austin"));
        assert!(!filter.deselect_city("Austin"));
        assert!(filter.selected_cities.is_empty());
    }

    #[test]
    fn test_toggle_city() {
        let mut filter = FilterState::new();
        assert!(filter.toggle_city("Dallas"));
        assert!(filter.is_city_selected("Dallas"));
        assert!(!filter.toggle_city("Dallas"));
        assert!(!filter.is_city_selected("Dallas"));
    }

    #[test]
    fn test_clear_cities_keeps_other_predicates() {
        let mut filter = FilterState::new();
        filter.select_city("Austin");
        filter.select_city("Dallas");
        filter.set_type(Some(BreweryType::Micro));

        filter.clear_cities();

        assert!(filter.selected_cities.is_empty());
        assert_eq!(filter.brewery_type, Some(BreweryType::Micro));
        assert!(filter.is_active());
    }

    #[test]
    fn test_reset() {
        let mut filter = FilterState::new();
        filter.select_city("Austin");
        filter.set_name_query("ale");
        filter.set_type(Some(BreweryType::Brewpub));

        filter.reset();
        assert!(!filter.is_active());
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let mut filter = FilterState::new();
        filter.set_name_query("ALE");

        let brewery = Brewery::new(1, "Ale House", BreweryType::Micro, "Austin");
        assert!(filter.matches(&brewery));

        let other = Brewery::new(2, "Hop Yard", BreweryType::Micro, "Austin");
        assert!(!filter.matches(&other));
    }
}
