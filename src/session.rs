//! Directory session state
//!
//! `DirectorySession` is the single owner of everything the view renders:
//! the dataset, the filter predicates, the visible subset and the city index.
//! Every mutator ends in [`DirectorySession::recompute`], so the visible subset
//! is always `apply_filters(dataset, filter)` and the city index always
//! reflects the current dataset.
//!
//! # Workflow
//!
//! ```text
//! Pristine
//!     ↓ begin_fetch(state) → RequestToken
//! Loaded ←─────────────┐
//!     ↓ set_type / toggle_city / set_name_query
//! Filtered             │
//!     ↓ clear predicates / complete_fetch(token, result)
//!     └────────────────┘
//! ```
//!
//! Fetch responses carry the token issued by [`DirectorySession::begin_fetch`].
//! Only the response for the most recently issued token is applied.

use crate::api::ApiError;
use crate::brewery::{Brewery, BreweryType};
use crate::filters::{FilterState, apply_filters, city_index};
use tracing::{debug, info, warn};

/// Identifier of an issued fetch, increasing with every request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Raw sequence number
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Conceptual phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing submitted yet and no data
    Pristine,
    /// Data (or a submitted state) present, no active predicates
    Loaded,
    /// At least one predicate active
    Filtered,
}

/// What happened to a completed fetch
#[derive(Debug)]
pub enum FetchApplied {
    /// The dataset was replaced; holds the new dataset size
    Replaced(usize),
    /// A newer request was issued; the response was dropped
    Stale,
    /// The request failed; prior state is unchanged
    Failed(ApiError),
}

/// Session state for one directory view
#[derive(Debug, Default)]
pub struct DirectorySession {
    dataset: Vec<Brewery>,
    filter: FilterState,
    visible: Vec<Brewery>,
    cities: Vec<String>,
    current_state: Option<String>,
    loaded_state: Option<String>,
    next_token: u64,
    latest_token: Option<RequestToken>,
    loading: bool,
}

impl DirectorySession {
    /// Create an empty (pristine) session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Full dataset for the current state
    #[must_use]
    pub fn dataset(&self) -> &[Brewery] {
        &self.dataset
    }

    /// Active predicates
    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Breweries passing all active predicates, in dataset order
    #[must_use]
    pub fn visible(&self) -> &[Brewery] {
        &self.visible
    }

    /// Sorted distinct cities of the dataset
    #[must_use]
    pub fn city_index(&self) -> &[String] {
        &self.cities
    }

    /// Last submitted state name
    #[must_use]
    pub fn current_state(&self) -> Option<&str> {
        self.current_state.as_deref()
    }

    /// State the current dataset was fetched for
    ///
    /// Only a successful fetch changes this; it lags `current_state` while a
    /// request is outstanding or after one failed.
    #[must_use]
    pub fn loaded_state(&self) -> Option<&str> {
        self.loaded_state.as_deref()
    }

    /// Whether a fetch for the latest request is outstanding
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Most recently issued request token
    #[must_use]
    pub const fn latest_token(&self) -> Option<RequestToken> {
        self.latest_token
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.filter.is_active() {
            Phase::Filtered
        } else if self.dataset.is_empty() && self.current_state.is_none() {
            Phase::Pristine
        } else {
            Phase::Loaded
        }
    }

    /// Whether the search/filter/results panel should be shown
    ///
    /// Hidden only before anything has been submitted or loaded.
    #[must_use]
    pub fn shows_results_panel(&self) -> bool {
        !self.dataset.is_empty()
            || self.filter.is_active()
            || self.current_state.is_some()
            || !self.visible.is_empty()
    }

    /// Record a state submission and issue a token for its fetch
    ///
    /// The state name is kept as entered. Any earlier outstanding request
    /// becomes stale.
    pub fn begin_fetch(&mut self, state: impl Into<String>) -> RequestToken {
        self.next_token += 1;
        let token = RequestToken(self.next_token);
        let state = state.into();
        debug!(token = token.value(), state = %state, "Issued fetch");

        self.current_state = Some(state);
        self.latest_token = Some(token);
        self.loading = true;
        token
    }

    /// Apply the outcome of the fetch identified by `token`
    ///
    /// A successful response for the latest token replaces the dataset and
    /// goes through the regular recomputation, so active predicates stay
    /// applied. Responses for older tokens are discarded. Failures leave the
    /// dataset and predicates untouched.
    pub fn complete_fetch(
        &mut self,
        token: RequestToken,
        result: Result<Vec<Brewery>, ApiError>,
    ) -> FetchApplied {
        if self.latest_token != Some(token) {
            debug!(
                token = token.value(),
                latest = self.latest_token.map(RequestToken::value),
                "Discarding stale fetch response"
            );
            return FetchApplied::Stale;
        }

        self.loading = false;
        match result {
            Ok(breweries) => {
                let count = breweries.len();
                self.loaded_state.clone_from(&self.current_state);
                self.replace_dataset(breweries);
                info!(
                    token = token.value(),
                    state = self.current_state.as_deref().unwrap_or_default(),
                    breweries = count,
                    visible = self.visible.len(),
                    "Loaded breweries"
                );
                FetchApplied::Replaced(count)
            }
            Err(e) => {
                warn!(token = token.value(), error = %e, "Brewery fetch failed");
                FetchApplied::Failed(e)
            }
        }
    }

    /// Replace the dataset and recompute derived data
    pub fn replace_dataset(&mut self, breweries: Vec<Brewery>) {
        self.dataset = breweries;
        self.cities = city_index(&self.dataset);
        self.recompute();
    }

    /// Set or clear the brewery type predicate
    pub fn set_type(&mut self, brewery_type: Option<BreweryType>) {
        if self.filter.brewery_type != brewery_type {
            self.filter.set_type(brewery_type);
            self.recompute();
        }
    }

    /// Replace the name query
    pub fn set_name_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if self.filter.name_query != query {
            self.filter.set_name_query(query);
            self.recompute();
        }
    }

    /// Toggle a city in the selection. Returns the new membership.
    pub fn toggle_city(&mut self, city: &str) -> bool {
        let selected = self.filter.toggle_city(city);
        self.recompute();
        selected
    }

    /// Add a city to the selection (no-op if already selected)
    pub fn select_city(&mut self, city: &str) {
        if self.filter.select_city(city) {
            self.recompute();
        }
    }

    /// Remove a city from the selection (no-op if not selected)
    pub fn deselect_city(&mut self, city: &str) {
        if self.filter.deselect_city(city) {
            self.recompute();
        }
    }

    /// Deselect all cities
    pub fn clear_cities(&mut self) {
        if self.filter.has_cities() {
            self.filter.clear_cities();
            self.recompute();
        }
    }

    /// Clear every predicate
    pub fn reset_filter(&mut self) {
        if self.filter.is_active() {
            self.filter.reset();
            self.recompute();
        }
    }

    /// Re-derive the visible subset from dataset and predicates
    fn recompute(&mut self) {
        self.visible = apply_filters(&self.dataset, &self.filter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_dataset, texas_dataset};

    fn loaded(dataset: Vec<Brewery>) -> DirectorySession {
        let mut session = DirectorySession::new();
        let token = session.begin_fetch("texas");
        session.complete_fetch(token, Ok(dataset));
        session
    }

    #[test]
    fn test_pristine_session() {
        let session = DirectorySession::new();
        assert_eq!(session.phase(), Phase::Pristine);
        assert!(!session.shows_results_panel());
        assert!(session.visible().is_empty());
        assert!(session.city_index().is_empty());
    }

    #[test]
    fn test_fetch_populates_dataset_and_cities() {
        let session = loaded(sample_dataset());
        assert_eq!(session.phase(), Phase::Loaded);
        assert_eq!(session.visible(), session.dataset());
        assert_eq!(session.city_index(), ["Austin", "Dallas"]);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_submitted_state_shows_panel_before_data() {
        let mut session = DirectorySession::new();
        session.begin_fetch("nowhere");
        assert!(session.shows_results_panel());
        assert!(session.is_loading());
        assert_eq!(session.phase(), Phase::Loaded);
    }

    #[test]
    fn test_predicate_changes_recompute() {
        let mut session = loaded(sample_dataset());

        session.set_type(Some(BreweryType::Micro));
        assert_eq!(session.phase(), Phase::Filtered);
        assert_eq!(session.visible().len(), 2);

        session.select_city("Austin");
        assert_eq!(session.visible().len(), 1);
        assert_eq!(session.visible()[0].name, "Ale House");

        session.set_type(None);
        session.set_name_query("");
        session.deselect_city("Austin");
        assert_eq!(session.phase(), Phase::Loaded);
        assert_eq!(session.visible(), session.dataset());
    }

    #[test]
    fn test_clear_cities_restores_unfiltered_view() {
        let mut session = loaded(texas_dataset());
        session.toggle_city("Austin");
        session.toggle_city("Dallas");
        assert_eq!(session.visible().len(), 5);

        session.clear_cities();

        assert!(session.filter().selected_cities.is_empty());
        assert_eq!(session.visible(), session.dataset());
    }

    #[test]
    fn test_new_dataset_keeps_active_predicates() {
        let mut session = loaded(sample_dataset());
        session.set_name_query("ale");

        let token = session.begin_fetch("texas");
        session.complete_fetch(token, Ok(texas_dataset()));

        assert_eq!(session.filter().name_query, "ale");
        assert!(session.visible().iter().all(|b| b.name.to_lowercase().contains("ale")));
        assert_eq!(session.visible(), apply_filters(session.dataset(), session.filter()));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut session = DirectorySession::new();
        let first = session.begin_fetch("texas");
        let second = session.begin_fetch("oregon");
        assert!(second > first);

        let applied = session.complete_fetch(second, Ok(sample_dataset()));
        assert!(matches!(applied, FetchApplied::Replaced(3)));

        let applied = session.complete_fetch(first, Ok(texas_dataset()));
        assert!(matches!(applied, FetchApplied::Stale));
        assert_eq!(session.dataset(), sample_dataset());
        assert_eq!(session.current_state(), Some("oregon"));
    }

    #[test]
    fn test_failed_fetch_leaves_state_unchanged() {
        let mut session = loaded(sample_dataset());
        session.set_type(Some(BreweryType::Micro));

        let token = session.begin_fetch("ohio");
        let applied = session.complete_fetch(
            token,
            Err(ApiError::Status {
                status: 503,
                body: String::new(),
            }),
        );

        assert!(matches!(applied, FetchApplied::Failed(_)));
        assert_eq!(session.dataset(), sample_dataset());
        assert_eq!(session.visible().len(), 2);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_failed_fetch_keeps_loaded_state_label() {
        let mut session = loaded(sample_dataset());
        assert_eq!(session.loaded_state(), Some("texas"));

        let token = session.begin_fetch("ohio");
        assert_eq!(session.loaded_state(), Some("texas"));
        session.complete_fetch(token, Err(ApiError::Timeout));

        assert_eq!(session.current_state(), Some("ohio"));
        assert_eq!(session.loaded_state(), Some("texas"));
        assert_eq!(session.dataset()[0].city, "Austin");
    }

    #[test]
    fn test_reset_filter_restores_full_dataset() {
        let mut session = loaded(sample_dataset());
        session.set_type(Some(BreweryType::Micro));
        session.select_city("Austin");
        session.set_name_query("ale");
        assert_eq!(session.visible().len(), 1);

        session.reset_filter();

        assert_eq!(session.phase(), Phase::Loaded);
        assert_eq!(session.visible(), session.dataset());
        assert!(session.filter().selected_cities.is_empty());
    }

    #[test]
    fn test_empty_dataset_empties_city_index() {
        let mut session = loaded(sample_dataset());
        session.select_city("Austin");

        let token = session.begin_fetch("alaska");
        session.complete_fetch(token, Ok(Vec::new()));

        assert!(session.city_index().is_empty());
        assert!(session.visible().is_empty());
        assert!(session.shows_results_panel());
    }
}
