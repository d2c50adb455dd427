//! Testing utilities for brewtour
//!
//! Fixture datasets and an in-memory [`BrewerySource`] for driving the
//! session and fetch worker without network access.
//!
//! Only available when compiled with `cfg(test)`.

use crate::api::{ApiError, BrewerySource};
use crate::brewery::{Brewery, BreweryType};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};

/// The three-brewery dataset used by most filter tests
///
/// Ale House (micro, Austin), Hop Yard (regional, Austin), Ale Works (micro, Dallas)
#[must_use]
pub fn sample_dataset() -> Vec<Brewery> {
    vec![
        Brewery::new(1, "Ale House", BreweryType::Micro, "Austin"),
        Brewery::new(2, "Hop Yard", BreweryType::Regional, "Austin"),
        Brewery::new(3, "Ale Works", BreweryType::Micro, "Dallas"),
    ]
}

/// A larger dataset spread over several cities and all selectable types
#[must_use]
pub fn texas_dataset() -> Vec<Brewery> {
    vec![
        Brewery::new(10, "Austin Beerworks", BreweryType::Micro, "Austin"),
        Brewery::new(11, "Saint Arnold Brewing", BreweryType::Regional, "Houston"),
        Brewery::new(12, "Jester King Brewery", BreweryType::Micro, "Austin"),
        Brewery::new(13, "Deep Ellum Brewing", BreweryType::Regional, "Dallas"),
        Brewery::new(14, "Pinthouse Brewing", BreweryType::Brewpub, "Austin"),
        Brewery::new(15, "8th Wonder Brewery", BreweryType::Micro, "Houston"),
        Brewery::new(16, "Community Beer Co", BreweryType::Micro, "Dallas"),
    ]
}

/// In-memory brewery source keyed by state name
///
/// Unknown states return an empty page. States registered with
/// [`MockSource::failing`] return an error.
#[derive(Default)]
pub struct MockSource {
    pages: HashMap<String, Vec<Brewery>>,
    failures: Vec<String>,
    requests: Mutex<Vec<String>>,
}

impl MockSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the page returned for `state`
    #[must_use]
    pub fn with_state(mut self, state: &str, breweries: Vec<Brewery>) -> Self {
        self.pages.insert(state.to_string(), breweries);
        self
    }

    /// Make requests for `state` fail
    #[must_use]
    pub fn failing(mut self, state: &str) -> Self {
        self.failures.push(state.to_string());
        self
    }

    /// States requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl BrewerySource for MockSource {
    fn fetch_page(&self, state: &str) -> Result<Vec<Brewery>, ApiError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(state.to_string());
        }
        if self.failures.iter().any(|s| s == state) {
            return Err(ApiError::Status {
                status: 500,
                body: "mock failure".to_string(),
            });
        }
        Ok(self.pages.get(state).cloned().unwrap_or_default())
    }
}

/// Brewery source that blocks each request until the test releases it
///
/// Used to finish fetches out of order.
pub struct GatedSource {
    pages: HashMap<String, Vec<Brewery>>,
    gates: Mutex<HashMap<String, Receiver<()>>>,
}

impl GatedSource {
    /// Create a source and one release handle per state
    #[must_use]
    pub fn new(pages: Vec<(&str, Vec<Brewery>)>) -> (Self, HashMap<String, Sender<()>>) {
        let mut gates = HashMap::new();
        let mut handles = HashMap::new();
        let mut map = HashMap::new();
        for (state, breweries) in pages {
            let (tx, rx) = mpsc::channel();
            gates.insert(state.to_string(), rx);
            handles.insert(state.to_string(), tx);
            map.insert(state.to_string(), breweries);
        }
        (
            Self {
                pages: map,
                gates: Mutex::new(gates),
            },
            handles,
        )
    }
}

impl BrewerySource for GatedSource {
    fn fetch_page(&self, state: &str) -> Result<Vec<Brewery>, ApiError> {
        let gate = self.gates.lock().ok().and_then(|mut g| g.remove(state));
        if let Some(gate) = gate {
            let _ = gate.recv();
        }
        Ok(self.pages.get(state).cloned().unwrap_or_default())
    }
}
