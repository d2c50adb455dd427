//! Open Brewery DB client
//!
//! [`BrewerySource`] is the seam between the fetch worker and the network:
//! [`OpenBreweryDbClient`] implements it over HTTP, tests implement it in
//! memory. [`fetch_for_state`] applies the brewery type allow-list on top of
//! any source.

mod error;

pub use error::{ApiError, Result};

use crate::brewery::{Brewery, BreweryType};
use crate::config::BrewConfig;
use crate::filters::operations::retain_types;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

/// Default API endpoint
pub const DEFAULT_API_URL: &str = "https://api.openbrewerydb.org";

/// Number of records requested per state
pub const DEFAULT_PER_PAGE: u32 = 50;

/// A source of brewery pages, one page per state
pub trait BrewerySource: Send + Sync {
    /// Fetch the raw page of breweries for `state`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the response cannot be decoded.
    fn fetch_page(&self, state: &str) -> Result<Vec<Brewery>>;
}

/// Fetch breweries for `state`, keeping only the `allowed` types
///
/// # Errors
///
/// Returns `ApiError` if the underlying source fails.
pub fn fetch_for_state(
    source: &dyn BrewerySource,
    state: &str,
    allowed: &[BreweryType],
) -> Result<Vec<Brewery>> {
    let mut breweries = source.fetch_page(state)?;
    let received = breweries.len();
    retain_types(&mut breweries, allowed);
    debug!(
        state,
        received,
        kept = breweries.len(),
        "Applied brewery type allow-list"
    );
    Ok(breweries)
}

/// HTTP client for `api.openbrewerydb.org`
pub struct OpenBreweryDbClient {
    client: Client,
    base_url: String,
    per_page: u32,
}

impl OpenBreweryDbClient {
    /// Create a client against `base_url`
    ///
    /// No timeout is applied unless `timeout` is given.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Client` if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        per_page: u32,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!("brewtour/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            per_page,
        })
    }

    /// Create a client from application configuration
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Client` if the HTTP client cannot be built.
    pub fn from_config(config: &BrewConfig) -> Result<Self> {
        Self::new(
            config.api_url.clone(),
            config.per_page,
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    /// URL of the breweries listing endpoint
    fn endpoint(&self) -> String {
        format!("{}/breweries", self.base_url.trim_end_matches('/'))
    }
}

impl BrewerySource for OpenBreweryDbClient {
    fn fetch_page(&self, state: &str) -> Result<Vec<Brewery>> {
        let per_page = self.per_page.to_string();
        let request = self
            .client
            .get(self.endpoint())
            .query(&[("by_state", state), ("per_page", per_page.as_str())])
            .build()?;

        debug!(url = %request.url(), "Fetching breweries");

        let response = self.client.execute(request)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let breweries: Vec<Brewery> = response
            .json()
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        debug!(state, results = breweries.len(), "Brewery fetch complete");
        Ok(breweries)
    }
}
