//! paisa-worldbank
//!
//! Public connector that implements `InflationSource` on top of the World
//! Bank's `country/{code}/indicator/{id}` endpoint. The first page of a
//! fetch reveals the total page count; the remaining pages are issued
//! concurrently and joined all-or-nothing before the combined observations
//! run through the core normalizer.
#![warn(missing_docs)]

/// Connector construction and configuration.
pub mod builder;
mod wire;

use async_trait::async_trait;
use chrono::Datelike;
use futures::future::try_join_all;
use url::Url;

use paisa_core::{InflationPoint, InflationSource, PaisaError, RawObservation, normalize};

pub use builder::WorldBankConnectorBuilder;
use wire::{ObservationsPage, WireRecord};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.worldbank.org/v2";
/// Default country code: India.
pub const DEFAULT_COUNTRY: &str = "IN";
/// Consumer Price Index indicator (2010 = 100).
pub const DEFAULT_INDICATOR: &str = "FP.CPI.TOTL";
/// Default page size requested from the API.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// The indicator starts reporting in 1960; the fetch window always runs
/// from there through the current calendar year.
const EARLIEST_YEAR: i32 = 1960;

/// Public connector type backed by a shared `reqwest::Client`.
///
/// One call to [`InflationSource::fetch_inflation_series`] is one fetch
/// attempt; retry, caching, and dedup policy live with the caller.
pub struct WorldBankConnector {
    http: reqwest::Client,
    endpoint: Url,
    country: String,
    indicator: String,
    per_page: u32,
}

impl WorldBankConnector {
    /// Returns a builder preloaded with the production defaults.
    #[must_use]
    pub fn builder() -> WorldBankConnectorBuilder {
        WorldBankConnectorBuilder::new()
    }

    /// Build a connector against the production endpoint with defaults.
    ///
    /// # Panics
    /// Panics if the built-in endpoint constants fail to parse, which is
    /// unexpected in normal environments.
    #[must_use]
    pub fn new_default() -> Self {
        Self::builder()
            .build()
            .expect("default World Bank configuration is valid")
    }

    pub(crate) const fn from_parts(
        http: reqwest::Client,
        endpoint: Url,
        country: String,
        indicator: String,
        per_page: u32,
    ) -> Self {
        Self {
            http,
            endpoint,
            country,
            indicator,
            per_page,
        }
    }

    /// Country code the connector queries.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Indicator code the connector queries.
    #[must_use]
    pub fn indicator(&self) -> &str {
        &self.indicator
    }

    async fn fetch_page(
        &self,
        current_year: i32,
        page: u32,
    ) -> Result<ObservationsPage, PaisaError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("per_page", &self.per_page.to_string())
            .append_pair("date", &format!("{EARLIEST_YEAR}:{current_year}"))
            .append_pair("page", &page.to_string());

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| PaisaError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PaisaError::status(status.as_u16()));
        }

        response
            .json::<ObservationsPage>()
            .await
            .map_err(|e| PaisaError::envelope(e.to_string()))
    }

    /// Fetch the raw observations for the configured window without
    /// normalizing them.
    ///
    /// # Errors
    /// Fails with `Status`/`Transport`/`Envelope` on any page; a failing
    /// page fails the whole fetch and no partial data is returned.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "paisa_worldbank::fetch_observations",
            skip(self),
            fields(country = %self.country, indicator = %self.indicator),
        )
    )]
    pub async fn fetch_observations(&self) -> Result<Vec<RawObservation>, PaisaError> {
        let current_year = chrono::Utc::now().year();

        let first = self.fetch_page(current_year, 1).await?;
        let pages = first.pagination.pages;

        let mut records = first.records;
        if pages > 1 {
            let rest =
                try_join_all((2..=pages).map(|page| self.fetch_page(current_year, page))).await?;
            for page in rest {
                records.extend(page.records);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(pages, records = records.len(), "combined World Bank pages");

        records.iter().map(WireRecord::to_observation).collect()
    }
}

#[async_trait]
impl InflationSource for WorldBankConnector {
    async fn fetch_inflation_series(&self) -> Result<Vec<InflationPoint>, PaisaError> {
        let observations = self.fetch_observations().await?;
        normalize(observations)
    }
}
