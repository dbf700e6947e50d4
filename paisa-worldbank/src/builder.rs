use url::Url;

use paisa_core::PaisaError;

use crate::{
    DEFAULT_BASE_URL, DEFAULT_COUNTRY, DEFAULT_INDICATOR, DEFAULT_PER_PAGE, WorldBankConnector,
};

/// Builder for [`WorldBankConnector`].
///
/// Every knob carries the production default. Tests point `base_url` at a
/// mock server; alternative deployments can select another country or
/// indicator without touching the fetch path.
#[derive(Debug, Clone)]
pub struct WorldBankConnectorBuilder {
    base_url: String,
    country: String,
    indicator: String,
    per_page: u32,
    http: Option<reqwest::Client>,
}

impl WorldBankConnectorBuilder {
    pub(crate) fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            indicator: DEFAULT_INDICATOR.to_string(),
            per_page: DEFAULT_PER_PAGE,
            http: None,
        }
    }

    /// Override the API root (scheme + authority + optional prefix).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Select the country whose CPI series is fetched.
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Select the indicator code to fetch.
    #[must_use]
    pub fn indicator(mut self, indicator: impl Into<String>) -> Self {
        self.indicator = indicator.into();
        self
    }

    /// Page size requested from the API.
    #[must_use]
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Provide a preconfigured `reqwest::Client` to share connection pools
    /// with the rest of the application.
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Finalize the connector.
    ///
    /// # Errors
    /// Returns `Err(PaisaError::InvalidArg)` when the endpoint does not
    /// parse as a URL or the page size is zero.
    pub fn build(self) -> Result<WorldBankConnector, PaisaError> {
        if self.per_page == 0 {
            return Err(PaisaError::invalid_arg("page size must be positive"));
        }

        let base = self.base_url.trim_end_matches('/');
        let endpoint = Url::parse(&format!(
            "{base}/country/{}/indicator/{}",
            self.country, self.indicator
        ))
        .map_err(|e| PaisaError::invalid_arg(format!("invalid World Bank endpoint: {e}")))?;

        Ok(WorldBankConnector::from_parts(
            self.http.unwrap_or_default(),
            endpoint,
            self.country,
            self.indicator,
            self.per_page,
        ))
    }
}
