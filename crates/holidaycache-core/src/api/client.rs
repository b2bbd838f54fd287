//! API client for the public-holiday lookup service.
//!
//! The client is deliberately thin: one GET per `(year, country)` with a
//! bounded timeout. Failures are reported as `ApiError` and left to the
//! caller to absorb.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::debug;

use crate::models::{CountryCode, Holiday};

use super::{ApiError, HolidaySource};

// ============================================================================
// Constants
// ============================================================================

/// Default base URL of the public-holiday API
pub const DEFAULT_BASE_URL: &str = "https://date.nager.at/api/v3";

/// HTTP request timeout in seconds.
/// Holiday data is advisory, so a slow API is treated as unavailable.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// API client for the public-holiday service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct HolidayApiClient {
    client: Client,
    base_url: String,
    timeout_secs: u64,
}

impl HolidayApiClient {
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn holidays_url(&self, year: i32, country: &CountryCode) -> String {
        format!("{}/PublicHolidays/{}/{}", self.base_url, year, country)
    }

    /// Parse the API body. Anything other than an array of
    /// `{date, name, localName}` objects is rejected.
    pub fn parse_holidays(body: &str) -> Result<Vec<Holiday>, ApiError> {
        Ok(serde_json::from_str(body)?)
    }

    fn classify(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout(self.timeout_secs)
        } else {
            ApiError::NetworkError(err)
        }
    }

    /// Fetch the public holidays of `country` for `year`
    pub async fn fetch_public_holidays(&self, year: i32, country: &CountryCode) -> Result<Vec<Holiday>, ApiError> {
        let url = self.holidays_url(year, country);
        debug!(url = %url, "Fetching public holidays");

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body));
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        let holidays = Self::parse_holidays(&body)?;
        debug!(year, country = %country, count = holidays.len(), "Public holidays received");
        Ok(holidays)
    }
}

#[async_trait]
impl HolidaySource for HolidayApiClient {
    async fn fetch_holidays(&self, year: i32, country: &CountryCode) -> Result<Vec<Holiday>, ApiError> {
        self.fetch_public_holidays(year, country).await
    }
}
