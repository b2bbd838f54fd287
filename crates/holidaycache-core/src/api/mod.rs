//! REST API client module for the public-holiday lookup service.
//!
//! This module provides the `HolidayApiClient` for fetching a country's
//! public holidays for a year, and the `HolidaySource` trait the service
//! depends on so that tests can substitute their own fetcher.
//!
//! The remote endpoint is `GET {base_url}/PublicHolidays/{year}/{country}`
//! and answers with a JSON array of holidays.

pub mod client;
pub mod error;

use async_trait::async_trait;

pub use client::HolidayApiClient;
pub use error::ApiError;

use crate::models::{CountryCode, Holiday};

/// Anything that can produce the public holidays of a country for a year.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    async fn fetch_holidays(&self, year: i32, country: &CountryCode) -> Result<Vec<Holiday>, ApiError>;
}
