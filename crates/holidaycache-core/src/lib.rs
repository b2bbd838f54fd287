//! holidaycache core library.
//!
//! Resolves a country's public holidays for a year from a remote API,
//! memoizes them per `(year, country)` with a time-to-live, falls back to a
//! static table when the API cannot be reached, and answers holiday,
//! weekend and working-day questions for single dates.
//!
//! The entry point is [`HolidayService`]. Construct one per process and
//! share it behind an `Arc`.

pub mod api;
pub mod cache;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod error;
pub mod fallback;
pub mod models;
pub mod service;

pub use api::{ApiError, HolidayApiClient, HolidaySource};
pub use cache::{CacheKey, CachedData, DataSource};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use error::HolidayError;
pub use models::{CountryCode, DayStatus, Holiday};
pub use service::HolidayService;
