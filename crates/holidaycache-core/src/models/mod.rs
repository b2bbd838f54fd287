//! Data models for holiday lookups.
//!
//! This module contains the data structures shared by the API client,
//! the cache and the service:
//!
//! - `Holiday`: A single public holiday as returned by the remote API
//! - `CountryCode`: Normalized ISO-3166 alpha-2 country code
//! - `DayStatus`: Composite holiday/weekend answer for one date

pub mod day;
pub mod holiday;

pub use day::DayStatus;
pub use holiday::{CountryCode, Holiday, DEFAULT_COUNTRY};
