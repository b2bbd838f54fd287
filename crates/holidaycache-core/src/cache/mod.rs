//! In-memory caching of resolved holiday lists.
//!
//! This module provides the `HolidayCache` keyed by `(year, country)`.
//! Entries carry the time they were stored and the path that produced
//! them (remote API, fallback table, or nothing). Entries are considered
//! stale after the configured TTL (24 hours by default) and are only
//! checked on access; there is no background sweep.

pub mod manager;

pub use manager::{CacheKey, CachedData, DataSource, HolidayCache, DEFAULT_TTL_HOURS};
