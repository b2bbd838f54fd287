//! Holiday resolution: cached lookups with a static fallback, plus the
//! holiday / weekend / working-day predicates built on top of them.
//!
//! `get_holidays` never fails. A remote failure degrades to the fallback
//! table, and a missing fallback row degrades to an empty list. Both
//! outcomes are cached for the full TTL so a dead API is not retried on
//! every query.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::{Arc, Mutex};

use chrono::{Datelike, Duration, NaiveDate};
use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::api::{ApiError, HolidayApiClient, HolidaySource};
use crate::cache::{CacheKey, CachedData, DataSource, HolidayCache};
use crate::calendar;
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::fallback::{covered_years, fallback_holidays};
use crate::models::{CountryCode, DayStatus, Holiday};

/// How far `next_working_day` looks ahead before giving up
const MAX_WORKING_DAY_SEARCH: u32 = 366;

pub struct HolidayService {
    source: Arc<dyn HolidaySource>,
    clock: Arc<dyn Clock>,
    cache: HolidayCache,
    /// One lock per key with a fetch in progress
    in_flight: Mutex<HashMap<CacheKey, Arc<tokio::sync::Mutex<()>>>>,
    default_country: CountryCode,
}

impl HolidayService {
    pub fn new(source: Arc<dyn HolidaySource>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            source,
            clock,
            cache: HolidayCache::new(ttl),
            in_flight: Mutex::new(HashMap::new()),
            default_country: CountryCode::default(),
        }
    }

    /// Build the production service: HTTP source, wall clock, configured TTL
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let client = HolidayApiClient::with_base_url(&config.api_base_url, config.fetch_timeout_secs)?;
        Ok(Self::new(Arc::new(client), Arc::new(SystemClock), config.cache_ttl())
            .with_default_country(config.country()))
    }

    pub fn with_default_country(mut self, country: CountryCode) -> Self {
        self.default_country = country;
        self
    }

    pub fn default_country(&self) -> &CountryCode {
        &self.default_country
    }

    // ===== Holiday lists =====

    /// Public holidays of `country` in `year`, from cache when live
    pub async fn get_holidays(&self, year: i32, country: &CountryCode) -> Vec<Holiday> {
        let key = CacheKey::new(year, country.clone());

        if let Some(entry) = self.cache.get_live(&key, self.clock.now()) {
            debug!(key = %key, source = ?entry.source, "Holiday cache hit");
            return entry.data;
        }

        let key_lock = self.key_lock(&key);
        let _guard = key_lock.lock().await;

        // Another caller may have filled the entry while we waited
        if let Some(entry) = self.cache.get_live(&key, self.clock.now()) {
            debug!(key = %key, "Holiday cache filled by concurrent fetch");
            return entry.data;
        }

        let entry = self.resolve(&key).await;
        let data = entry.data.clone();
        self.cache.store(key.clone(), entry);
        self.release_key_lock(&key);
        data
    }

    /// Fetch remotely, degrading to the fallback table on any failure
    async fn resolve(&self, key: &CacheKey) -> CachedData<Vec<Holiday>> {
        if !calendar::is_supported_year(key.year) || !key.country.is_well_formed() {
            debug!(key = %key, "Outside the range the holiday API serves, skipping fetch");
            return self.fallback_entry(key);
        }

        match self.source.fetch_holidays(key.year, &key.country).await {
            Ok(holidays) => {
                info!(key = %key, count = holidays.len(), "Fetched public holidays");
                CachedData::new(holidays, DataSource::Remote, self.clock.now())
            }
            Err(e) => {
                warn!(
                    key = %key,
                    error = %e,
                    malformed = e.is_malformed(),
                    "Holiday API unavailable, using fallback table"
                );
                self.fallback_entry(key)
            }
        }
    }

    fn fallback_entry(&self, key: &CacheKey) -> CachedData<Vec<Holiday>> {
        match fallback_holidays(key.year, &key.country) {
            Some(holidays) => {
                info!(key = %key, count = holidays.len(), "Serving fallback holidays");
                CachedData::new(holidays, DataSource::Fallback, self.clock.now())
            }
            None => {
                warn!(
                    key = %key,
                    covered_years = ?covered_years(&key.country),
                    "No fallback holidays, treating year as holiday-free"
                );
                CachedData::new(Vec::new(), DataSource::Empty, self.clock.now())
            }
        }
    }

    fn key_lock(&self, key: &CacheKey) -> Arc<tokio::sync::Mutex<()>> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        in_flight.entry(key.clone()).or_default().clone()
    }

    /// Waiters keep their own handle and will find the entry cached
    fn release_key_lock(&self, key: &CacheKey) {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        in_flight.remove(key);
    }

    /// Warm the cache for several years at once. Returns the total holiday count.
    pub async fn prefetch(&self, years: impl IntoIterator<Item = i32>, country: &CountryCode) -> usize {
        let lookups = years.into_iter().map(|year| self.get_holidays(year, country));
        join_all(lookups).await.iter().map(Vec::len).sum()
    }

    // ===== Single-date queries =====

    pub async fn holiday_info(&self, date: NaiveDate, country: &CountryCode) -> Option<Holiday> {
        self.get_holidays(date.year(), country)
            .await
            .into_iter()
            .find(|h| h.date == date)
    }

    pub async fn is_holiday(&self, date: NaiveDate, country: &CountryCode) -> bool {
        self.holiday_info(date, country).await.is_some()
    }

    pub fn is_weekend(date: NaiveDate) -> bool {
        calendar::is_weekend(date)
    }

    pub async fn is_non_working_day(&self, date: NaiveDate, country: &CountryCode) -> bool {
        self.is_holiday(date, country).await || Self::is_weekend(date)
    }

    pub async fn day_status(&self, date: NaiveDate, country: &CountryCode) -> DayStatus {
        let holiday = self.holiday_info(date, country).await;
        DayStatus::new(date, country.clone(), holiday, Self::is_weekend(date))
    }

    // ===== Working-day arithmetic =====

    /// First working day strictly after `date`
    pub async fn next_working_day(&self, date: NaiveDate, country: &CountryCode) -> Option<NaiveDate> {
        let mut candidate = date;
        for _ in 0..MAX_WORKING_DAY_SEARCH {
            candidate = candidate.succ_opt()?;
            if !self.is_non_working_day(candidate, country).await {
                return Some(candidate);
            }
        }
        None
    }

    /// Working days in `[start, end)`
    pub async fn working_days_between(&self, start: NaiveDate, end: NaiveDate, country: &CountryCode) -> u32 {
        if end <= start {
            return 0;
        }

        // `end` is exclusive, so the last day counted may sit in the previous year
        let last_year = end.pred_opt().map_or(start.year(), |last| last.year());
        let years: BTreeSet<i32> = (start.year()..=last_year).collect();
        let mut holidays = HashSet::new();
        for year in years {
            holidays.extend(self.get_holidays(year, country).await.into_iter().map(|h| h.date));
        }

        start
            .iter_days()
            .take_while(|d| *d < end)
            .filter(|d| !holidays.contains(d) && !Self::is_weekend(*d))
            .count() as u32
    }

    // ===== Cache control =====

    /// Inspect an entry without triggering a fetch
    pub fn cached_entry(&self, year: i32, country: &CountryCode) -> Option<CachedData<Vec<Holiday>>> {
        self.cache.peek(&CacheKey::new(year, country.clone()))
    }

    pub fn invalidate(&self, year: i32, country: &CountryCode) -> bool {
        self.cache.remove(&CacheKey::new(year, country.clone()))
    }

    pub fn clear(&self) {
        self.cache.clear();
    }

    pub fn cache_age(&self, year: i32, country: &CountryCode) -> Option<String> {
        self.cached_entry(year, country)
            .map(|entry| entry.age_display(self.clock.now()))
    }
}

// ============================================================================
// Tests
// ============================================================================
