use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{CountryCode, Holiday};

/// Consider an entry stale after 24 hours.
/// Holiday calendars change rarely; a day keeps API traffic negligible.
pub const DEFAULT_TTL_HOURS: i64 = 24;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey {
    pub year: i32,
    pub country: CountryCode,
}

impl CacheKey {
    pub fn new(year: i32, country: CountryCode) -> Self {
        Self { year, country }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.country)
    }
}

/// Where the data in an entry came from. One entry never mixes sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Remote,
    Fallback,
    /// Remote failed and the fallback table has no row
    Empty,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedData<T> {
    pub data: T,
    pub cached_at: DateTime<Utc>,
    pub source: DataSource,
}

impl<T> CachedData<T> {
    pub fn new(data: T, source: DataSource, cached_at: DateTime<Utc>) -> Self {
        Self {
            data,
            cached_at,
            source,
        }
    }

    pub fn age_minutes(&self, now: DateTime<Utc>) -> i64 {
        (now - self.cached_at).num_minutes()
    }

    pub fn age_display(&self, now: DateTime<Utc>) -> String {
        let minutes = self.age_minutes(now);
        if minutes < 1 {
            // Also covers clock skew
            "just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 1440 {
            let hours = minutes / 60;
            if minutes % 60 >= 30 {
                format!("{}h ago", hours + 1)
            } else {
                format!("{}h ago", hours)
            }
        } else {
            let days = minutes / 1440;
            if (minutes % 1440) / 60 >= 12 {
                format!("{}d ago", days + 1)
            } else {
                format!("{}d ago", days)
            }
        }
    }

    /// Live while strictly younger than `ttl`
    pub fn is_stale(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.cached_at >= ttl
    }
}

/// Process-wide table of resolved holiday lists.
pub struct HolidayCache {
    entries: Mutex<HashMap<CacheKey, CachedData<Vec<Holiday>>>>,
    ttl: Duration,
}

impl HolidayCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<CacheKey, CachedData<Vec<Holiday>>>> {
        // Entries are replaced whole, so a poisoned map is still consistent
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Return the entry for `key` if it is still live at `now`
    pub fn get_live(&self, key: &CacheKey, now: DateTime<Utc>) -> Option<CachedData<Vec<Holiday>>> {
        self.lock()
            .get(key)
            .filter(|entry| !entry.is_stale(now, self.ttl))
            .cloned()
    }

    /// Return the entry for `key` regardless of age
    pub fn peek(&self, key: &CacheKey) -> Option<CachedData<Vec<Holiday>>> {
        self.lock().get(key).cloned()
    }

    /// Replace whatever is stored for `key`
    pub fn store(&self, key: CacheKey, entry: CachedData<Vec<Holiday>>) {
        self.lock().insert(key, entry);
    }

    pub fn remove(&self, key: &CacheKey) -> bool {
        self.lock().remove(key).is_some()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Default for HolidayCache {
    fn default() -> Self {
        Self::new(Duration::hours(DEFAULT_TTL_HOURS))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn key(year: i32) -> CacheKey {
        CacheKey::new(year, CountryCode::new("IN"))
    }

    fn sample() -> Vec<Holiday> {
        vec![Holiday::new(
            NaiveDate::from_ymd_opt(2024, 1, 26).unwrap(),
            "Republic Day",
            "Gantantra Diwas",
        )]
    }

    #[test]
    fn test_cache_key_display() {
        assert_eq!(key(2024).to_string(), "2024-IN");
        assert_eq!(CacheKey::new(2025, CountryCode::new("us")).to_string(), "2025-US");
    }

    #[test]
    fn test_cached_data_is_stale() {
        let now = Utc::now();
        let ttl = Duration::hours(24);

        let fresh = CachedData::new(vec![1], DataSource::Remote, now);
        assert!(!fresh.is_stale(now, ttl));
        assert!(!fresh.is_stale(now + Duration::hours(23), ttl));
        assert!(fresh.is_stale(now + Duration::hours(24), ttl));
    }

    #[test]
    fn test_cached_data_age_display() {
        let now = Utc::now();
        let cached = CachedData::new((), DataSource::Fallback, now);
        assert_eq!(cached.age_display(now), "just now");
        assert_eq!(cached.age_display(now - Duration::minutes(5)), "just now");
        assert_eq!(cached.age_display(now + Duration::minutes(5)), "5m ago");
        assert_eq!(cached.age_display(now + Duration::minutes(95)), "2h ago");
        assert_eq!(cached.age_display(now + Duration::hours(26)), "1d ago");
        assert_eq!(cached.age_display(now + Duration::hours(37)), "2d ago");
    }

    #[test]
    fn test_get_live_respects_ttl() {
        let cache = HolidayCache::new(Duration::hours(24));
        let now = Utc::now();
        cache.store(key(2024), CachedData::new(sample(), DataSource::Remote, now));

        assert!(cache.get_live(&key(2024), now + Duration::hours(1)).is_some());
        assert!(cache.get_live(&key(2024), now + Duration::hours(24)).is_none());
        // Stale entries are still visible to peek until replaced
        assert!(cache.peek(&key(2024)).is_some());
        assert!(cache.get_live(&key(2025), now).is_none());
    }

    #[test]
    fn test_store_replaces_whole_entry() {
        let cache = HolidayCache::default();
        let now = Utc::now();
        cache.store(key(2024), CachedData::new(sample(), DataSource::Fallback, now));
        cache.store(key(2024), CachedData::new(Vec::new(), DataSource::Remote, now));

        let entry = cache.peek(&key(2024)).unwrap();
        assert_eq!(entry.source, DataSource::Remote);
        assert!(entry.data.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let cache = HolidayCache::default();
        let now = Utc::now();
        cache.store(key(2024), CachedData::new(sample(), DataSource::Remote, now));
        cache.store(key(2025), CachedData::new(sample(), DataSource::Remote, now));

        assert!(cache.remove(&key(2024)));
        assert!(!cache.remove(&key(2024)));
        assert!(cache.peek(&key(2025)).is_some());

        cache.clear();
        assert!(cache.peek(&key(2025)).is_none());
    }
}
