//! Caching layer for base fare lookups.
//!
//! The pricing API quotes the same base fare for the same trip, so repeated
//! estimates for one journey (e.g. a party re-pricing while editing its
//! passenger list) only need one upstream call. Failed lookups are never
//! cached.

use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::base_fare::{BaseFareError, BaseFareProvider};
use crate::domain::{Fare, TripDetails};

/// Cache key: (origin, destination, departure as Unix milliseconds).
type FareKey = (String, String, i64);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl CacheConfig {
    /// Set a custom TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the maximum number of cached entries.
    pub fn with_max_capacity(mut self, n: u64) -> Self {
        self.max_capacity = n;
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 1000,
        }
    }
}

/// Base fare provider with caching.
///
/// Wraps any [`BaseFareProvider`] and remembers successful quotes.
pub struct CachedFareProvider<P> {
    inner: P,
    fares: MokaCache<FareKey, Fare>,
}

impl<P: BaseFareProvider + Sync> CachedFareProvider<P> {
    /// Create a new cached provider.
    pub fn new(inner: P, config: &CacheConfig) -> Self {
        let fares = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, fares }
    }

    fn key(details: &TripDetails) -> FareKey {
        (
            details.from.clone(),
            details.to.clone(),
            details.when.timestamp_millis(),
        )
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.fares.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.fares.invalidate_all();
    }
}

impl<P: BaseFareProvider + Sync> BaseFareProvider for CachedFareProvider<P> {
    async fn base_fare(&self, details: &TripDetails) -> Result<Fare, BaseFareError> {
        let key = Self::key(details);

        // Try cache first
        if let Some(cached) = self.fares.get(&key).await {
            trace!(from = %details.from, to = %details.to, "base fare cache hit");
            return Ok(cached);
        }

        let fare = self.inner.base_fare(details).await?;
        self.fares.insert(key, fare).await;

        Ok(fare)
    }
}
