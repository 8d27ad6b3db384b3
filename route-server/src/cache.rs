//! Caching layer for Geoapify responses.
//!
//! Geocoding results are stable for a given place text and routes for a
//! given endpoint pair, so both are cached with a TTL. Route keys round the
//! f64 endpoints to microdegrees so they become hashable; points closer
//! than roughly four inches share an entry. Errors are never cached.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{Coordinate, Route};
use crate::geoapify::{GeoapifyClient, GeoapifyError, GeocodedPlace};

/// Cache key for routes: both endpoints in microdegrees.
type RouteKey = (i64, i64, i64, i64);

/// Configuration for the response caches.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for geocoding entries.
    pub geocode_ttl: Duration,

    /// TTL for routing entries.
    pub route_ttl: Duration,

    /// Maximum number of entries per cache.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            geocode_ttl: Duration::from_secs(24 * 60 * 60),
            route_ttl: Duration::from_secs(60 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Geoapify client with response caching.
///
/// Wraps a [`GeoapifyClient`] and caches geocoding and routing responses.
pub struct CachedGeoapifyClient {
    client: GeoapifyClient,
    geocodes: MokaCache<String, Arc<GeocodedPlace>>,
    routes: MokaCache<RouteKey, Arc<Route>>,
}

impl CachedGeoapifyClient {
    /// Create a new cached client.
    pub fn new(client: GeoapifyClient, config: &CacheConfig) -> Self {
        let geocodes = MokaCache::builder()
            .time_to_live(config.geocode_ttl)
            .max_capacity(config.max_capacity)
            .build();
        let routes = MokaCache::builder()
            .time_to_live(config.route_ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            client,
            geocodes,
            routes,
        }
    }

    /// Normalized cache key for a place query.
    fn geocode_key(text: &str) -> String {
        text.trim().to_lowercase()
    }

    fn route_key(origin: Coordinate, destination: Coordinate) -> RouteKey {
        (
            microdegrees(origin.latitude),
            microdegrees(origin.longitude),
            microdegrees(destination.latitude),
            microdegrees(destination.longitude),
        )
    }

    /// Resolve a place, using the cache if available.
    pub async fn geocode(&self, text: &str) -> Result<GeocodedPlace, GeoapifyError> {
        let key = Self::geocode_key(text);

        if let Some(hit) = self.geocodes.get(&key).await {
            return Ok((*hit).clone());
        }

        let place = self.client.geocode(text).await?;
        self.geocodes.insert(key, Arc::new(place.clone())).await;

        Ok(place)
    }

    /// Fetch a route, using the cache if available.
    pub async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Route, GeoapifyError> {
        let key = Self::route_key(origin, destination);

        if let Some(hit) = self.routes.get(&key).await {
            return Ok((*hit).clone());
        }

        let route = self.client.route(origin, destination).await?;
        self.routes.insert(key, Arc::new(route.clone())).await;

        Ok(route)
    }

    /// Access the underlying client for operations that bypass the cache.
    pub fn client(&self) -> &GeoapifyClient {
        &self.client
    }

    /// Number of cached geocoding entries.
    pub fn geocode_entry_count(&self) -> u64 {
        self.geocodes.entry_count()
    }

    /// Number of cached routing entries.
    pub fn route_entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.geocodes.invalidate_all();
        self.routes.invalidate_all();
    }
}

fn microdegrees(deg: f64) -> i64 {
    (deg * 1_000_000.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocode_key_normalizes() {
        assert_eq!(
            CachedGeoapifyClient::geocode_key("  Chicago, IL  "),
            "chicago, il"
        );
        assert_eq!(
            CachedGeoapifyClient::geocode_key("chicago, il"),
            CachedGeoapifyClient::geocode_key("CHICAGO, IL"),
        );
    }

    #[test]
    fn route_key_rounds_to_microdegrees() {
        let a = Coordinate::new(41.88, -87.63).unwrap();
        let b = Coordinate::new(38.63, -90.2).unwrap();
        let key = CachedGeoapifyClient::route_key(a, b);
        assert_eq!(key, (41_880_000, -87_630_000, 38_630_000, -90_200_000));

        // Sub-microdegree jitter maps to the same key.
        let a_jitter = Coordinate::new(41.880_000_4, -87.63).unwrap();
        assert_eq!(CachedGeoapifyClient::route_key(a_jitter, b), key);
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.geocode_ttl, Duration::from_secs(86_400));
        assert_eq!(config.route_ttl, Duration::from_secs(3_600));
        assert_eq!(config.max_capacity, 10_000);
    }

    #[test]
    fn cache_creation() {
        let client =
            GeoapifyClient::new(crate::geoapify::GeoapifyConfig::new("test-key")).unwrap();
        let cached = CachedGeoapifyClient::new(client, &CacheConfig::default());
        assert_eq!(cached.geocode_entry_count(), 0);
        assert_eq!(cached.route_entry_count(), 0);
    }
}
