//! Caching layer for route queries.
//!
//! The network never changes after load, so an answer for
//! `(mode, origin, destination)` stays correct for the life of the process,
//! failures included. The TTL and capacity only bound memory.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::{Route, StationId};
use crate::network::TransitGraph;
use crate::planner::{Mode, RouteError, resolve};

/// Cache key: (mode, origin, destination).
type RouteKey = (Mode, StationId, StationId);

/// Cached query outcome.
pub type RouteEntry = Arc<Result<Route, RouteError>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Cache of planned routes.
pub struct RouteCache {
    routes: MokaCache<RouteKey, RouteEntry>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { routes }
    }

    /// Plan a route, using the cache if available.
    ///
    /// Names that are not stations in `graph` are rejected before the cache
    /// is consulted, so arbitrary input cannot fill it.
    pub async fn get_or_plan(
        &self,
        graph: &TransitGraph,
        mode: Mode,
        source: &str,
        destination: &str,
    ) -> RouteEntry {
        let (origin, dest) = match resolve(graph, source, destination) {
            Ok(endpoints) => endpoints,
            Err(e) => return Arc::new(Err(e)),
        };

        let key = (mode, origin.clone(), dest.clone());
        self.routes
            .get_with(key, async {
                trace!(?mode, %origin, destination = %dest, "Route cache miss");
                Arc::new(mode.plan(graph, source, destination))
            })
            .await
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }
}
