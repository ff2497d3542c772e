//! Memoization of resolved trails.
//!
//! Resolution is pure, so a host that recomputes breadcrumbs on every render
//! can cache the last results. [`TrailCache`] is an LRU map from
//! [`TrailCacheKey`] (path, catalog version, entity revision) to the
//! [`Resolution`] computed for it. It is gated behind the `cache` feature and
//! uses the [`lru`] crate internally.
//!
//! A change to any key component produces a different key, so stale entries
//! are never returned; they simply age out.
//!
//! # Examples
//!
//! ```
//! use navigator_trail::cache::{TrailCache, TrailCacheKey};
//! use navigator_trail::{resolve_path, RouteCatalog, RouteDescriptor};
//!
//! let catalog = RouteCatalog::from_routes(vec![
//!     RouteDescriptor::new("/books", "books-list").entity("books"),
//! ]);
//! let mut cache = TrailCache::new();
//! let key = TrailCacheKey::new("/books", catalog.version(), 0);
//!
//! let first = cache.get_or_resolve(key.clone(), || resolve_path(&catalog, "/books"));
//! let second = cache.get_or_resolve(key, || unreachable!());
//! assert_eq!(first, second);
//! assert_eq!(cache.stats().hits, 1);
//! ```

use crate::semantic::Resolution;
use crate::{debug_log, trace_log};
use lru::LruCache;
use std::num::NonZeroUsize;

/// Everything a resolution depends on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrailCacheKey {
    /// Normalized path
    pub path: String,
    /// [`RouteCatalog::version`](crate::RouteCatalog::version) at resolution time
    pub catalog_version: u64,
    /// Host-maintained counter bumped whenever the loaded entity changes
    pub entity_revision: u64,
}

impl TrailCacheKey {
    pub fn new(path: impl Into<String>, catalog_version: u64, entity_revision: u64) -> Self {
        Self {
            path: path.into(),
            catalog_version,
            entity_revision,
        }
    }
}

/// Counters tracking hit/miss rates and invalidations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    /// Number of full clears (via [`TrailCache::clear`])
    pub invalidations: usize,
}

impl CacheStats {
    /// Hit rate in `0.0..=1.0`; `0.0` before any lookup.
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of resolutions. Default capacity is 64 entries.
#[derive(Debug)]
pub struct TrailCache {
    entries: LruCache<TrailCacheKey, Resolution>,
    stats: CacheStats,
}

impl TrailCache {
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(64) {
        Some(capacity) => capacity,
        None => unreachable!(),
    };

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a cache holding at most `capacity` resolutions.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Look up a cached resolution. Updates hit/miss stats.
    pub fn get(&mut self, key: &TrailCacheKey) -> Option<Resolution> {
        if let Some(resolution) = self.entries.get(key) {
            self.stats.hits += 1;
            trace_log!("Trail cache hit for '{}'", key.path);
            Some(resolution.clone())
        } else {
            self.stats.misses += 1;
            trace_log!("Trail cache miss for '{}'", key.path);
            None
        }
    }

    pub fn insert(&mut self, key: TrailCacheKey, resolution: Resolution) {
        self.entries.push(key, resolution);
    }

    /// Return the cached resolution or compute, store and return it.
    pub fn get_or_resolve<F>(&mut self, key: TrailCacheKey, resolve: F) -> Resolution
    where
        F: FnOnce() -> Resolution,
    {
        if let Some(resolution) = self.get(&key) {
            return resolution;
        }
        let resolution = resolve();
        self.insert(key, resolution.clone());
        resolution
    }

    /// Drop every entry and count an invalidation.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        self.stats.invalidations += 1;
        debug_log!(
            "Trail cache cleared: {} entries removed ({} total invalidations, hit rate: {:.1}%)",
            removed,
            self.stats.invalidations,
            self.stats.hit_rate() * 100.0
        );
    }

    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TrailCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TrailCache {
    /// Clones keep capacity and stats but start empty.
    fn clone(&self) -> Self {
        Self {
            entries: LruCache::new(self.entries.cap()),
            stats: self.stats.clone(),
        }
    }
}
