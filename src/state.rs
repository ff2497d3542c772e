//! Navigation state: the inputs of one location and the values derived from
//! them.
//!
//! [`NavigationState`] owns the route catalog, the current location, the
//! loaded entity and display configuration. Derived values (resolution,
//! breadcrumbs, active menu entries) are pulled on demand and always reflect
//! the current inputs, however many of them changed since the last read.
//! With the `cache` feature the resolution is memoized per
//! `(path, catalog version, entity revision)`.

#[cfg(feature = "cache")]
use crate::cache::{CacheStats, TrailCache, TrailCacheKey};
use crate::display::{
    BreadcrumbBuilder, BreadcrumbItem, EntityData, LabelCatalog, LabelResolver, ResolverOptions,
};
use crate::matching::{normalize_path, split_location};
use crate::nav::{NavEntry, NavMatcher};
use crate::params::QueryParams;
use crate::route::{RouteCatalog, RouteDescriptor};
use crate::semantic::{Resolution, SemanticResolver};
use crate::{debug_log, trace_log};
#[cfg(feature = "cache")]
use std::num::NonZeroUsize;

/// Current location plus everything needed to describe it.
pub struct NavigationState {
    catalog: RouteCatalog,
    path: String,
    query: QueryParams,
    entity: Option<Box<dyn EntityData>>,
    /// Bumped on every entity change
    entity_revision: u64,
    labels: LabelCatalog,
    label_resolver: Option<LabelResolver>,
    options: ResolverOptions,
    #[cfg(feature = "cache")]
    cache: TrailCache,
}

impl NavigationState {
    /// Create a state at `/` for the given catalog.
    pub fn new(catalog: RouteCatalog) -> Self {
        Self {
            catalog,
            path: "/".to_string(),
            query: QueryParams::new(),
            entity: None,
            entity_revision: 0,
            labels: LabelCatalog::new(),
            label_resolver: None,
            options: ResolverOptions::default(),
            #[cfg(feature = "cache")]
            cache: TrailCache::new(),
        }
    }

    pub fn with_labels(mut self, labels: LabelCatalog) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        #[cfg(feature = "cache")]
        self.cache.clear();
        self
    }

    pub fn with_label_resolver(mut self, resolver: LabelResolver) -> Self {
        self.label_resolver = Some(resolver);
        self
    }

    /// Use a cache of the given capacity instead of the default one.
    #[cfg(feature = "cache")]
    pub fn with_cache_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.cache = TrailCache::with_capacity(capacity);
        self
    }

    // ------------------------------------------------------------------
    // Inputs
    // ------------------------------------------------------------------

    /// Move to a new location. The query string and fragment are split off;
    /// the path is normalized.
    pub fn navigate(&mut self, location: &str) {
        let (path, query) = split_location(location);
        let path = normalize_path(path).into_owned();
        debug_log!("Navigating from '{}' to '{}'", self.path, path);
        self.path = path;
        self.query = query;
    }

    /// Set the loaded entity used for labels.
    pub fn set_entity<E>(&mut self, entity: E)
    where
        E: EntityData + 'static,
    {
        self.entity = Some(Box::new(entity));
        self.entity_revision += 1;
        trace_log!("Entity set (revision {})", self.entity_revision);
    }

    pub fn clear_entity(&mut self) {
        if self.entity.take().is_some() {
            self.entity_revision += 1;
        }
    }

    pub fn catalog(&self) -> &RouteCatalog {
        &self.catalog
    }

    /// Mutable catalog access. Mutating or replacing the catalog changes its
    /// version, which keeps memoized resolutions from going stale.
    pub fn catalog_mut(&mut self) -> &mut RouteCatalog {
        &mut self.catalog
    }

    pub fn add_route(&mut self, route: RouteDescriptor) {
        self.catalog.add(route);
    }

    pub fn current_path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    pub fn entity_revision(&self) -> u64 {
        self.entity_revision
    }

    pub fn labels(&self) -> &LabelCatalog {
        &self.labels
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    // ------------------------------------------------------------------
    // Derived values
    // ------------------------------------------------------------------

    /// Resolve the current path, memoized when the `cache` feature is on.
    pub fn resolution(&mut self) -> Resolution {
        #[cfg(feature = "cache")]
        {
            let key = TrailCacheKey::new(
                self.path.clone(),
                self.catalog.version(),
                self.entity_revision,
            );
            let catalog = &self.catalog;
            let path = &self.path;
            let marker = self.options.edit_marker.as_str();
            return self.cache.get_or_resolve(key, || {
                SemanticResolver::new(catalog).edit_marker(marker).resolve(path)
            });
        }

        #[cfg(not(feature = "cache"))]
        self.resolve_uncached()
    }

    /// Resolve the current path without touching the cache.
    pub fn resolve_uncached(&self) -> Resolution {
        SemanticResolver::new(&self.catalog)
            .edit_marker(&self.options.edit_marker)
            .resolve(&self.path)
    }

    /// Breadcrumbs for the current location. Falls back to the path walk
    /// when no routes are registered.
    pub fn breadcrumbs(&mut self) -> Vec<BreadcrumbItem> {
        if self.catalog.is_empty() {
            return self.builder().from_path(&self.path);
        }
        let resolution = self.resolution();
        self.builder().from_resolution(&resolution)
    }

    /// Breadcrumbs from a caller-supplied list, home-prefixed.
    pub fn breadcrumbs_from(&self, items: Vec<BreadcrumbItem>) -> Vec<BreadcrumbItem> {
        self.builder().from_items(items)
    }

    pub fn is_active(&mut self, entry: &NavEntry) -> bool {
        let resolution = self.resolution();
        NavMatcher::from_resolution(&resolution).is_active(entry)
    }

    /// The active subset of `entries`, in their original order.
    pub fn active_entries<'e>(&mut self, entries: &'e [NavEntry]) -> Vec<&'e NavEntry> {
        let resolution = self.resolution();
        NavMatcher::from_resolution(&resolution).active_entries(entries)
    }

    #[cfg(feature = "cache")]
    pub fn cache_stats(&self) -> &CacheStats {
        self.cache.stats()
    }

    fn builder(&self) -> BreadcrumbBuilder<'_> {
        let mut builder = BreadcrumbBuilder::new(&self.catalog)
            .labels(&self.labels)
            .options(&self.options);
        if let Some(entity) = self.entity.as_deref() {
            builder = builder.entity(entity);
        }
        if let Some(resolver) = &self.label_resolver {
            builder = builder.label_resolver(resolver);
        }
        builder
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(RouteCatalog::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::SemanticKind;
    use std::collections::HashMap;

    fn state() -> NavigationState {
        NavigationState::new(RouteCatalog::from_routes(vec![
            RouteDescriptor::new("/", "home"),
            RouteDescriptor::new("/books", "books-list").entity("books"),
            RouteDescriptor::new("/books/:id", "book-show").entity("books"),
        ]))
    }

    #[test]
    fn test_navigate_splits_query_and_normalizes() {
        let mut state = state();
        state.navigate("books/7/?tab=reviews");

        assert_eq!(state.current_path(), "/books/7");
        assert_eq!(state.query().get("tab"), Some(&"reviews".to_string()));
    }

    #[test]
    fn test_resolution_follows_navigation() {
        let mut state = state();

        state.navigate("/books");
        assert_eq!(state.resolution().items()[0].kind, SemanticKind::EntityList);

        state.navigate("/books/7");
        assert_eq!(state.resolution().items()[1].kind, SemanticKind::EntityShow);
    }

    #[test]
    fn test_catalog_change_is_seen() {
        let mut state = NavigationState::new(RouteCatalog::new());
        state.navigate("/reports");
        assert!(state.resolution().items().is_empty());

        state.add_route(RouteDescriptor::new("/reports", "reports"));
        assert_eq!(state.resolution().active_route(), Some("reports"));
    }

    #[test]
    fn test_entity_revision_bumps() {
        let mut state = state();
        assert_eq!(state.entity_revision(), 0);

        state.set_entity(HashMap::from([("name".to_string(), "Dune".to_string())]));
        assert_eq!(state.entity_revision(), 1);

        state.clear_entity();
        state.clear_entity();
        assert_eq!(state.entity_revision(), 2);
    }

    #[cfg(feature = "cache")]
    #[test]
    fn test_repeated_reads_hit_cache() {
        let mut state = state();
        state.navigate("/books/7");

        let first = state.resolution();
        let second = state.resolution();
        assert_eq!(first, second);
        assert_eq!(state.cache_stats().misses, 1);
        assert_eq!(state.cache_stats().hits, 1);
    }
}
