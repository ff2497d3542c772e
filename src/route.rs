//! Route descriptors and the ordered route catalog.
//!
//! The host router registers one [`RouteDescriptor`] per page. Besides its
//! path template and unique name, a descriptor may declare the entity it
//! represents (`/books` and `/books/:id` both bind `books`) or an explicit
//! breadcrumb trail that replaces automatic derivation for that page.
//!
//! # Example
//!
//! ```
//! use navigator_trail::{RouteCatalog, RouteDescriptor};
//!
//! let catalog = RouteCatalog::from_routes(vec![
//!     RouteDescriptor::new("/", "home"),
//!     RouteDescriptor::new("/books", "books-list").entity("books"),
//!     RouteDescriptor::new("/books/:id", "book-show").entity("books"),
//! ]);
//!
//! assert!(catalog.has_route("home"));
//! let matched = catalog.match_segments(&["books", "7"]).unwrap();
//! assert_eq!(matched.route.name(), "book-show");
//! assert_eq!(matched.params.get("id"), Some(&"7".to_string()));
//! ```

use crate::display::BreadcrumbItem;
use crate::error::CatalogError;
use crate::matching::{match_template, split_path, RouteTemplate};
use crate::params::RouteParams;
use crate::{debug_log, warn_log};
use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Source of catalog generations, shared by every catalog in the process.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// A registered route: template, unique name, and breadcrumb metadata.
///
/// Immutable once registered; the resolver never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    template: RouteTemplate,
    name: String,
    entity: Option<String>,
    breadcrumb: Option<Vec<BreadcrumbItem>>,
}

impl RouteDescriptor {
    /// Create a descriptor from a template string.
    ///
    /// Malformed parameter markers are kept as literal segments and logged;
    /// use [`try_new`](Self::try_new) to reject them instead.
    pub fn new(template: &str, name: impl Into<String>) -> Self {
        Self::with_template(RouteTemplate::parse_lenient(template), name)
    }

    /// Create a descriptor, failing on a malformed template.
    pub fn try_new(template: &str, name: impl Into<String>) -> Result<Self, CatalogError> {
        Ok(Self::with_template(RouteTemplate::parse(template)?, name))
    }

    /// Create a descriptor from an already-parsed template.
    pub fn with_template(template: RouteTemplate, name: impl Into<String>) -> Self {
        Self {
            template,
            name: name.into(),
            entity: None,
            breadcrumb: None,
        }
    }

    /// Bind this route to an entity type.
    pub fn entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Replace automatic breadcrumb derivation for this route.
    pub fn breadcrumb(mut self, items: Vec<BreadcrumbItem>) -> Self {
        self.breadcrumb = Some(items);
        self
    }

    pub fn template(&self) -> &RouteTemplate {
        &self.template
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The entity binding, if any.
    pub fn entity_binding(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    /// The explicit breadcrumb override, if any.
    pub fn explicit_breadcrumb(&self) -> Option<&[BreadcrumbItem]> {
        self.breadcrumb.as_deref()
    }
}

/// A route that matched a concrete path prefix.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    /// The matched route
    pub route: &'a RouteDescriptor,
    /// Values captured by the template's parameter segments
    pub params: RouteParams,
}

/// Ordered catalog of routes. Order is significant: the first matching
/// template wins, so more specific templates must be registered first.
///
/// Every mutation stamps a new [`version`](Self::version), which memoizing
/// callers use as part of their cache key. Versions are drawn from a
/// process-wide counter, so two distinct catalogs never share one; a clone
/// shares its source's version until either side is mutated.
#[derive(Debug, Clone)]
pub struct RouteCatalog {
    routes: Vec<Arc<RouteDescriptor>>,
    version: u64,
}

impl RouteCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            version: next_generation(),
        }
    }

    /// Build a catalog, keeping every route even if names repeat.
    pub fn from_routes(routes: impl IntoIterator<Item = RouteDescriptor>) -> Self {
        let mut catalog = Self::new();
        for route in routes {
            catalog.add(route);
        }
        catalog
    }

    /// Build a catalog, failing on the first duplicate route name.
    pub fn try_from_routes(
        routes: impl IntoIterator<Item = RouteDescriptor>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for route in routes {
            catalog.try_add(route)?;
        }
        Ok(catalog)
    }

    /// Register a route. A repeated name is logged but still registered;
    /// lookups by name then return the first one.
    pub fn add(&mut self, route: RouteDescriptor) {
        if self.has_route(route.name()) {
            warn_log!(
                "Route name '{}' registered twice (template '{}')",
                route.name(),
                route.template()
            );
        }
        self.push(route);
    }

    /// Register a route, rejecting a repeated name.
    pub fn try_add(&mut self, route: RouteDescriptor) -> Result<(), CatalogError> {
        if self.has_route(route.name()) {
            return Err(CatalogError::DuplicateRouteName {
                name: route.name().to_string(),
            });
        }
        self.push(route);
        Ok(())
    }

    fn push(&mut self, route: RouteDescriptor) {
        debug_log!("Registering route '{}' at '{}'", route.name(), route.template());
        self.routes.push(Arc::new(route));
        self.version = next_generation();
    }

    /// Remove every route.
    pub fn clear(&mut self) {
        self.routes.clear();
        self.version = next_generation();
    }

    /// Does a route with this name exist?
    pub fn has_route(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Look up a route by name.
    pub fn get(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes
            .iter()
            .map(Deref::deref)
            .find(|route| route.name() == name)
    }

    /// Find the first route whose template matches `prefix` exactly.
    pub fn match_segments(&self, prefix: &[&str]) -> Option<RouteMatch<'_>> {
        self.routes.iter().find_map(|route| {
            match_template(route.template(), prefix).map(|params| RouteMatch {
                route: &**route,
                params,
            })
        })
    }

    /// Find the route matching a whole path.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_>> {
        self.match_segments(&split_path(path))
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter().map(Deref::deref)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Generation stamp, renewed by every mutation and unique across
    /// catalogs.
    pub fn version(&self) -> u64 {
        self.version
    }
}

impl Default for RouteCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<RouteDescriptor> for RouteCatalog {
    fn from_iter<I: IntoIterator<Item = RouteDescriptor>>(iter: I) -> Self {
        Self::from_routes(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn books_catalog() -> RouteCatalog {
        RouteCatalog::from_routes(vec![
            RouteDescriptor::new("/books", "books-list").entity("books"),
            RouteDescriptor::new("/books/new", "books-new"),
            RouteDescriptor::new("/books/:id", "book-show").entity("books"),
        ])
    }

    #[test]
    fn test_first_match_wins_in_catalog_order() {
        let catalog = books_catalog();

        let matched = catalog.match_segments(&["books", "new"]).unwrap();
        assert_eq!(matched.route.name(), "books-new");
        assert!(matched.params.is_empty());

        let matched = catalog.match_segments(&["books", "12"]).unwrap();
        assert_eq!(matched.route.name(), "book-show");
    }

    #[test]
    fn test_segment_count_must_agree() {
        let catalog = books_catalog();
        assert!(catalog.match_segments(&["books", "12", "edit"]).is_none());
        assert!(catalog.match_segments(&[]).is_none());
    }

    #[test]
    fn test_no_match_on_empty_catalog() {
        assert!(RouteCatalog::new().match_path("/books").is_none());
    }

    #[test]
    fn test_version_changes_on_mutation() {
        let mut catalog = RouteCatalog::new();
        let created = catalog.version();

        catalog.add(RouteDescriptor::new("/", "home"));
        let added = catalog.version();
        assert_ne!(added, created);

        catalog.clear();
        assert_ne!(catalog.version(), added);
        assert_ne!(catalog.version(), created);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_versions_are_unique_across_catalogs() {
        let first = RouteCatalog::from_routes(vec![RouteDescriptor::new("/books", "books-list")]);
        let second = RouteCatalog::from_routes(vec![RouteDescriptor::new("/books", "library")]);
        assert_ne!(first.version(), second.version());
        assert_ne!(RouteCatalog::new().version(), RouteCatalog::new().version());
    }

    #[test]
    fn test_clone_shares_version_until_mutated() {
        let original = books_catalog();
        let mut copy = original.clone();
        assert_eq!(copy.version(), original.version());

        copy.add(RouteDescriptor::new("/authors", "authors"));
        assert_ne!(copy.version(), original.version());
    }

    #[test]
    fn test_try_add_rejects_duplicates_without_bumping_version() {
        let mut catalog = books_catalog();
        let version = catalog.version();

        let result = catalog.try_add(RouteDescriptor::new("/novels", "books-list"));
        assert!(result.is_err());
        assert_eq!(catalog.version(), version);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_add_keeps_duplicates_and_get_returns_first() {
        let mut catalog = books_catalog();
        catalog.add(RouteDescriptor::new("/novels", "books-list"));

        assert_eq!(catalog.len(), 4);
        assert_eq!(
            catalog.get("books-list").unwrap().template().to_string(),
            "/books"
        );
    }

    #[test]
    fn test_try_new_rejects_bad_template() {
        assert!(RouteDescriptor::try_new("/books/:", "broken").is_err());
        assert!(RouteDescriptor::try_new("/books/:id", "book-show").is_ok());
    }
}
