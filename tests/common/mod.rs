//! Test utilities for resolver, breadcrumb and navigation tests
//!
//! Provides catalog fixtures and assertion helpers shared by the test crates.

#![allow(dead_code)]

use navigator_trail::*;
use std::collections::HashMap;

/// Route resolver logs to the test output (`RUST_LOG=navigator_trail=trace`)
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `/books` collection bound to the `books` entity
pub fn books_list_only() -> RouteCatalog {
    RouteCatalog::from_routes(vec![
        RouteDescriptor::new("/books", "books-list").entity("books")
    ])
}

/// Collection plus an instance route whose name marks it as an edit page
pub fn books_with_edit() -> RouteCatalog {
    RouteCatalog::from_routes(vec![
        RouteDescriptor::new("/books", "books-list").entity("books"),
        RouteDescriptor::new("/books/:id", "book-edit").entity("books"),
    ])
}

/// Two plain routes, parent and child
pub fn settings_catalog() -> RouteCatalog {
    RouteCatalog::from_routes(vec![
        RouteDescriptor::new("/settings", "settings"),
        RouteDescriptor::new("/settings/profile", "settings-profile"),
    ])
}

/// A small library app: home, authors with nested books, settings
pub fn library_catalog() -> RouteCatalog {
    RouteCatalog::from_routes(vec![
        RouteDescriptor::new("/", "home"),
        RouteDescriptor::new("/authors", "authors-list").entity("authors"),
        RouteDescriptor::new("/authors/:author", "author-show").entity("authors"),
        RouteDescriptor::new("/authors/:author/books", "author-books").entity("books"),
        RouteDescriptor::new("/authors/:author/books/:id", "author-book-show").entity("books"),
        RouteDescriptor::new("/books", "books-list").entity("books"),
        RouteDescriptor::new("/books/:id", "book-show").entity("books"),
        RouteDescriptor::new("/settings", "settings"),
        RouteDescriptor::new("/settings/profile", "settings-profile"),
    ])
}

/// Entity data with a single `name` field
pub fn named(name: &str) -> HashMap<String, String> {
    HashMap::from([("name".to_string(), name.to_string())])
}

/// Kinds of a trail, in order
pub fn kinds(items: &[SemanticItem]) -> Vec<SemanticKind> {
    items.iter().map(|item| item.kind).collect()
}

/// Labels of a breadcrumb list, in order
pub fn labels(crumbs: &[BreadcrumbItem]) -> Vec<&str> {
    crumbs.iter().map(|crumb| crumb.label.as_str()).collect()
}

/// Route name a breadcrumb links to, if any
pub fn target_route(crumb: &BreadcrumbItem) -> Option<&str> {
    crumb.target.as_ref().and_then(BreadcrumbTarget::route_name)
}

/// Assert a trail item's classification fields, ignoring params
pub fn assert_item(
    item: &SemanticItem,
    kind: SemanticKind,
    entity: Option<&str>,
    id: Option<&str>,
    route: Option<&str>,
) {
    assert_eq!(item.kind, kind, "kind of {:?}", item);
    assert_eq!(item.entity.as_deref(), entity, "entity of {:?}", item);
    assert_eq!(item.id.as_deref(), id, "id of {:?}", item);
    assert_eq!(item.route.as_deref(), route, "route of {:?}", item);
}
