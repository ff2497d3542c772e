//! Active-state matching for navigation menus.
//!
//! A menu entry is highlighted based on the current semantic trail:
//!
//! | Entry                      | Active when                                        |
//! |----------------------------|----------------------------------------------------|
//! | `exact` + route            | the current route name equals the entry's route    |
//! | entity-scoped              | the *first* entity item of the trail has its entity |
//! | route-scoped               | the trail passes through the entry's route         |
//! | neither entity nor route   | never                                              |
//!
//! Entity-scoped entries deliberately ignore route names: a nested child page
//! (`/authors/1/books/2`) activates `authors`, not `books`.
//!
//! On pages with an explicit breadcrumb there are no semantic items; the
//! trail's routes are the page's own route plus the routes its items link to
//! (see [`Resolution::route_names`]).
//!
//! Permission filtering of entries is the host's concern.

use crate::semantic::{Resolution, SemanticItem};
use crate::trace_log;

/// A navigation menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavEntry {
    pub label: String,
    /// Route the entry links to
    pub route: Option<String>,
    /// Entity the entry represents
    pub entity: Option<String>,
    /// Only active on the entry's own route
    pub exact: bool,
    pub icon: Option<String>,
}

impl NavEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    pub fn exact(mut self) -> Self {
        self.exact = true;
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Decide whether `entry` is active for the current route and trail.
///
/// ```
/// use navigator_trail::{is_nav_active, NavEntry, SemanticItem, SemanticKind};
///
/// let trail = vec![
///     SemanticItem::entity(SemanticKind::EntityList, "books").with_route("books-list"),
/// ];
///
/// assert!(is_nav_active(&NavEntry::new("Books").entity("books"), Some("books-list"), &trail));
/// assert!(is_nav_active(&NavEntry::new("All").route("books-list"), Some("books-list"), &trail));
/// assert!(!is_nav_active(&NavEntry::new("Nothing"), Some("books-list"), &trail));
/// ```
pub fn is_nav_active(entry: &NavEntry, current_route: Option<&str>, trail: &[SemanticItem]) -> bool {
    entry_active(entry, current_route, trail, &trail_routes(trail))
}

fn trail_routes(trail: &[SemanticItem]) -> Vec<&str> {
    trail.iter().filter_map(|item| item.route.as_deref()).collect()
}

fn entry_active(
    entry: &NavEntry,
    current_route: Option<&str>,
    trail: &[SemanticItem],
    routes: &[&str],
) -> bool {
    let active = match (entry.exact, entry.route.as_deref(), entry.entity.as_deref()) {
        (true, Some(route), _) => current_route == Some(route),
        (_, _, Some(entity)) => trail
            .iter()
            .find(|item| item.kind.is_entity())
            .is_some_and(|item| item.entity.as_deref() == Some(entity)),
        (_, Some(route), None) => routes.contains(&route),
        (_, None, None) => false,
    };

    trace_log!("Nav entry '{}' active: {}", entry.label, active);
    active
}

/// Matches entries against one resolved location.
#[derive(Debug, Clone)]
pub struct NavMatcher<'a> {
    current_route: Option<&'a str>,
    trail: &'a [SemanticItem],
    routes: Vec<&'a str>,
}

impl<'a> NavMatcher<'a> {
    pub fn new(current_route: Option<&'a str>, trail: &'a [SemanticItem]) -> Self {
        Self {
            current_route,
            trail,
            routes: trail_routes(trail),
        }
    }

    /// Use the resolution's active route, semantic items and route names.
    pub fn from_resolution(resolution: &'a Resolution) -> Self {
        Self {
            current_route: resolution.active_route(),
            trail: resolution.items(),
            routes: resolution.route_names(),
        }
    }

    pub fn is_active(&self, entry: &NavEntry) -> bool {
        entry_active(entry, self.current_route, self.trail, &self.routes)
    }

    /// The active subset of `entries`, in their original order.
    pub fn active_entries<'e>(&self, entries: &'e [NavEntry]) -> Vec<&'e NavEntry> {
        entries.iter().filter(|entry| self.is_active(entry)).collect()
    }
}
