//! Path-to-semantics resolution.
//!
//! # Architecture
//!
//! A path is walked once, left to right. Each segment extends the current
//! prefix and is either absorbed as an action keyword, matched against the
//! route catalog, or remembered as a pending identifier. The result is a
//! [`Resolution`]: either the active route's explicit breadcrumb override,
//! or an ordered trail of [`SemanticItem`]s decoupled from display concerns.
//!
//! # Example
//!
//! Given routes:
//! ```text
//! /books       books-list  (entity: books)
//! /books/:id   book-edit   (entity: books)
//! ```
//!
//! For path `/books/1/edit` the trail is:
//! ```text
//! [0] entity-list  entity=books          route=books-list
//! [1] entity-edit  entity=books  id=1    route=book-edit
//! ```
//!
//! `books` matches the collection route. `1` matches the `:id` route, and the
//! lookahead sees `edit` so the instance is classified as an edit directly.
//! `edit` is then an action keyword with no pending identifier whose
//! previous item already has an id, so it is absorbed without effect.
//!
//! # Walk state
//!
//! Only two values survive between segments, both scoped to one call:
//!
//! - `last_entity` — entity binding of the most recent entity route match
//! - `pending_id` — an unmatched segment after an entity, awaiting an action

use crate::action::ActionKind;
use crate::display::BreadcrumbItem;
use crate::matching::split_path;
use crate::params::RouteParams;
use crate::route::RouteCatalog;
use crate::{debug_log, trace_log};
use std::fmt;

/// Default marker looked for in route names to infer an edit page.
pub const DEFAULT_EDIT_MARKER: &str = "edit";

/// Classification of one path segment, or of a merged group of segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticKind {
    Route,
    EntityList,
    EntityShow,
    EntityEdit,
    EntityCreate,
    EntityDelete,
}

impl SemanticKind {
    /// Every kind except [`Route`](Self::Route) describes an entity.
    pub fn is_entity(self) -> bool {
        !matches!(self, SemanticKind::Route)
    }

    /// Kebab-case name, e.g. `entity-edit`.
    pub fn as_str(self) -> &'static str {
        match self {
            SemanticKind::Route => "route",
            SemanticKind::EntityList => "entity-list",
            SemanticKind::EntityShow => "entity-show",
            SemanticKind::EntityEdit => "entity-edit",
            SemanticKind::EntityCreate => "entity-create",
            SemanticKind::EntityDelete => "entity-delete",
        }
    }
}

impl fmt::Display for SemanticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of a semantic trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticItem {
    pub kind: SemanticKind,
    /// Entity binding, for entity kinds
    pub entity: Option<String>,
    /// Literal record identifier taken from the path
    pub id: Option<String>,
    /// Name of the matched route, if the item came from a route match
    pub route: Option<String>,
    /// Parameters captured by the matched route's template
    pub params: RouteParams,
}

impl SemanticItem {
    /// A generic (non-entity) route item.
    pub fn route(name: impl Into<String>) -> Self {
        Self {
            kind: SemanticKind::Route,
            entity: None,
            id: None,
            route: Some(name.into()),
            params: RouteParams::new(),
        }
    }

    /// An entity item of the given kind.
    pub fn entity(kind: SemanticKind, entity: impl Into<String>) -> Self {
        Self {
            kind,
            entity: Some(entity.into()),
            id: None,
            route: None,
            params: RouteParams::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn with_params(mut self, params: RouteParams) -> Self {
        self.params = params;
        self
    }
}

/// Outcome of resolving one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The active route declared its own breadcrumb; returned verbatim
    Explicit {
        route: String,
        items: Vec<BreadcrumbItem>,
    },
    /// Trail derived segment by segment
    Semantic {
        /// Route matching the whole path, if any
        active_route: Option<String>,
        items: Vec<SemanticItem>,
    },
}

impl Resolution {
    /// Semantic items of the trail; empty for explicit overrides.
    pub fn items(&self) -> &[SemanticItem] {
        match self {
            Resolution::Explicit { .. } => &[],
            Resolution::Semantic { items, .. } => items,
        }
    }

    /// Name of the route matching the whole path.
    pub fn active_route(&self) -> Option<&str> {
        match self {
            Resolution::Explicit { route, .. } => Some(route),
            Resolution::Semantic { active_route, .. } => active_route.as_deref(),
        }
    }

    /// Route names the trail passes through. For an explicit override these
    /// are the active route plus every route its items link to.
    pub fn route_names(&self) -> Vec<&str> {
        match self {
            Resolution::Explicit { route, items } => std::iter::once(route.as_str())
                .chain(
                    items
                        .iter()
                        .filter_map(|item| item.target.as_ref()?.route_name()),
                )
                .collect(),
            Resolution::Semantic { items, .. } => items
                .iter()
                .filter_map(|item| item.route.as_deref())
                .collect(),
        }
    }

    pub fn is_explicit(&self) -> bool {
        matches!(self, Resolution::Explicit { .. })
    }
}

/// Resolve `path` against `catalog` with the default edit marker.
///
/// ```
/// use navigator_trail::{resolve_path, RouteCatalog, RouteDescriptor, SemanticKind};
///
/// let catalog = RouteCatalog::from_routes(vec![
///     RouteDescriptor::new("/books", "books-list").entity("books"),
/// ]);
///
/// let resolution = resolve_path(&catalog, "/books/create");
/// let items = resolution.items();
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].kind, SemanticKind::EntityCreate);
/// ```
pub fn resolve_path(catalog: &RouteCatalog, path: &str) -> Resolution {
    SemanticResolver::new(catalog).resolve(path)
}

/// Resolver bound to a catalog.
///
/// Holds no state between calls; resolving the same path twice yields the
/// same trail.
#[derive(Debug, Clone, Copy)]
pub struct SemanticResolver<'a> {
    catalog: &'a RouteCatalog,
    edit_marker: &'a str,
}

impl<'a> SemanticResolver<'a> {
    pub fn new(catalog: &'a RouteCatalog) -> Self {
        Self {
            catalog,
            edit_marker: DEFAULT_EDIT_MARKER,
        }
    }

    /// Substring (case-insensitive) that marks a route name as an edit page.
    pub fn edit_marker(mut self, marker: &'a str) -> Self {
        self.edit_marker = marker;
        self
    }

    pub fn resolve(&self, path: &str) -> Resolution {
        let segments = split_path(path);

        let active = self.catalog.match_segments(&segments);
        if let Some(active) = &active {
            if let Some(items) = active.route.explicit_breadcrumb() {
                debug_log!(
                    "Route '{}' declares an explicit breadcrumb ({} items)",
                    active.route.name(),
                    items.len()
                );
                return Resolution::Explicit {
                    route: active.route.name().to_string(),
                    items: items.to_vec(),
                };
            }
        }
        let active_route = active.map(|m| m.route.name().to_string());

        let items = self.walk(&segments);

        debug_log!(
            "Resolved '{}' → [{}]",
            path,
            items
                .iter()
                .map(|item| item.kind.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Resolution::Semantic {
            active_route,
            items,
        }
    }

    /// Walk the segments and build the trail. Never emits more items than
    /// there are segments.
    fn walk(&self, segments: &[&str]) -> Vec<SemanticItem> {
        let mut trail: Vec<SemanticItem> = Vec::with_capacity(segments.len());
        let mut last_entity: Option<String> = None;
        let mut pending_id: Option<String> = None;

        for (index, segment) in segments.iter().copied().enumerate() {
            let prefix = &segments[..=index];

            if let (Some(action), Some(entity)) =
                (ActionKind::from_segment(segment), last_entity.as_deref())
            {
                if let Some(id) = pending_id.take() {
                    trace_log!("'{}' confirms pending id '{}' of '{}'", segment, id, entity);
                    trail.push(SemanticItem::entity(action.semantic_kind(), entity).with_id(id));
                } else {
                    merge_action(&mut trail, action);
                }
                continue;
            }

            let Some(matched) = self.catalog.match_segments(prefix) else {
                if last_entity.is_some() {
                    trace_log!("'{}' held as pending id", segment);
                    pending_id = Some(segment.to_string());
                } else {
                    trace_log!("'{}' dropped: no route and no entity context", segment);
                }
                continue;
            };

            let route = matched.route;
            let Some(entity) = route.entity_binding() else {
                trace_log!("'{}' matched plain route '{}'", segment, route.name());
                trail.push(SemanticItem::route(route.name()).with_params(matched.params));
                continue;
            };

            last_entity = Some(entity.to_string());
            pending_id = None;

            let item = if route.template().ends_with_param() {
                let kind = self.instance_kind(route.name(), segments.get(index + 1).copied());
                SemanticItem::entity(kind, entity).with_id(segment)
            } else {
                SemanticItem::entity(SemanticKind::EntityList, entity)
            };
            trace_log!(
                "'{}' matched entity route '{}' as {}",
                segment,
                route.name(),
                item.kind
            );
            trail.push(item.with_route(route.name()).with_params(matched.params));
        }

        trail
    }

    /// Kind for an instance segment: the following action keyword wins, then
    /// an edit marker in the route name, then `entity-show`.
    fn instance_kind(&self, route_name: &str, next: Option<&str>) -> SemanticKind {
        if let Some(action) = next.and_then(ActionKind::from_segment) {
            return action.semantic_kind();
        }
        if !self.edit_marker.is_empty()
            && route_name
                .to_ascii_lowercase()
                .contains(&self.edit_marker.to_ascii_lowercase())
        {
            return SemanticKind::EntityEdit;
        }
        SemanticKind::EntityShow
    }
}

/// Fold an action keyword into the last item when it is an entity item
/// without an id (e.g. `/books` + `create`). Otherwise the keyword is ignored.
fn merge_action(trail: &mut [SemanticItem], action: ActionKind) {
    match trail.last_mut() {
        Some(last) if last.kind.is_entity() && last.id.is_none() => {
            trace_log!("'{}' merged into previous {} item", action, last.kind);
            last.kind = action.semantic_kind();
        }
        _ => {
            trace_log!("'{}' not applicable here, ignored", action);
        }
    }
}
