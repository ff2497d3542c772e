//! Renderable breadcrumbs.
//!
//! Two independent strategies produce the same output shape, a list of
//! [`BreadcrumbItem`]s:
//!
//! | Strategy  | Input                          | Identifier detection        |
//! |-----------|--------------------------------|-----------------------------|
//! | Semantic  | a [`Resolution`] from routes   | route templates (`:id`)     |
//! | Path walk | the raw path only              | [`looks_like_identifier`]   |
//!
//! [`BreadcrumbBuilder::build`] picks the semantic strategy whenever the
//! catalog has routes, and the path walk otherwise. Both prepend a home item
//! when the catalog has a route named [`ResolverOptions::home_route`].
//!
//! Labels starting with the dynamic sentinel (`:` by default) name a field of
//! the loaded entity: `:title` renders the entity's `title`, or stays `:title`
//! when no entity or no such field is available.
//!
//! # Example
//!
//! ```
//! use navigator_trail::{BreadcrumbBuilder, RouteCatalog, RouteDescriptor};
//! use std::collections::HashMap;
//!
//! let catalog = RouteCatalog::from_routes(vec![
//!     RouteDescriptor::new("/", "home"),
//!     RouteDescriptor::new("/books", "books-list").entity("books"),
//!     RouteDescriptor::new("/books/:id", "book-show").entity("books"),
//! ]);
//! let book = HashMap::from([("title".to_string(), "Dune".to_string())]);
//!
//! let crumbs = BreadcrumbBuilder::new(&catalog).entity(&book).build("/books/7");
//! let labels: Vec<_> = crumbs.iter().map(|c| c.label.as_str()).collect();
//! assert_eq!(labels, ["Home", "Books", "Dune"]);
//! assert!(crumbs[2].target.is_none());
//! ```

use crate::action::ActionKind;
use crate::identifier::looks_like_identifier;
use crate::matching::split_path;
use crate::params::RouteParams;
use crate::route::RouteCatalog;
use crate::semantic::{
    Resolution, SemanticItem, SemanticKind, SemanticResolver, DEFAULT_EDIT_MARKER,
};
use crate::{debug_log, trace_log};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

// ============================================================================
// Items
// ============================================================================

/// Where a breadcrumb links to. The renderer turns it into a concrete link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreadcrumbTarget {
    /// A named route plus the parameters needed to build its URL
    Route { name: String, params: RouteParams },
    /// A literal path, used by the path-walk strategy
    Path(String),
}

impl BreadcrumbTarget {
    /// Route name, if this target is a route.
    pub fn route_name(&self) -> Option<&str> {
        match self {
            BreadcrumbTarget::Route { name, .. } => Some(name),
            BreadcrumbTarget::Path(_) => None,
        }
    }
}

/// One renderable breadcrumb entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub label: String,
    pub target: Option<BreadcrumbTarget>,
    pub icon: Option<String>,
}

impl BreadcrumbItem {
    /// An unlinked item.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: None,
            icon: None,
        }
    }

    /// Link to a route without parameters.
    pub fn link_route(self, name: impl Into<String>) -> Self {
        self.link_route_with(name, RouteParams::new())
    }

    /// Link to a route with parameters.
    pub fn link_route_with(mut self, name: impl Into<String>, params: RouteParams) -> Self {
        self.target = Some(BreadcrumbTarget::Route {
            name: name.into(),
            params,
        });
        self
    }

    /// Link to a literal path.
    pub fn link_path(mut self, path: impl Into<String>) -> Self {
        self.target = Some(BreadcrumbTarget::Path(path.into()));
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    fn icon_opt(mut self, icon: Option<&str>) -> Self {
        self.icon = icon.map(String::from);
        self
    }
}

// ============================================================================
// Entity data
// ============================================================================

/// Read access to the currently loaded record, for labels only.
pub trait EntityData {
    /// The field's value rendered as text, if present.
    fn field(&self, name: &str) -> Option<String>;
}

impl EntityData for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EntityData for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Strings verbatim, numbers and booleans stringified, anything else absent.
#[cfg(feature = "json")]
impl EntityData for serde_json::Value {
    fn field(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// Host-supplied hydrator turning the loaded entity into its display label.
pub type LabelResolver = Arc<dyn Fn(&dyn EntityData) -> Option<String> + Send + Sync>;

/// Wrap a closure as a [`LabelResolver`].
pub fn label_resolver<F>(f: F) -> LabelResolver
where
    F: Fn(&dyn EntityData) -> Option<String> + Send + Sync + 'static,
{
    Arc::new(f)
}

// ============================================================================
// Configuration
// ============================================================================

/// Static display labels and icons.
///
/// Keys are route names, entity names, action keywords (`edit`, `create`,
/// `delete`, `show`), raw path segments, or the home route name. Icons for
/// entity items try the route name before the entity name.
#[derive(Debug, Clone, Default)]
pub struct LabelCatalog {
    labels: HashMap<String, String>,
    icons: HashMap<String, String>,
}

impl LabelCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(key.into(), label.into());
        self
    }

    pub fn icon(mut self, key: impl Into<String>, icon: impl Into<String>) -> Self {
        self.icons.insert(key.into(), icon.into());
        self
    }

    pub fn label_for(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    pub fn icon_for(&self, key: &str) -> Option<&str> {
        self.icons.get(key).map(String::as_str)
    }

    /// First icon found among `keys`.
    fn first_icon<'k>(&self, keys: impl IntoIterator<Item = Option<&'k str>>) -> Option<&str> {
        keys.into_iter().flatten().find_map(|key| self.icon_for(key))
    }
}

/// Tunables shared by the resolver and the display adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Route name whose presence adds a leading home item
    pub home_route: String,
    /// Prefix marking a label as an entity field reference
    pub dynamic_prefix: char,
    /// Route-name substring that marks an instance route as an edit page
    pub edit_marker: String,
    /// Entity fields tried, in order, when no label resolver is set
    pub label_fields: Vec<String>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            home_route: "home".to_string(),
            dynamic_prefix: ':',
            edit_marker: DEFAULT_EDIT_MARKER.to_string(),
            label_fields: vec!["name".to_string(), "title".to_string(), "label".to_string()],
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Turns paths or resolutions into breadcrumb items.
#[derive(Clone)]
pub struct BreadcrumbBuilder<'a> {
    catalog: &'a RouteCatalog,
    labels: Option<&'a LabelCatalog>,
    entity: Option<&'a dyn EntityData>,
    label_resolver: Option<&'a LabelResolver>,
    options: Cow<'a, ResolverOptions>,
}

impl<'a> BreadcrumbBuilder<'a> {
    pub fn new(catalog: &'a RouteCatalog) -> Self {
        Self {
            catalog,
            labels: None,
            entity: None,
            label_resolver: None,
            options: Cow::Owned(ResolverOptions::default()),
        }
    }

    pub fn labels(mut self, labels: &'a LabelCatalog) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn entity(mut self, entity: &'a dyn EntityData) -> Self {
        self.entity = Some(entity);
        self
    }

    pub fn label_resolver(mut self, resolver: &'a LabelResolver) -> Self {
        self.label_resolver = Some(resolver);
        self
    }

    pub fn options(mut self, options: &'a ResolverOptions) -> Self {
        self.options = Cow::Borrowed(options);
        self
    }

    /// Build breadcrumbs for `path`, choosing the strategy by whether route
    /// metadata is available.
    pub fn build(&self, path: &str) -> Vec<BreadcrumbItem> {
        if self.catalog.is_empty() {
            debug_log!("No routes registered, walking '{}' literally", path);
            return self.from_path(path);
        }

        let resolution = SemanticResolver::new(self.catalog)
            .edit_marker(&self.options.edit_marker)
            .resolve(path);
        self.from_resolution(&resolution)
    }

    /// Display a resolution. Explicit overrides keep their items as given,
    /// apart from dynamic labels and the home prefix.
    pub fn from_resolution(&self, resolution: &Resolution) -> Vec<BreadcrumbItem> {
        match resolution {
            Resolution::Explicit { items, .. } => self.from_items(items.clone()),
            Resolution::Semantic { items, .. } => self.from_semantic(items),
        }
    }

    /// Display a semantic trail. The last item is the current page and
    /// carries no target.
    pub fn from_semantic(&self, trail: &[SemanticItem]) -> Vec<BreadcrumbItem> {
        let mut crumbs: Vec<BreadcrumbItem> = self.home_item().into_iter().collect();

        // only the innermost instance is the loaded entity
        let labelled_instance = trail.iter().rposition(|item| item.id.is_some());

        for (index, item) in trail.iter().enumerate() {
            let hydrate = labelled_instance == Some(index);
            match item.kind {
                SemanticKind::Route => crumbs.push(self.route_crumb(item)),
                SemanticKind::EntityList => crumbs.push(self.collection_crumb(item)),
                SemanticKind::EntityShow => crumbs.push(self.instance_crumb(item, hydrate)),
                SemanticKind::EntityEdit => {
                    crumbs.push(self.instance_crumb(item, hydrate));
                    crumbs.push(self.action_crumb(ActionKind::Edit));
                }
                SemanticKind::EntityDelete => {
                    crumbs.push(self.instance_crumb(item, hydrate));
                    crumbs.push(self.action_crumb(ActionKind::Delete));
                }
                SemanticKind::EntityCreate => {
                    if item.route.is_some() {
                        crumbs.push(self.collection_crumb(item));
                    }
                    crumbs.push(self.action_crumb(ActionKind::Create));
                }
            }
        }

        if let Some(last) = crumbs.last_mut() {
            last.target = None;
        }
        crumbs
    }

    /// Path-walk strategy: no route metadata, identifiers detected
    /// heuristically. Identifier segments show the entity label or are
    /// skipped; the final segment is never linked.
    pub fn from_path(&self, path: &str) -> Vec<BreadcrumbItem> {
        let segments = split_path(path);
        let entity_label = self.entity_label();
        let mut crumbs: Vec<BreadcrumbItem> = self.home_item().into_iter().collect();

        for (index, segment) in segments.iter().copied().enumerate() {
            let is_last = index + 1 == segments.len();
            let href = format!("/{}", segments[..=index].join("/"));

            let crumb = if looks_like_identifier(segment) {
                let Some(label) = entity_label.as_deref() else {
                    trace_log!("Skipping identifier segment '{}'", segment);
                    continue;
                };
                BreadcrumbItem::new(label)
            } else {
                let label = self
                    .label_for(segment)
                    .map_or_else(|| titleize(segment), String::from);
                BreadcrumbItem::new(label).icon_opt(self.icon_for([Some(segment)]))
            };

            crumbs.push(if is_last { crumb } else { crumb.link_path(href) });
        }

        crumbs
    }

    /// Manual override: the caller's items, home-prefixed, with dynamic
    /// labels resolved against the entity.
    pub fn from_items(&self, items: Vec<BreadcrumbItem>) -> Vec<BreadcrumbItem> {
        self.home_item()
            .into_iter()
            .chain(items.into_iter().map(|mut item| {
                item.label = self.resolve_dynamic_label(&item.label);
                item
            }))
            .collect()
    }

    /// The leading home item, if the catalog has a home route.
    pub fn home_item(&self) -> Option<BreadcrumbItem> {
        let home = self.options.home_route.as_str();
        if !self.catalog.has_route(home) {
            return None;
        }
        let label = self.label_for(home).unwrap_or("Home");
        Some(
            BreadcrumbItem::new(label)
                .link_route(home)
                .icon_opt(self.icon_for([Some(home)])),
        )
    }

    /// Resolve a `:field` label against the entity, or return it unchanged.
    pub fn resolve_dynamic_label(&self, label: &str) -> String {
        label
            .strip_prefix(self.options.dynamic_prefix)
            .filter(|field| !field.is_empty())
            .and_then(|field| self.entity?.field(field))
            .unwrap_or_else(|| label.to_string())
    }

    /// The loaded entity's label: custom resolver first, then the configured
    /// label fields.
    pub fn entity_label(&self) -> Option<String> {
        let entity = self.entity?;
        if let Some(resolver) = self.label_resolver {
            return resolver(entity);
        }
        self.options
            .label_fields
            .iter()
            .find_map(|field| entity.field(field))
    }

    fn route_crumb(&self, item: &SemanticItem) -> BreadcrumbItem {
        let name = item.route.as_deref().unwrap_or_default();
        let label = self
            .label_for(name)
            .map_or_else(|| titleize(name), String::from);
        BreadcrumbItem::new(label)
            .link_route_with(name, item.params.clone())
            .icon_opt(self.icon_for([Some(name)]))
    }

    fn collection_crumb(&self, item: &SemanticItem) -> BreadcrumbItem {
        let entity = item.entity.as_deref().unwrap_or_default();
        let label = self
            .label_for(entity)
            .map_or_else(|| titleize(entity), String::from);
        self.link(BreadcrumbItem::new(label), item)
            .icon_opt(self.icon_for([item.route.as_deref(), Some(entity)]))
    }

    fn instance_crumb(&self, item: &SemanticItem, hydrate: bool) -> BreadcrumbItem {
        let label = hydrate
            .then(|| self.entity_label())
            .flatten()
            .or_else(|| item.id.clone())
            .unwrap_or_else(|| titleize(item.entity.as_deref().unwrap_or_default()));
        self.link(BreadcrumbItem::new(label), item)
            .icon_opt(self.icon_for([item.route.as_deref(), item.entity.as_deref()]))
    }

    fn action_crumb(&self, action: ActionKind) -> BreadcrumbItem {
        let keyword = action.keyword();
        let label = self
            .label_for(keyword)
            .map_or_else(|| titleize(keyword), String::from);
        BreadcrumbItem::new(label).icon_opt(self.icon_for([Some(keyword)]))
    }

    fn link(&self, crumb: BreadcrumbItem, item: &SemanticItem) -> BreadcrumbItem {
        match &item.route {
            Some(route) => crumb.link_route_with(route.clone(), item.params.clone()),
            None => crumb,
        }
    }

    fn label_for(&self, key: &str) -> Option<&'a str> {
        self.labels?.label_for(key)
    }

    fn icon_for<'k>(&self, keys: impl IntoIterator<Item = Option<&'k str>>) -> Option<&'a str> {
        self.labels?.first_icon(keys)
    }
}

/// `user-settings` → `User Settings`.
///
/// ```
/// use navigator_trail::titleize;
///
/// assert_eq!(titleize("user-settings"), "User Settings");
/// assert_eq!(titleize("books"), "Books");
/// ```
pub fn titleize(segment: &str) -> String {
    segment
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
