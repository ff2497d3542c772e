//! # navigator-trail
//!
//! Turns a URL path and a catalog of named route templates into a semantic
//! trail: an ordered classification of the path as generic routes, entity
//! collections and entity instances being shown, edited, created or deleted.
//! Two consumers sit on top of the trail:
//!
//! - breadcrumbs ([`BreadcrumbBuilder`]) with labels, icons and link targets
//! - active-state matching for navigation menus ([`NavMatcher`])
//!
//! ```
//! use navigator_trail::{resolve_path, RouteCatalog, RouteDescriptor, SemanticKind};
//!
//! let catalog = RouteCatalog::from_routes(vec![
//!     RouteDescriptor::new("/books", "books-list").entity("books"),
//!     RouteDescriptor::new("/books/:id", "book-edit").entity("books"),
//! ]);
//!
//! let resolution = resolve_path(&catalog, "/books/1/edit");
//! let kinds: Vec<_> = resolution.items().iter().map(|item| item.kind).collect();
//! assert_eq!(kinds, [SemanticKind::EntityList, SemanticKind::EntityEdit]);
//! ```
//!
//! Everything here is synchronous and pure over its inputs. Hosts that
//! re-render often can memoize through [`NavigationState`] (feature `cache`).
//!
//! # Features
//!
//! | Feature   | Default | Purpose                                          |
//! |-----------|---------|--------------------------------------------------|
//! | `log`     | yes     | log through the `log` crate                      |
//! | `tracing` | no      | log through the `tracing` crate instead          |
//! | `cache`   | yes     | LRU memoization of resolutions (`lru`)           |
//! | `json`    | no      | [`EntityData`] for `serde_json::Value`           |

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod logging;

pub mod action;
#[cfg(feature = "cache")]
pub mod cache;
pub mod display;
pub mod error;
pub mod identifier;
pub mod matching;
pub mod nav;
pub mod params;
pub mod route;
pub mod semantic;
pub mod state;

pub use action::ActionKind;
pub use display::{
    label_resolver, titleize, BreadcrumbBuilder, BreadcrumbItem, BreadcrumbTarget, EntityData,
    LabelCatalog, LabelResolver, ResolverOptions,
};
pub use error::CatalogError;
pub use identifier::{classify_identifier, looks_like_identifier, IdentifierShape};
pub use matching::{
    extract_param_name, is_param_segment, match_template, normalize_path, split_location,
    split_path, RouteTemplate, SegmentPattern,
};
pub use nav::{is_nav_active, NavEntry, NavMatcher};
pub use params::{QueryParams, RouteParams};
pub use route::{RouteCatalog, RouteDescriptor, RouteMatch};
pub use semantic::{resolve_path, Resolution, SemanticItem, SemanticKind, SemanticResolver};
pub use state::NavigationState;
