//! Errors raised while building a route catalog.
//!
//! Resolution itself never fails: unknown paths degrade to shorter trails.
//! The only fallible surface is the host registering routes, which is
//! validated by [`RouteTemplate::parse`](crate::RouteTemplate::parse) and
//! [`RouteCatalog::try_add`](crate::RouteCatalog::try_add).
//!
//! # Examples
//!
//! ```
//! use navigator_trail::{CatalogError, RouteCatalog, RouteDescriptor};
//!
//! let mut catalog = RouteCatalog::new();
//! catalog.try_add(RouteDescriptor::new("/books", "books-list")).unwrap();
//!
//! let err = catalog
//!     .try_add(RouteDescriptor::new("/novels", "books-list"))
//!     .unwrap_err();
//! assert_eq!(
//!     err,
//!     CatalogError::DuplicateRouteName { name: "books-list".into() }
//! );
//! ```

use std::fmt;

/// Detailed error variants for route registration.
///
/// Implements [`std::error::Error`] and [`Display`](std::fmt::Display).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A route with this name is already registered
    DuplicateRouteName { name: String },

    /// The path template cannot be parsed
    InvalidTemplate { template: String, reason: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateRouteName { name } => {
                write!(f, "Duplicate route name: {}", name)
            }
            CatalogError::InvalidTemplate { template, reason } => {
                write!(f, "Invalid route template '{}': {}", template, reason)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_display() {
        let error = CatalogError::DuplicateRouteName {
            name: "books-list".to_string(),
        };
        assert_eq!(error.to_string(), "Duplicate route name: books-list");
    }

    #[test]
    fn test_invalid_template_display() {
        let error = CatalogError::InvalidTemplate {
            template: "/books/:".to_string(),
            reason: "empty parameter name".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid route template '/books/:': empty parameter name"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&CatalogError::DuplicateRouteName {
            name: "home".to_string(),
        });
    }
}
