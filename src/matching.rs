//! Segment splitting and route template matching.
//!
//! # Design
//!
//! - Split paths by '/' into non-empty segments
//! - A template is a sequence of literal and `:param` segments
//! - A template matches a path prefix only when both have the same number of
//!   segments and every literal segment is equal
//! - Parameter segments match anything and capture the value into
//!   [`RouteParams`]
//! - No regex, no wildcards, no optional segments
//!
//! Picking *which* template of a catalog matches lives in
//! [`RouteCatalog::match_segments`](crate::RouteCatalog::match_segments);
//! this module only knows about one template at a time.

use crate::error::CatalogError;
use crate::params::{QueryParams, RouteParams};
use crate::warn_log;
use std::borrow::Cow;
use std::fmt;

/// Split a path into segments, dropping empty ones.
///
/// Leading, trailing and repeated separators never produce empty segments.
///
/// # Examples
///
/// ```
/// use navigator_trail::split_path;
///
/// assert_eq!(split_path("/books/42"), vec!["books", "42"]);
/// assert_eq!(split_path("//books///42/"), vec!["books", "42"]);
/// assert!(split_path("/").is_empty());
/// ```
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Normalize a path to a leading-slash form without trailing or duplicate
/// slashes. Returns `Cow::Borrowed` when nothing changes.
///
/// # Examples
///
/// ```
/// use navigator_trail::normalize_path;
///
/// assert_eq!(normalize_path("/books/1"), "/books/1");
/// assert_eq!(normalize_path("books//1/"), "/books/1");
/// assert_eq!(normalize_path(""), "/");
/// ```
#[must_use]
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if path == "/" {
        return Cow::Borrowed(path);
    }

    let already_normal = path.starts_with('/')
        && !path.ends_with('/')
        && !path.contains("//");
    if already_normal {
        return Cow::Borrowed(path);
    }

    let segments = split_path(path);
    if segments.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", segments.join("/")))
    }
}

/// Split a location into its path and parsed query string.
///
/// Anything after `#` is discarded.
///
/// ```
/// use navigator_trail::split_location;
///
/// let (path, query) = split_location("/books/1?tab=history#top");
/// assert_eq!(path, "/books/1");
/// assert_eq!(query.get("tab"), Some(&"history".to_string()));
/// ```
pub fn split_location(location: &str) -> (&str, QueryParams) {
    let without_fragment = location
        .split_once('#')
        .map_or(location, |(before, _)| before);

    match without_fragment.split_once('?') {
        Some((path, query)) => (path, QueryParams::from_query_string(query)),
        None => (without_fragment, QueryParams::new()),
    }
}

/// Check if a template segment is a parameter
pub fn is_param_segment(segment: &str) -> bool {
    segment.starts_with(':')
}

/// Extract the parameter name from a template segment.
///
/// Strips the leading `:` and any type hint like `:id<uuid>`.
///
/// ```
/// use navigator_trail::extract_param_name;
///
/// assert_eq!(extract_param_name(":id"), Some("id"));
/// assert_eq!(extract_param_name(":id<uuid>"), Some("id"));
/// assert_eq!(extract_param_name("books"), None);
/// ```
pub fn extract_param_name(segment: &str) -> Option<&str> {
    let name = segment.strip_prefix(':')?;
    Some(name.find('<').map_or(name, |pos| &name[..pos]))
}

// ============================================================================
// Templates
// ============================================================================

/// One segment of a route template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SegmentPattern {
    /// Must equal the path segment exactly
    Literal(String),
    /// Matches any path segment, captured under this name
    Param(String),
}

impl SegmentPattern {
    /// Whether `segment` satisfies this pattern.
    pub fn accepts(&self, segment: &str) -> bool {
        match self {
            SegmentPattern::Literal(literal) => literal == segment,
            SegmentPattern::Param(_) => true,
        }
    }

    pub fn is_param(&self) -> bool {
        matches!(self, SegmentPattern::Param(_))
    }
}

impl fmt::Display for SegmentPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentPattern::Literal(literal) => f.write_str(literal),
            SegmentPattern::Param(name) => write!(f, ":{}", name),
        }
    }
}

/// A parsed route path template such as `/authors/:author/books/:id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RouteTemplate {
    segments: Vec<SegmentPattern>,
}

impl RouteTemplate {
    /// Parse a template string, rejecting malformed parameter markers.
    ///
    /// ```
    /// use navigator_trail::RouteTemplate;
    ///
    /// let template = RouteTemplate::parse("/books/:id").unwrap();
    /// assert_eq!(template.len(), 2);
    /// assert!(template.ends_with_param());
    ///
    /// assert!(RouteTemplate::parse("/books/:").is_err());
    /// assert!(RouteTemplate::parse("/files/*rest").is_err());
    /// ```
    pub fn parse(template: &str) -> Result<Self, CatalogError> {
        let segments = split_path(template)
            .into_iter()
            .map(|segment| parse_segment(template, segment))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { segments })
    }

    /// Parse a template string, keeping malformed segments as literals.
    pub fn parse_lenient(template: &str) -> Self {
        let segments = split_path(template)
            .into_iter()
            .map(|segment| {
                parse_segment(template, segment).unwrap_or_else(|err| {
                    warn_log!("{}; treating '{}' as a literal segment", err, segment);
                    SegmentPattern::Literal(segment.to_string())
                })
            })
            .collect();
        Self { segments }
    }

    /// Build a template from already-parsed segments.
    pub fn from_segments(segments: Vec<SegmentPattern>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[SegmentPattern] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether the final segment is a parameter, i.e. the template addresses
    /// a single record rather than a collection.
    pub fn ends_with_param(&self) -> bool {
        self.segments.last().is_some_and(SegmentPattern::is_param)
    }

    /// Name of the final parameter segment, if the template ends with one.
    pub fn last_param_name(&self) -> Option<&str> {
        match self.segments.last() {
            Some(SegmentPattern::Param(name)) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

fn parse_segment(template: &str, segment: &str) -> Result<SegmentPattern, CatalogError> {
    if segment.starts_with('*') {
        return Err(CatalogError::InvalidTemplate {
            template: template.to_string(),
            reason: format!("wildcard segment '{}' is not supported", segment),
        });
    }

    match extract_param_name(segment) {
        Some("") => Err(CatalogError::InvalidTemplate {
            template: template.to_string(),
            reason: "empty parameter name".to_string(),
        }),
        Some(name) => Ok(SegmentPattern::Param(name.to_string())),
        None => Ok(SegmentPattern::Literal(segment.to_string())),
    }
}

/// Match a full segment prefix against a template, capturing parameters.
///
/// Returns `None` when the segment counts differ or a literal disagrees.
///
/// ```
/// use navigator_trail::{match_template, RouteTemplate};
///
/// let template = RouteTemplate::parse("/books/:id").unwrap();
/// let params = match_template(&template, &["books", "42"]).unwrap();
/// assert_eq!(params.get("id"), Some(&"42".to_string()));
///
/// assert!(match_template(&template, &["books"]).is_none());
/// assert!(match_template(&template, &["authors", "42"]).is_none());
/// ```
pub fn match_template(template: &RouteTemplate, prefix: &[&str]) -> Option<RouteParams> {
    if template.len() != prefix.len() {
        return None;
    }

    let mut params = RouteParams::new();
    for (pattern, segment) in template.segments().iter().zip(prefix) {
        match pattern {
            SegmentPattern::Literal(literal) if literal != segment => return None,
            SegmentPattern::Literal(_) => {}
            SegmentPattern::Param(name) => params.insert(name.clone(), (*segment).to_string()),
        }
    }

    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("/books/123"), vec!["books", "123"]);
        assert_eq!(split_path("books/123/"), vec!["books", "123"]);
        assert_eq!(split_path("/"), Vec::<&str>::new());
        assert_eq!(split_path(""), Vec::<&str>::new());
        assert_eq!(split_path("///"), Vec::<&str>::new());
    }

    #[test]
    fn test_split_path_never_yields_empty_segments() {
        for path in ["", "/", "//a//b//", "a/b", "/a/b/c/"] {
            assert!(split_path(path).iter().all(|s| !s.is_empty()));
        }
    }

    #[test]
    fn test_normalize_path_borrowed_when_normal() {
        assert!(matches!(normalize_path("/books"), Cow::Borrowed(_)));
        assert!(matches!(normalize_path("/"), Cow::Borrowed(_)));
        assert_eq!(normalize_path("//"), "/");
        assert_eq!(normalize_path("books/"), "/books");
    }

    #[test]
    fn test_split_location_without_query() {
        let (path, query) = split_location("/books");
        assert_eq!(path, "/books");
        assert!(query.is_empty());
    }

    #[test]
    fn test_split_location_fragment_only() {
        let (path, query) = split_location("/books#list");
        assert_eq!(path, "/books");
        assert!(query.is_empty());
    }

    #[test]
    fn test_template_display_round_trips_source() {
        let template = RouteTemplate::parse("/authors/:author/books/:id").unwrap();
        assert_eq!(template.to_string(), "/authors/:author/books/:id");
        assert_eq!(RouteTemplate::default().to_string(), "/");
    }

    #[test]
    fn test_template_type_hint_is_stripped() {
        let template = RouteTemplate::parse("/books/:id<uuid>").unwrap();
        assert_eq!(template.last_param_name(), Some("id"));
    }

    #[test]
    fn test_parse_lenient_keeps_bad_segments_literal() {
        let template = RouteTemplate::parse_lenient("/files/*rest");
        assert_eq!(
            template.segments(),
            &[
                SegmentPattern::Literal("files".to_string()),
                SegmentPattern::Literal("*rest".to_string()),
            ]
        );
    }

    #[test]
    fn test_match_template_literals_and_params() {
        let template = RouteTemplate::parse("/authors/:author/books/:id").unwrap();

        let params = match_template(&template, &["authors", "7", "books", "9"]).unwrap();
        assert_eq!(params.get("author"), Some(&"7".to_string()));
        assert_eq!(params.get("id"), Some(&"9".to_string()));

        assert!(match_template(&template, &["authors", "7", "posts", "9"]).is_none());
        assert!(match_template(&template, &["authors", "7", "books"]).is_none());
    }

    #[test]
    fn test_empty_template_matches_empty_prefix() {
        let template = RouteTemplate::parse("/").unwrap();
        assert!(template.is_empty());
        assert_eq!(match_template(&template, &[]), Some(RouteParams::new()));
        assert!(match_template(&template, &["books"]).is_none());
    }
}
