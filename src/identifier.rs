//! Heuristic detection of record identifiers in raw path segments.
//!
//! Used only by the path-walk breadcrumb strategy, which has no route
//! templates to tell it where identifiers sit. Rules are tried in order and
//! the first hit wins:
//!
//! | Order | Shape      | Rule                                              |
//! |-------|------------|---------------------------------------------------|
//! | 1     | `Numeric`  | ASCII digits only                                 |
//! | 2     | `Uuid`     | 8-4-4-4-12 hex groups, 36 characters              |
//! | 3     | `Ulid`     | 26 Crockford Base32 characters, first in `0-7`    |
//! | 4     | `Opaque`   | ASCII alphanumeric, more than 10 characters       |

use regex::Regex;
use std::sync::OnceLock;

/// Which rule classified a segment as an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierShape {
    Numeric,
    Uuid,
    Ulid,
    Opaque,
}

const OPAQUE_MIN_LEN: usize = 11;

fn uuid_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
            .expect("UUID pattern is valid")
    })
}

fn ulid_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?i)[0-7][0-9A-HJKMNP-TV-Z]{25}$").expect("ULID pattern is valid")
    })
}

/// Classify a segment, returning the shape of the first rule it satisfies.
///
/// ```
/// use navigator_trail::{classify_identifier, IdentifierShape};
///
/// assert_eq!(classify_identifier("42"), Some(IdentifierShape::Numeric));
/// assert_eq!(
///     classify_identifier("01ARZ3NDEKTSV4RRFFQ69G5FAV"),
///     Some(IdentifierShape::Ulid)
/// );
/// assert_eq!(classify_identifier("settings"), None);
/// ```
pub fn classify_identifier(segment: &str) -> Option<IdentifierShape> {
    if segment.is_empty() {
        return None;
    }

    if segment.bytes().all(|b| b.is_ascii_digit()) {
        Some(IdentifierShape::Numeric)
    } else if segment.len() == 36 && uuid_pattern().is_match(segment) {
        Some(IdentifierShape::Uuid)
    } else if segment.len() == 26 && ulid_pattern().is_match(segment) {
        Some(IdentifierShape::Ulid)
    } else if segment.len() >= OPAQUE_MIN_LEN && segment.bytes().all(|b| b.is_ascii_alphanumeric())
    {
        Some(IdentifierShape::Opaque)
    } else {
        None
    }
}

/// Does this segment look like a record identifier rather than a named path
/// component?
pub fn looks_like_identifier(segment: &str) -> bool {
    classify_identifier(segment).is_some()
}
