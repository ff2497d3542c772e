//! Reserved action keywords in paths.
//!
//! `edit`, `create`, `new`, `show`, `view` and `delete` following an entity
//! segment change how that entity is classified rather than naming a page of
//! their own. Matching is case-insensitive.

use crate::semantic::SemanticKind;
use std::fmt;

/// An action an entity page can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Show,
    Edit,
    Create,
    Delete,
}

impl ActionKind {
    /// Map a raw path segment to an action, ignoring ASCII case.
    ///
    /// ```
    /// use navigator_trail::ActionKind;
    ///
    /// assert_eq!(ActionKind::from_segment("EDIT"), Some(ActionKind::Edit));
    /// assert_eq!(ActionKind::from_segment("new"), Some(ActionKind::Create));
    /// assert_eq!(ActionKind::from_segment("view"), Some(ActionKind::Show));
    /// assert_eq!(ActionKind::from_segment("profile"), None);
    /// ```
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment.to_ascii_lowercase().as_str() {
            "edit" => Some(ActionKind::Edit),
            "create" | "new" => Some(ActionKind::Create),
            "show" | "view" => Some(ActionKind::Show),
            "delete" => Some(ActionKind::Delete),
            _ => None,
        }
    }

    /// Whether the segment is a reserved action keyword.
    pub fn is_keyword(segment: &str) -> bool {
        Self::from_segment(segment).is_some()
    }

    /// The semantic kind an entity item takes under this action.
    pub fn semantic_kind(self) -> SemanticKind {
        match self {
            ActionKind::Show => SemanticKind::EntityShow,
            ActionKind::Edit => SemanticKind::EntityEdit,
            ActionKind::Create => SemanticKind::EntityCreate,
            ActionKind::Delete => SemanticKind::EntityDelete,
        }
    }

    /// Canonical keyword, also used as the label-catalog key for the action.
    pub fn keyword(self) -> &'static str {
        match self {
            ActionKind::Show => "show",
            ActionKind::Edit => "edit",
            ActionKind::Create => "create",
            ActionKind::Delete => "delete",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
