//! Unit tests for action keyword mapping

use navigator_trail::{ActionKind, SemanticKind};

#[test]
fn test_aliases_share_kinds() {
    assert_eq!(
        ActionKind::from_segment("new"),
        ActionKind::from_segment("create")
    );
    assert_eq!(
        ActionKind::from_segment("view"),
        ActionKind::from_segment("show")
    );
}

#[test]
fn test_semantic_kinds_are_entity_kinds() {
    for action in [
        ActionKind::Show,
        ActionKind::Edit,
        ActionKind::Create,
        ActionKind::Delete,
    ] {
        assert!(action.semantic_kind().is_entity());
        assert_ne!(action.semantic_kind(), SemanticKind::EntityList);
    }
}

#[test]
fn test_keyword_round_trip() {
    assert_eq!(ActionKind::Delete.to_string(), "delete");
    assert_eq!(
        ActionKind::from_segment(ActionKind::Edit.keyword()),
        Some(ActionKind::Edit)
    );
}
