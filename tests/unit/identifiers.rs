//! Unit tests for the identifier heuristic

use navigator_trail::{classify_identifier, looks_like_identifier, IdentifierShape};

#[test]
fn test_numeric_identifier() {
    assert!(looks_like_identifier("12345"));
}

#[test]
fn test_uuid_identifier() {
    assert_eq!(
        classify_identifier("123e4567-e89b-12d3-a456-426614174000"),
        Some(IdentifierShape::Uuid)
    );
}

#[test]
fn test_ulid_identifier_mixed_case() {
    assert_eq!(
        classify_identifier("01hGW2bbG0Jk5X3YTA9JQ0ZCXS"),
        Some(IdentifierShape::Ulid)
    );
}

#[test]
fn test_action_keywords_are_not_identifiers() {
    for keyword in ["edit", "create", "new", "show", "view", "delete"] {
        assert!(!looks_like_identifier(keyword), "{}", keyword);
    }
}

#[test]
fn test_opaque_token_boundary() {
    assert!(looks_like_identifier("k3j4h5g6f7d")); // 11 characters
    assert!(!looks_like_identifier("k3j4h5g6f")); // 9 characters
}

#[test]
fn test_hyphenated_words_are_not_identifiers() {
    assert!(!looks_like_identifier("purchase-orders"));
    assert!(!looks_like_identifier("user-settings-page"));
}
