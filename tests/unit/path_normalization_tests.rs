//! Unit tests for path normalization and location splitting

use navigator_trail::{normalize_path, split_location};

#[test]
fn test_normalize_already_normalized() {
    assert_eq!(normalize_path("/books"), "/books");
    assert_eq!(normalize_path("/books/7/edit"), "/books/7/edit");
    assert_eq!(normalize_path("/"), "/");
}

#[test]
fn test_normalize_missing_leading_slash() {
    assert_eq!(normalize_path("books"), "/books");
    assert_eq!(normalize_path("books/7"), "/books/7");
}

#[test]
fn test_normalize_trailing_and_duplicate_slashes() {
    assert_eq!(normalize_path("/books/"), "/books");
    assert_eq!(normalize_path("//books//7//"), "/books/7");
}

#[test]
fn test_normalize_root_variations() {
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("//"), "/");
    assert_eq!(normalize_path("///"), "/");
}

#[test]
fn test_split_location_query_and_fragment() {
    let (path, query) = split_location("/books?sort=title&tag=a&tag=b#results");

    assert_eq!(path, "/books");
    assert_eq!(query.get("sort"), Some(&"title".to_string()));
    assert_eq!(query.get_all("tag").map(Vec::len), Some(2));
}

#[test]
fn test_split_location_question_mark_in_fragment_is_ignored() {
    let (path, query) = split_location("/books#section?x=1");

    assert_eq!(path, "/books");
    assert!(query.is_empty());
}
