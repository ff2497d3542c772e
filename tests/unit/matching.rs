//! Unit tests for segment splitting and route template matching

#[cfg(test)]
mod matching_tests {
    use navigator_trail::{
        match_template, split_path, RouteCatalog, RouteDescriptor, RouteTemplate, SegmentPattern,
    };

    #[test]
    fn test_exact_literal_match() {
        let template = RouteTemplate::parse("/settings/profile").unwrap();

        let params = match_template(&template, &["settings", "profile"]);
        assert_eq!(params.map(|p| p.is_empty()), Some(true));
    }

    #[test]
    fn test_param_accepts_any_value() {
        let template = RouteTemplate::parse("/books/:id").unwrap();

        for value in ["1", "edit", "550e8400-e29b-41d4-a716-446655440000"] {
            let params = match_template(&template, &["books", value]).unwrap();
            assert_eq!(params.get("id").map(String::as_str), Some(value));
        }
    }

    #[test]
    fn test_no_partial_matches() {
        // unlike nested routers, a shorter template never matches a longer prefix
        let template = RouteTemplate::parse("/books").unwrap();
        assert!(match_template(&template, &["books", "1"]).is_none());
    }

    #[test]
    fn test_parsed_segments() {
        let template = RouteTemplate::parse("/authors/:author/books").unwrap();
        assert_eq!(
            template.segments(),
            &[
                SegmentPattern::Literal("authors".to_string()),
                SegmentPattern::Param("author".to_string()),
                SegmentPattern::Literal("books".to_string()),
            ]
        );
        assert!(!template.ends_with_param());
        assert_eq!(template.last_param_name(), None);
    }

    #[test]
    fn test_catalog_order_breaks_ties() {
        // both templates match /books/new; the first registered wins
        let general_first = RouteCatalog::from_routes(vec![
            RouteDescriptor::new("/books/:id", "book-show").entity("books"),
            RouteDescriptor::new("/books/new", "book-new"),
        ]);
        let specific_first = RouteCatalog::from_routes(vec![
            RouteDescriptor::new("/books/new", "book-new"),
            RouteDescriptor::new("/books/:id", "book-show").entity("books"),
        ]);

        assert_eq!(
            general_first.match_path("/books/new").unwrap().route.name(),
            "book-show"
        );
        assert_eq!(
            specific_first.match_path("/books/new").unwrap().route.name(),
            "book-new"
        );
    }

    #[test]
    fn test_split_path_variants() {
        assert_eq!(split_path("/books/123"), vec!["books", "123"]);
        assert_eq!(split_path("/"), Vec::<&str>::new());
        assert_eq!(split_path(""), Vec::<&str>::new());
        assert_eq!(split_path("/books/"), vec!["books"]);
        assert_eq!(split_path("books//123/"), vec!["books", "123"]);
    }
}
