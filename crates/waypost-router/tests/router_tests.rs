//! Integration tests for waypost-router
//!
//! Tests are organized by feature area and cover:
//! - Normalization properties
//! - Pattern compilation (literals, wildcards, params, raw regex)
//! - Declaration-order matching and parameter extraction

use std::sync::Arc;

use pretty_assertions::assert_eq;
use regex::Regex;
use rstest::rstest;
use waypost_router::*;

type TestRoutes = Vec<Arc<Route<&'static str>>>;

fn build(declarations: &[(&str, &'static str)]) -> TestRoutes {
    declarations
        .iter()
        .map(|&(path, name)| Arc::new(Route::new(path, move |_| name)))
        .collect()
}

fn resolve(path: &str, routes: &TestRoutes) -> Option<(&'static str, Params)> {
    match_path(path, routes).map(|m| (m.route.render(&Props::Null), m.params))
}

fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ============================================================================
// Normalization
// ============================================================================

#[rstest]
#[case("", "/")]
#[case("/", "/")]
#[case("///", "/")]
#[case("//foo", "/foo")]
#[case("/foo//bar", "/foo/bar")]
#[case("foo/bar", "/foo/bar")]
#[case("foo/bar/baz/", "/foo/bar/baz")]
fn test_normalize(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize_path(input), expected);
}

#[test]
fn test_normalize_is_idempotent_over_generated_inputs() {
    let alphabet = ['/', 'a', ' ', '.', '*'];
    let mut inputs = vec![String::new()];
    for _ in 0..5 {
        inputs = inputs
            .iter()
            .flat_map(|prefix| alphabet.iter().map(move |c| format!("{}{}", prefix, c)))
            .collect();
        for input in &inputs {
            let once = normalize_path(input).into_owned();
            assert_eq!(normalize_path(&once), once.as_str(), "input {:?}", input);
            assert!(is_canonical_path(&once), "{:?} normalised to non-canonical {:?}", input, once);
        }
    }
}

// ============================================================================
// Compilation
// ============================================================================

#[test]
fn test_root_compiles_to_literal() {
    assert_eq!(compile(""), CompiledPattern::Literal("/".to_string()));
    assert_eq!(compile("/"), CompiledPattern::Literal("/".to_string()));
}

#[test]
fn test_bare_wildcards_compile_to_match_all() {
    assert_eq!(compile("/*"), CompiledPattern::MatchAll);
    assert_eq!(compile("/**"), CompiledPattern::MatchAll);
}

#[test]
fn test_single_segment_wildcard() {
    let pattern = compile("/foo/*");
    assert!(pattern.matches("/foo/anything").is_some());
    assert!(pattern.matches("/foo/a/b").is_none());
    assert!(pattern.matches("/foo").is_none());
}

#[test]
fn test_glob_wildcard() {
    let pattern = compile("/foo/**");
    assert!(pattern.matches("/foo/a").is_some());
    assert!(pattern.matches("/foo/a/b").is_some());
    assert!(pattern.matches("/foo").is_none());
}

#[test]
fn test_wildcards_produce_no_named_params() {
    let pattern = compile("/foo/*/bar/**");
    assert_eq!(pattern.matches("/foo/x/bar/y/z"), Some(Params::new()));
}

#[test]
fn test_named_param_extraction() {
    let routes = build(&[("/:bar", "bar")]);
    assert_eq!(resolve("/hello", &routes), Some(("bar", params(&[("bar", "hello")]))));
}

#[test]
fn test_regex_route_named_groups() {
    let routes: TestRoutes = vec![Arc::new(Route::new(
        Regex::new(r"^/archive/(?<year>\d{4})/(?<month>\d{2})$").unwrap(),
        |_| "archive",
    ))];

    assert_eq!(
        resolve("/archive/2024/05/", &routes),
        Some(("archive", params(&[("year", "2024"), ("month", "05")])))
    );
    assert_eq!(resolve("/archive/24/05", &routes), None);
}

#[test]
fn test_optional_trailing_separator_in_compiled_regex() {
    let pattern = compile("/users/:id");
    assert!(pattern.matches("/users/1/").is_some());
}

// ============================================================================
// Matching
// ============================================================================

#[test]
fn test_literal_route() {
    let routes = build(&[("/", "root")]);
    assert_eq!(resolve("/", &routes).map(|r| r.0), Some("root"));
    assert_eq!(resolve("/foo", &routes), None);
}

#[test]
fn test_declaration_order_wins() {
    let routes = build(&[("/a", "a"), ("/*", "any"), ("/b", "b")]);

    assert_eq!(resolve("/a", &routes).map(|r| r.0), Some("a"));
    assert_eq!(resolve("/b", &routes).map(|r| r.0), Some("any"));
    assert_eq!(resolve("/c", &routes).map(|r| r.0), Some("any"));
}

#[test]
fn test_param_routes() {
    let routes = build(&[("/:foo", "first"), ("/foo/:bar", "second"), ("/:foo/bar", "third")]);

    assert_eq!(resolve("/foo", &routes), Some(("first", params(&[("foo", "foo")]))));
    assert_eq!(resolve("/bar", &routes), Some(("first", params(&[("foo", "bar")]))));

    assert_eq!(resolve("/foo/bar", &routes), Some(("second", params(&[("bar", "bar")]))));
    assert_eq!(resolve("/foo/baz", &routes), Some(("second", params(&[("bar", "baz")]))));
    assert_eq!(resolve("/bar/baz", &routes), None);

    assert_eq!(resolve("/bar/bar", &routes), Some(("third", params(&[("foo", "bar")]))));
    assert_eq!(resolve("/baz/bar", &routes), Some(("third", params(&[("foo", "baz")]))));
}

#[test]
fn test_repeated_matching_is_structurally_equal() {
    let routes = build(&[("/users/:id", "user"), ("/**", "fallback")]);

    for path in ["/users/7", "/elsewhere/deep", "/"] {
        let first = match_path(path, &routes);
        let second = match_path(path, &routes);
        assert_eq!(first, second);
    }
}

#[test]
fn test_concurrent_matching() {
    let routes = Arc::new(build(&[("/users/:id", "user"), ("/**", "fallback")]));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let routes = Arc::clone(&routes);
            std::thread::spawn(move || {
                let matched = match_path(&format!("/users/{}", i), routes.as_slice()).unwrap();
                matched.params["id"].clone()
            })
        })
        .collect();

    let ids: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(ids, vec!["0", "1", "2", "3"]);
}

#[test]
fn test_unrecognised_segment_matches_literally() {
    let routes = build(&[("/assets/:name/logo.svg", "logo")]);

    assert_eq!(
        resolve("/assets/brand/logo.svg", &routes),
        Some(("logo", params(&[("name", "brand")])))
    );
    // The dot is not a regex wildcard.
    assert_eq!(resolve("/assets/brand/logoXsvg", &routes), None);
}
