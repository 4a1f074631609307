use bunner_tree_router::{MatchOutcome, Router};
use serde_json::json;

#[test]
fn router_when_empty_then_matches_nothing() {
    let router: Router<&str> = Router::new();

    let outcome = router.find_path("/locations/111/info");

    assert!(outcome.is_failed());
    assert!(outcome.components().is_empty());
    assert!(outcome.params().is_empty());
}

#[test]
fn router_when_index_registered_then_matches_root_only() {
    let mut router = Router::new();
    router.index("the handler value");

    assert_eq!(router.find_path("/").components(), ["the handler value"]);
    assert_eq!(router.find_path("").components(), ["the handler value"]);
    assert!(router.find_path("/foo").components().is_empty());
}

#[test]
fn router_when_no_match_then_returns_failed_as_is() {
    let mut router = Router::new();
    router.index("root");

    let outcome = router.find_path("/missing");

    assert_eq!(outcome, MatchOutcome::Failed);
    let (components, params) = outcome.into_parts();
    assert!(components.is_empty());
    assert!(params.is_empty());
}

#[test]
fn router_when_dir_nested_then_consumes_segments_in_order() {
    let mut router = Router::new();
    router.dir("a").dir("b").index("ab");
    router.dir("a").index("a");

    assert_eq!(router.find_path("/a/b").components(), ["ab"]);
    assert_eq!(router.find_path("/a").components(), ["a"]);
    assert!(router.find_path("/b").is_failed());
    assert!(router.find_path("/a/b/c").is_failed());
}

#[test]
fn router_when_dir_literal_differs_in_case_then_rejects_by_default() {
    let mut router = Router::new();
    router.dir("Info").index("info");

    assert!(router.find_path("/info").is_failed());
    assert!(router.find_path("/Info").is_matched());
}

#[test]
fn router_when_slashes_are_redundant_then_outcome_is_identical() {
    let mut router = Router::new();
    router.dir("a").dir("b").index("ab");
    router.fallback("fallback");

    for (noisy, clean) in [("/a//b/", "a/b"), ("///a/b", "/a/b"), ("a/b///", "a/b")] {
        assert_eq!(router.find_path(noisy), router.find_path(clean));
    }
    assert_eq!(router.find_path("/a//b/").components(), ["ab"]);
}

#[test]
fn router_when_fallback_registered_last_then_specific_rules_win() {
    let mut router = Router::new();
    router.index("foo");
    router.dir("something").index("bar");
    router.fallback("fallback");

    assert_eq!(router.find_path("/").components(), ["foo"]);
    assert_eq!(router.find_path("/something").components(), ["bar"]);
    assert_eq!(router.find_path("/foo").components(), ["fallback"]);
    assert_eq!(router.find_path("/something/bar").components(), ["fallback"]);
    assert_eq!(router.find_path("/foo/quux").components(), ["fallback"]);
}

#[test]
fn router_when_fallback_registered_first_then_it_shadows_later_rules() {
    let mut router = Router::new();
    router.fallback("first");
    router.index("never");
    router.dir("x").index("never either");

    assert_eq!(router.find_path("/").components(), ["first"]);
    assert_eq!(router.find_path("/x").components(), ["first"]);
}

#[test]
fn router_when_several_matchers_accept_then_first_registered_wins() {
    let mut router = Router::new();
    router.dir("x").index("m1");
    router.dir("x").index("m2");
    router.param("any").index("m3");

    assert_eq!(router.find_path("/x").components(), ["m1"]);
    assert_eq!(router.find_path("/y").components(), ["m3"]);
}

#[test]
fn router_when_earlier_branch_fails_deeper_then_later_sibling_is_tried() {
    let mut router = Router::new();
    router.dir("x").dir("deep").index("deep");
    router.dir("x").index("shallow");

    assert_eq!(router.find_path("/x").components(), ["shallow"]);
    assert_eq!(router.find_path("/x/deep").components(), ["deep"]);
}

#[test]
fn router_when_fallback_nested_then_only_catches_within_its_branch() {
    let mut router = Router::new();
    router.dir("docs").call(|docs| {
        docs.index("docs index");
        docs.fallback("docs fallback");
    });

    assert_eq!(router.find_path("/docs/any/thing").components(), ["docs fallback"]);
    assert!(router.find_path("/other").is_failed());
}

#[test]
fn router_when_context_ignored_by_path_rules_then_any_data_is_accepted() {
    let mut router = Router::new();
    router.dir("a").index("a");

    assert!(router.find("/a", &json!(null)).is_matched());
    assert!(router.find("/a", &json!({ "method": "post" })).is_matched());
}
