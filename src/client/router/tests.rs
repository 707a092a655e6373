//! Tests for the two route tables.
//!
//! This module verifies path matching through the `Routable` string
//! conversions: every defined path parses to exactly one variant, the
//! default shell's wildcard captures undefined paths, and the posts shell's
//! lack of a fallback is asserted as the known gap it is.

use super::*;

/// Tests that each path in the default shell parses to its page.
///
/// Expected: Ok(variant) matching the path, and Display round-trips
#[test]
fn default_shell_paths_match_their_pages() {
    let table = [
        ("/", Route::Home {}),
        ("/profile", Route::Profile {}),
        ("/explore", Route::Explore {}),
        ("/login", Route::Login {}),
        ("/register", Route::Register {}),
    ];

    for (path, expected) in table {
        let parsed: Route = path.parse().unwrap();
        assert_eq!(parsed, expected, "path {path} matched the wrong page");
        assert_eq!(parsed.to_string(), path);
    }
}

/// Tests that an undefined path in the default shell falls through to the
/// not-found page.
///
/// Expected: Route::NotFound with the path captured in segments
#[test]
fn default_shell_undefined_path_is_not_found() {
    let parsed: Route = "/nonexistent".parse().unwrap();

    assert_eq!(
        parsed,
        Route::NotFound {
            segments: vec!["nonexistent".to_string()]
        }
    );
}

/// Tests that nested undefined paths keep all their segments.
///
/// Expected: Route::NotFound with every segment captured in order
#[test]
fn default_shell_wildcard_captures_all_segments() {
    let parsed: Route = "/no/such/page".parse().unwrap();

    assert_eq!(
        parsed,
        Route::NotFound {
            segments: vec!["no".to_string(), "such".to_string(), "page".to_string()]
        }
    );
}

/// Tests the guarded subset of the default shell.
///
/// Expected: requires_session() is true for /, /profile, /explore only
#[test]
fn guarded_subset_is_home_profile_explore() {
    assert!(Route::Home {}.requires_session());
    assert!(Route::Profile {}.requires_session());
    assert!(Route::Explore {}.requires_session());

    assert!(!Route::Login {}.requires_session());
    assert!(!Route::Register {}.requires_session());
    assert!(!Route::NotFound { segments: vec![] }.requires_session());
}

/// Tests that each path in the posts shell parses to its page.
///
/// Expected: Ok(variant) matching the path, and Display round-trips
#[test]
fn posts_shell_paths_match_their_pages() {
    let table = [
        ("/", PostsRoute::Home {}),
        ("/posts", PostsRoute::Posts {}),
        ("/create", PostsRoute::CreatePost {}),
    ];

    for (path, expected) in table {
        let parsed: PostsRoute = path.parse().unwrap();
        assert_eq!(parsed, expected, "path {path} matched the wrong page");
        assert_eq!(parsed.to_string(), path);
    }
}

/// Tests that the posts shell has no fallback for undefined paths.
///
/// The posts shell defines no wildcard, so an undefined path matches
/// nothing at all instead of rendering a not-found page.
///
/// Expected: Err from the route parser
#[test]
fn posts_shell_undefined_path_matches_nothing() {
    assert!("/nonexistent".parse::<PostsRoute>().is_err());
    assert!("/profile".parse::<PostsRoute>().is_err());
}
