use uriel::resolver::{remove_dot_segments, resolve_uri};

// ------------------------------------------------------------------------------------------------
// API Tests
// ------------------------------------------------------------------------------------------------

#[test]
fn test_resolution_base_scenario() {
    let base = "http://a/b/c/d;p?q";
    let cases = [
        ("", "http://a/b/c/d;p?q"),
        ("g:h", "g:h"),
        ("g", "http://a/b/c/g"),
        ("./g", "http://a/b/c/g"),
        ("/g", "http://a/g"),
        ("?y", "http://a/b/c/d;p?y"),
        ("g?y", "http://a/b/c/g?y"),
        ("#s", "http://a/b/c/d;p?q#s"),
        ("..", "http://a/b/"),
        ("../../../g", "http://a/g"),
        ("g;x=1/../y", "http://a/b/c/y"),
    ];
    for (reference, expected) in cases {
        assert_eq!(resolve_uri(base, reference).unwrap().href, expected, "{reference:?}");
    }
}

#[test]
fn test_resolving_with_no_fragment_inherited_from_base() {
    let resolved = resolve_uri("http://a/b/c/d;p?q#frag", "g").unwrap();
    assert!(resolved.fragment.is_none());
}

#[test]
fn test_resolving_empty_reference_preserves_base_href() {
    for base in ["http://a/b/c/d;p?q", "https://example.com/", "urn:example:a"] {
        assert_eq!(resolve_uri(base, "").unwrap().href, base);
    }
}

#[test]
fn test_remove_dot_segments_idempotent_on_already_normalised_paths() {
    let already_clean = "/a/b/g";
    assert_eq!(remove_dot_segments(already_clean), already_clean);
}

#[test]
fn test_merge_uses_base_authority_when_base_path_empty() {
    // base has authority "a" and empty path, so merge("g") == "/g".
    assert_eq!(resolve_uri("http://a", "g").unwrap().href, "http://a/g");
}

// ------------------------------------------------------------------------------------------------
// Automated Property Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn remove_dot_segments_never_panics(s in "[a-zA-Z0-9/.]{0,40}") {
            let _ = remove_dot_segments(&s);
        }

        #[test]
        fn remove_dot_segments_is_idempotent(s in "[a-zA-Z0-9/.]{0,40}") {
            let once = remove_dot_segments(&s);
            let twice = remove_dot_segments(&once);
            prop_assert_eq!(once, twice);
        }
    }
}
