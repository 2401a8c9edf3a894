//! Property tests for version ordering and classification

use proptest::prelude::*;

use pg_version_report::version::{
    BackportScope, ParseCache, VersionNumber, extractor, is_missing,
};

fn arb_version() -> impl Strategy<Value = VersionNumber> {
    (0u32..40, 0u32..30, 0u32..5).prop_map(|(major, minor, patch)| {
        VersionNumber::new(major, minor, patch)
    })
}

fn arb_scope() -> impl Strategy<Value = BackportScope> {
    prop_oneof![Just(BackportScope::SameMajor), Just(BackportScope::AnyMajor)]
}

proptest! {
    /// compare(a, b) is the reverse of compare(b, a).
    #[test]
    fn compare_is_antisymmetric(a in arb_version(), b in arb_version()) {
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
    }

    #[test]
    fn compare_is_transitive(a in arb_version(), b in arb_version(), c in arb_version()) {
        if !a.is_strictly_newer(&b) && !b.is_strictly_newer(&c) {
            prop_assert!(!a.is_strictly_newer(&c));
        }
    }

    #[test]
    fn compare_is_reflexive_on_equality(a in arb_version()) {
        prop_assert_eq!(a.compare(&a), std::cmp::Ordering::Equal);
        prop_assert!(a.is_newer_or_equal(&a));
        prop_assert!(!a.is_strictly_newer(&a));
    }

    /// Integer comparison, never string comparison.
    #[test]
    fn compare_matches_tuple_ordering(a in arb_version(), b in arb_version()) {
        prop_assert_eq!(
            a.compare(&b),
            (a.major, a.minor, a.patch).cmp(&(b.major, b.minor, b.patch))
        );
    }

    #[test]
    fn parse_display_is_stable(v in arb_version()) {
        prop_assert_eq!(VersionNumber::parse(&v.to_string()), Ok(v));
    }

    #[test]
    fn nothing_is_missing_from_itself_or_newer(
        tagged in arb_version(),
        current in arb_version(),
        scope in arb_scope(),
    ) {
        if current.is_newer_or_equal(&tagged) {
            prop_assert!(!is_missing(&tagged, &current, scope));
        }
    }

    #[test]
    fn cache_never_changes_results(raw in "[0-9a-z.]{0,12}") {
        let cache = ParseCache::new();
        prop_assert_eq!(cache.get_or_parse(&raw), VersionNumber::parse(&raw));
        prop_assert_eq!(cache.get_or_parse(&raw), VersionNumber::parse(&raw));
        cache.clear();
        prop_assert_eq!(cache.get_or_parse(&raw), VersionNumber::parse(&raw));
    }

    #[test]
    fn extract_never_panics(text in ".{0,200}") {
        let _ = extractor::extract(&text);
    }
}
