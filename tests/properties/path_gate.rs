//! Property tests for the path gate and store-path validation.

use proptest::prelude::*;

use std::path::{Component, PathBuf};

use storekeep::{authorize, AllowedRoot, PathRejection, RootSet, StorePath};

fn abs(p: &str) -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(format!("C:{}", p.replace('/', "\\")))
    } else {
        PathBuf::from(p)
    }
}

fn gate_roots() -> RootSet {
    RootSet::new(vec![
        AllowedRoot::new("audio", abs("/srv/store/audio")).unwrap(),
        AllowedRoot::new("covers", abs("/srv/store/covers")).unwrap(),
    ])
    .unwrap()
}

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{1,12}")
        .unwrap()
        .prop_filter("no dot segments", |s| s != "." && s != "..")
}

fn relative_suffix() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..=4).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Validation never panics on arbitrary input.
    #[test]
    fn property_gate_never_panics(s in "(?s).{0,256}") {
        let _ = StorePath::parse(&s);
        let _ = authorize(&s, &gate_roots());
    }

    /// PROPERTY: Any candidate containing a `..` segment is rejected as a
    /// traversal attempt, wherever the segment sits.
    #[test]
    fn property_traversal_always_rejected(
        prefix in proptest::collection::vec(segment(), 0..=3),
        suffix in proptest::collection::vec(segment(), 0..=3),
    ) {
        let mut parts = prefix;
        parts.push("..".to_string());
        parts.extend(suffix);
        let candidate = parts.join("/");

        prop_assert_eq!(
            authorize(&candidate, &gate_roots()),
            Err(PathRejection::Traversal)
        );
    }

    /// PROPERTY: An accepted candidate resolves to a strict descendant of
    /// exactly one allowed root.
    #[test]
    fn property_accepted_paths_stay_contained(suffix in relative_suffix()) {
        let candidate = format!("audio/{}", suffix);
        let roots = gate_roots();

        let authorized = authorize(&candidate, &roots).unwrap();
        let owners = roots
            .iter()
            .filter(|r| authorized.absolute().starts_with(r.path()))
            .count();

        prop_assert_eq!(owners, 1);
        prop_assert_eq!(authorized.root(), "audio");
        prop_assert_ne!(
            authorized.absolute().to_path_buf(),
            roots.by_name("audio").unwrap().path().to_path_buf()
        );
    }

    /// PROPERTY: A parsed store path never contains `..` or root components
    /// and is never absolute.
    #[test]
    fn property_parsed_paths_are_clean(s in "(?s).{0,128}") {
        if let Ok(parsed) = StorePath::parse(&s) {
            let rel = parsed.to_rel_path();
            prop_assert!(!rel.is_absolute());
            for component in rel.components() {
                prop_assert!(matches!(component, Component::Normal(_)));
            }
            prop_assert!(parsed.segments().count() >= 1);
        }
    }

    /// PROPERTY: Candidates anchored at an unknown first segment are
    /// rejected, including lookalike prefixes of real roots.
    #[test]
    fn property_unknown_roots_rejected(suffix in relative_suffix()) {
        let candidate = format!("audio2/{}", suffix);
        prop_assert!(
            matches!(
                authorize(&candidate, &gate_roots()),
                Err(PathRejection::OutsideRoots { .. })
            ),
            "expected OutsideRoots rejection for {}",
            candidate
        );
    }
}
