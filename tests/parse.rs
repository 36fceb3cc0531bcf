//! Parse and serialization tests over the shared case table.

mod components;

use uri_parts::Uri;

use self::components::TEST_CASES;

/// Every input decomposes into the expected components.
#[test]
fn parse_components() {
    for case in TEST_CASES {
        let uri = Uri::parse(case.input);
        case.components.assert_matches(&uri, case.name);
    }
}

/// Serialization emits the canonical form.
#[test]
fn serialize_canonical() {
    for case in TEST_CASES {
        let uri = Uri::parse(case.input);
        assert_eq!(uri.to_string(), case.canonical, "canonical form of {}", case.name);
    }
}

/// The canonical form is a fixed point of parse-then-serialize.
#[test]
fn canonical_form_is_stable() {
    for case in TEST_CASES {
        let reparsed = Uri::parse(case.canonical);
        assert_eq!(
            reparsed.to_string(),
            case.canonical,
            "reserialized canonical form of {}",
            case.name
        );
    }
}

/// Reparsing the serialized form reproduces the same components, except for
/// the `{?...}` placeholder text, which is never serialized.
#[test]
fn reparse_preserves_components() {
    for case in TEST_CASES {
        let mut uri = Uri::parse(case.input);
        let mut reparsed = Uri::parse(&uri.to_string());
        uri.query_mut().set_template_query(None::<&str>);
        reparsed.query_mut().set_template_query(None::<&str>);
        assert_eq!(uri, reparsed, "reparse of {}", case.name);
    }
}

/// Cloning re-derives the model from the canonical form.
#[test]
fn clone_matches_canonical_reparse() {
    for case in TEST_CASES {
        let uri = Uri::parse(case.input);
        assert_eq!(uri.clone(), Uri::parse(case.canonical), "clone of {}", case.name);
    }
}
