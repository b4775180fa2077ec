//! Property tests for the `.dmodel` loader.

use std::path::Path;

use proptest::prelude::*;

use dmodel::{parse_model, DmodelError};

use super::models::{model_shapes, source};

fn token() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "package", "entity", "datatype", "extends", "many", "{", "}", ":", ".", "a", "B",
        "_x1", "//", "/*", "*/", "\n", " ", "9", "$",
    ])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,256}") {
        let _ = parse_model(&s, Path::new("fuzz.dmodel"));
    }

    /// PROPERTY: Keyword and punctuation soup either parses or reports a
    /// position inside the input.
    #[test]
    fn property_parse_errors_point_into_source(tokens in proptest::collection::vec(token(), 0..48)) {
        let text = tokens.join(" ");
        match parse_model(&text, Path::new("soup.dmodel")) {
            Ok(_) => {}
            Err(DmodelError::Parse { line, column, .. }) => {
                prop_assert!(line >= 1);
                prop_assert!(column >= 1);
                prop_assert!(line <= text.lines().count().max(1) + 1);
            }
            Err(DmodelError::Compile(_)) => {}
            Err(other) => {
                prop_assert!(false, "unexpected error kind: {}", other);
            }
        }
    }

    /// PROPERTY: Generated well-formed sources always parse.
    #[test]
    fn property_well_formed_sources_parse(shapes in model_shapes()) {
        match parse_model(&source(&shapes), Path::new("model.dmodel")) {
            Ok(model) => {
                prop_assert_eq!(model.entity_count(), shapes.len());
            }
            Err(err) => {
                prop_assert!(false, "{}", err);
            }
        }
    }
}
