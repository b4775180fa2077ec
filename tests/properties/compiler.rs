//! Property tests for the compilation pipeline.

use std::path::Path;

use proptest::prelude::*;

use dmodel::domain::entities::CompilationUnit;
use dmodel::domain::policies::{getter_name, setter_name};
use dmodel::{parse_model, CompileOptions, Compiler, JavaRenderer, UnitRenderer};

use super::models::{model_shapes, source};

fn compile_source(text: &str, options: CompileOptions) -> Vec<CompilationUnit> {
    let model = parse_model(text, Path::new("generated.dmodel")).expect("generated source parses");
    Compiler::new(options)
        .compile(&model)
        .expect("generated model compiles")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Compiling the same model twice yields identical units and text.
    #[test]
    fn property_compilation_is_idempotent(shapes in model_shapes()) {
        let text = source(&shapes);
        let first = compile_source(&text, CompileOptions::default());
        let second = compile_source(&text, CompileOptions::default());
        prop_assert_eq!(&first, &second);

        let renderer = JavaRenderer::new();
        for (a, b) in first.iter().zip(&second) {
            prop_assert_eq!(renderer.render(a), renderer.render(b));
        }
    }

    /// PROPERTY: Parallel emission produces the same output as sequential emission.
    #[test]
    fn property_parallel_matches_sequential(shapes in model_shapes()) {
        let text = source(&shapes);
        let parallel = compile_source(&text, CompileOptions::default());
        let sequential = compile_source(&text, CompileOptions {
            parallel: false,
            ..CompileOptions::default()
        });
        prop_assert_eq!(parallel, sequential);
    }

    /// PROPERTY: One unit per entity, one getter and one setter per declared feature.
    #[test]
    fn property_one_accessor_pair_per_feature(shapes in model_shapes()) {
        let units = compile_source(&source(&shapes), CompileOptions::default());
        prop_assert_eq!(units.len(), shapes.len());

        for unit in &units {
            prop_assert_eq!(unit.accessors.len(), unit.fields.len() * 2);
            for field in &unit.fields {
                prop_assert!(unit.accessor(&setter_name(&field.name)).is_some());
                prop_assert!(unit.accessor(&getter_name(&field.name)).is_some());
            }
        }
    }

    /// PROPERTY: Reordering accessors never changes structural equivalence.
    #[test]
    fn property_accessor_order_is_irrelevant(shapes in model_shapes(), seed in any::<u64>()) {
        let units = compile_source(&source(&shapes), CompileOptions::default());

        for unit in &units {
            let mut shuffled = unit.clone();
            shuffled.accessors.reverse();
            if !shuffled.accessors.is_empty() {
                let len = shuffled.accessors.len();
                shuffled.accessors.rotate_left((seed as usize) % len);
            }
            prop_assert!(unit.is_equivalent(&shuffled));

            if shuffled.accessors.pop().is_some() {
                prop_assert!(!unit.is_equivalent(&shuffled));
            }
        }
    }

    /// PROPERTY: Units come out ordered by package path.
    #[test]
    fn property_units_sorted_by_package(shapes in model_shapes()) {
        let units = compile_source(&source(&shapes), CompileOptions::default());
        prop_assert!(units.windows(2).all(|w| w[0].package <= w[1].package));
    }
}
