//! Generators for well-formed `.dmodel` sources.
//!
//! Entity names are unique across the whole model and every reference is
//! written fully qualified, so generated models never hit ambiguity. A
//! superentity is always declared earlier, so there are no cycles.

use proptest::prelude::*;
use proptest::sample::Index;

pub const PACKAGES: &[&str] = &["", "app", "app.core", "lib"];
pub const BUILTINS: &[&str] = &["String", "Int", "Boolean"];

#[derive(Debug, Clone)]
pub enum FeatureType {
    Builtin(usize),
    Entity(usize),
}

#[derive(Debug, Clone)]
pub struct EntityShape {
    pub package: usize,
    pub extends: Option<Index>,
    pub features: Vec<(bool, FeatureType)>,
}

fn feature_type(entities: usize) -> impl Strategy<Value = FeatureType> {
    prop_oneof![
        (0..BUILTINS.len()).prop_map(FeatureType::Builtin),
        (0..entities).prop_map(FeatureType::Entity),
    ]
}

fn entity_shape(entities: usize) -> impl Strategy<Value = EntityShape> {
    (
        0..PACKAGES.len(),
        proptest::option::of(any::<Index>()),
        proptest::collection::vec((any::<bool>(), feature_type(entities)), 0..4),
    )
        .prop_map(|(package, extends, features)| EntityShape {
            package,
            extends,
            features,
        })
}

pub fn model_shapes() -> impl Strategy<Value = Vec<EntityShape>> {
    (1usize..8).prop_flat_map(|n| proptest::collection::vec(entity_shape(n), n))
}

pub fn qualified(shapes: &[EntityShape], index: usize) -> String {
    match PACKAGES[shapes[index].package] {
        "" => format!("E{}", index),
        package => format!("{}.E{}", package, index),
    }
}

/// Render shapes as `.dmodel` text, one package block per entity
pub fn source(shapes: &[EntityShape]) -> String {
    let mut out = String::new();
    for (i, shape) in shapes.iter().enumerate() {
        let package = PACKAGES[shape.package];
        if !package.is_empty() {
            out.push_str(&format!("package {} {{\n", package));
        }

        out.push_str(&format!("entity E{}", i));
        if let Some(parent) = shape.extends.filter(|_| i > 0).map(|ix| ix.index(i)) {
            out.push_str(&format!(" extends {}", qualified(shapes, parent)));
        }
        out.push_str(" {\n");

        for (f, (many, ty)) in shape.features.iter().enumerate() {
            let ty = match ty {
                FeatureType::Builtin(b) => BUILTINS[*b].to_string(),
                FeatureType::Entity(e) => qualified(shapes, *e),
            };
            let many = if *many { "many " } else { "" };
            out.push_str(&format!("    {}f{}: {}\n", many, f, ty));
        }
        out.push_str("}\n");

        if !package.is_empty() {
            out.push_str("}\n");
        }
    }
    out
}
