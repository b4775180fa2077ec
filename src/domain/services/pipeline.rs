//! Compilation pipeline
//!
//! Resolver -> Linearizer -> Emitter over a whole model.
//!
//! Resolution and linearization see the complete model before any unit is
//! emitted, so forward references and late packages are fine. Emission is a
//! pure per-entity function over the read-only resolved model and fans out
//! across the rayon pool when `parallel` is set; output order does not depend
//! on it.

use rayon::prelude::*;
use serde::Serialize;

use crate::domain::entities::{CompilationUnit, EntityId, Model};
use crate::domain::error::CompileResult;
use crate::domain::policies::{AmbiguityPolicy, BuiltinTypes, FeatureRedeclaration};
use crate::domain::services::{Emitter, Linearizer, NameResolver};
use crate::domain::value_objects::QualifiedName;

/// Policies and execution knobs for one compilation run
#[derive(Debug, Clone)]
pub struct CompileOptions {
    pub ambiguity: AmbiguityPolicy,
    pub feature_redeclaration: FeatureRedeclaration,
    pub builtins: BuiltinTypes,
    pub parallel: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            ambiguity: AmbiguityPolicy::default(),
            feature_redeclaration: FeatureRedeclaration::default(),
            builtins: BuiltinTypes::default(),
            parallel: true,
        }
    }
}

/// Units plus the ancestry each one was emitted with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileOutput {
    pub units: Vec<EmittedUnit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmittedUnit {
    pub unit: CompilationUnit,
    /// Ancestors root first, excluding the entity itself
    pub ancestry: Vec<QualifiedName>,
}

impl CompileOutput {
    pub fn into_units(self) -> Vec<CompilationUnit> {
        self.units.into_iter().map(|u| u.unit).collect()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compile a model into units ordered by package path, then declaration order
    ///
    /// Aborts on the first structural error; no partial output is returned.
    pub fn compile(&self, model: &Model) -> CompileResult<Vec<CompilationUnit>> {
        self.compile_with_ancestry(model).map(CompileOutput::into_units)
    }

    pub fn compile_with_ancestry(&self, model: &Model) -> CompileResult<CompileOutput> {
        let resolved = NameResolver::new()
            .with_ambiguity(self.options.ambiguity)
            .with_builtins(self.options.builtins.clone())
            .resolve(model)?;

        let linearization = Linearizer::new()
            .with_redeclaration(self.options.feature_redeclaration)
            .linearize(&resolved)?;

        // Stable sort keeps declaration order within a package.
        let mut order: Vec<EntityId> = model.entities().map(|(id, _)| id).collect();
        order.sort_by(|a, b| model.entity(*a).package().cmp(model.entity(*b).package()));

        let emitter = Emitter::new();
        let emit_one = |id: &EntityId| EmittedUnit {
            unit: emitter.emit(&resolved, *id),
            ancestry: linearization
                .ancestors(*id)
                .iter()
                .map(|&a| model.entity(a).qualified_name())
                .collect(),
        };

        let units = if self.options.parallel {
            order.par_iter().map(emit_one).collect()
        } else {
            order.iter().map(emit_one).collect()
        };

        Ok(CompileOutput { units })
    }
}

/// Compile with default options
pub fn compile(model: &Model) -> CompileResult<Vec<CompilationUnit>> {
    Compiler::default().compile(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Entity, Feature};
    use crate::domain::error::CompileError;
    use crate::domain::value_objects::PackagePath;

    fn pkg(s: &str) -> PackagePath {
        PackagePath::parse(s)
    }

    fn blog_model() -> Model {
        Model::builder()
            .entity(
                Entity::new(pkg("example.blog"), "Blog")
                    .with_feature(Feature::new("title", "String"))
                    .with_feature(Feature::many("posts", "Post")),
            )
            .entity(Entity::new(pkg("base"), "Blog").with_feature(Feature::new("name", "String")))
            .entity(
                Entity::new(pkg("example.blog"), "Post")
                    .extends("base.Blog")
                    .with_feature(Feature::new("body", "String")),
            )
            .entity(Entity::new(PackagePath::root(), "Root"))
            .build()
            .unwrap()
    }

    #[test]
    fn output_ordered_by_package_then_declaration() {
        let units = compile(&blog_model()).unwrap();
        let names: Vec<String> = units.iter().map(|u| u.qualified_name()).collect();
        assert_eq!(
            names,
            vec!["Root", "base.Blog", "example.blog.Blog", "example.blog.Post"]
        );
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let model = blog_model();
        let parallel = Compiler::new(CompileOptions::default()).compile(&model).unwrap();
        let sequential = Compiler::new(CompileOptions {
            parallel: false,
            ..CompileOptions::default()
        })
        .compile(&model)
        .unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn compiling_twice_is_identical() {
        let model = blog_model();
        assert_eq!(compile(&model).unwrap(), compile(&model).unwrap());
    }

    #[test]
    fn namespaces_do_not_leak_features() {
        let units = compile(&blog_model()).unwrap();
        let base = units.iter().find(|u| u.qualified_name() == "base.Blog").unwrap();
        let example = units
            .iter()
            .find(|u| u.qualified_name() == "example.blog.Blog")
            .unwrap();

        assert_eq!(base.fields.len(), 1);
        assert_eq!(base.fields[0].name, "name");
        assert_eq!(example.fields.len(), 2);
        assert!(example.accessor("getName").is_none());
    }

    #[test]
    fn ancestry_is_reported_root_first() {
        let output = Compiler::default()
            .compile_with_ancestry(&blog_model())
            .unwrap();
        let post = output
            .units
            .iter()
            .find(|u| u.unit.name == "Post")
            .unwrap();
        assert_eq!(post.ancestry, vec![QualifiedName::new(pkg("base"), "Blog")]);
    }

    #[test]
    fn cycle_aborts_without_output() {
        let model = Model::builder()
            .entity(Entity::new(PackagePath::root(), "A").extends("B"))
            .entity(Entity::new(PackagePath::root(), "B").extends("A"))
            .entity(Entity::new(PackagePath::root(), "Fine"))
            .build()
            .unwrap();

        let err = compile(&model).unwrap_err();
        assert!(matches!(err, CompileError::InheritanceCycle { .. }));
    }

    #[test]
    fn clashing_accessor_names_abort_compilation() {
        let model = Model::builder()
            .entity(
                Entity::new(pkg("a"), "P")
                    .with_feature(Feature::new("name", "String"))
                    .with_feature(Feature::new("Name", "Int")),
            )
            .build()
            .unwrap();

        let err = compile(&model).unwrap_err();
        assert!(matches!(err, CompileError::DuplicateFeature { .. }));
    }

    #[test]
    fn empty_model_compiles_to_nothing() {
        let model = Model::builder().build().unwrap();
        assert!(compile(&model).unwrap().is_empty());
    }
}
