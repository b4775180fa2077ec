//! Emitter
//!
//! Pure function from a resolved entity to its `CompilationUnit`.
//!
//! ## Emission order
//!
//! Fields follow feature declaration order. Accessors follow the same order,
//! each feature contributing its setter immediately followed by its getter.
//! Consumers must not rely on accessor order (see
//! `CompilationUnit::is_equivalent`), but the emitter never varies it.
//!
//! ## Type names
//!
//! Value types (built-ins and datatypes) are written by simple name.
//! Entity references are written by simple name inside the same package, by
//! the package-relative path when the target lives below the current package
//! (`baz.E3` from `foo.bar`), and fully qualified otherwise.

use crate::domain::entities::{
    Accessor, AccessorKind, CompilationUnit, EntityId, FieldDecl, FieldType, Feature,
};
use crate::domain::policies::{getter_name, setter_name, ACCESSOR_VISIBILITY, FIELD_VISIBILITY};
use crate::domain::services::{ResolvedModel, ResolvedType};
use crate::domain::value_objects::{PackagePath, QualifiedName};

#[derive(Debug, Clone, Copy, Default)]
pub struct Emitter;

impl Emitter {
    pub fn new() -> Self {
        Self
    }

    /// Emit the unit for one entity
    ///
    /// Only features declared directly on the entity are emitted; inherited
    /// features come from the extends clause.
    pub fn emit(&self, resolved: &ResolvedModel<'_>, id: EntityId) -> CompilationUnit {
        let model = resolved.model();
        let entity = model.entity(id);
        let annotations = resolved.entity(id);
        let package = entity.package();

        let extends = annotations
            .super_entity
            .map(|parent| type_name_for(&model.entity(parent).qualified_name(), package));

        let typed: Vec<(&Feature, FieldType)> = entity
            .features()
            .iter()
            .zip(&annotations.feature_types)
            .map(|(feature, ty)| {
                let name = match ty {
                    ResolvedType::Builtin(name) => name.clone(),
                    ResolvedType::DataType(dt) => model.datatype(*dt).name().to_string(),
                    ResolvedType::Entity(target) => {
                        type_name_for(&model.entity(*target).qualified_name(), package)
                    }
                };
                (feature, FieldType::new(name, feature.multiplicity()))
            })
            .collect();

        let fields = typed
            .iter()
            .map(|(feature, ty)| FieldDecl {
                visibility: FIELD_VISIBILITY,
                name: feature.name().to_string(),
                ty: ty.clone(),
            })
            .collect();

        let accessors = typed
            .iter()
            .flat_map(|(feature, ty)| accessor_pair(feature.name(), ty))
            .collect();

        CompilationUnit {
            package: package.clone(),
            name: entity.name().to_string(),
            extends,
            fields,
            accessors,
        }
    }
}

fn accessor_pair(field: &str, ty: &FieldType) -> [Accessor; 2] {
    [
        Accessor {
            kind: AccessorKind::Setter,
            visibility: ACCESSOR_VISIBILITY,
            name: setter_name(field),
            field: field.to_string(),
            ty: ty.clone(),
        },
        Accessor {
            kind: AccessorKind::Getter,
            visibility: ACCESSOR_VISIBILITY,
            name: getter_name(field),
            field: field.to_string(),
            ty: ty.clone(),
        },
    ]
}

/// How `target` is written from inside package `from`
pub fn type_name_for(target: &QualifiedName, from: &PackagePath) -> String {
    if target.package() == from {
        return target.name().to_string();
    }
    match target.package().strip_prefix(from) {
        Some(relative) if !from.is_root() => format!("{}.{}", relative.dotted(), target.name()),
        _ => target.to_string(),
    }
}
