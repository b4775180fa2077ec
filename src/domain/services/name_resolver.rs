//! Name resolver
//!
//! Turns every raw type reference in a model (feature types and superentity
//! references) into a handle on exactly one declaration or built-in.
//!
//! ## Lookup rules
//!
//! A reference `q.N` written inside package `P` is tried against `P`, then
//! every package enclosing `P`, up to the root: the candidates are
//! `P.q.N`, `parent(P).q.N`, ..., `q.N`. An unqualified name found directly
//! in `P` is taken first, even when enclosing packages declare the same name;
//! otherwise an unqualified built-in name wins before outer packages are
//! considered. More than one remaining candidate is an error under
//! [`AmbiguityPolicy::Strict`] and picks the innermost one under
//! [`AmbiguityPolicy::Nearest`].
//!
//! The type index is a flat map keyed by qualified name, built once per run
//! and read-only afterwards.

use std::collections::HashMap;

use crate::domain::entities::{DataTypeId, Entity, EntityId, Model};
use crate::domain::error::{CompileError, CompileResult};
use crate::domain::policies::{AmbiguityPolicy, BuiltinTypes};
use crate::domain::value_objects::{QualifiedName, TypeRef};

/// A named declaration in the type namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration {
    Entity(EntityId),
    DataType(DataTypeId),
}

/// Qualified name -> declaration, for one model
#[derive(Debug, Clone, Default)]
pub struct TypeIndex {
    types: HashMap<QualifiedName, Declaration>,
}

impl TypeIndex {
    /// Index every entity and datatype of the model
    ///
    /// The model guarantees unique qualified names, so no entry is overwritten.
    pub fn build(model: &Model) -> Self {
        let mut types = HashMap::with_capacity(model.entity_count());
        for (id, datatype) in model.datatypes() {
            types.insert(datatype.qualified_name(), Declaration::DataType(id));
        }
        for (id, entity) in model.entities() {
            types.insert(entity.qualified_name(), Declaration::Entity(id));
        }
        Self { types }
    }

    pub fn lookup(&self, name: &QualifiedName) -> Option<Declaration> {
        self.types.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Resolved target of a feature type reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedType {
    Builtin(String),
    DataType(DataTypeId),
    Entity(EntityId),
}

/// An entity with all of its references resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntity {
    pub id: EntityId,
    pub super_entity: Option<EntityId>,
    /// One per feature, in feature declaration order
    pub feature_types: Vec<ResolvedType>,
}

/// The model plus resolution annotations for every entity
#[derive(Debug, Clone)]
pub struct ResolvedModel<'m> {
    model: &'m Model,
    index: TypeIndex,
    entities: Vec<ResolvedEntity>,
}

impl<'m> ResolvedModel<'m> {
    pub fn model(&self) -> &'m Model {
        self.model
    }

    pub fn index(&self) -> &TypeIndex {
        &self.index
    }

    pub fn entity(&self, id: EntityId) -> &ResolvedEntity {
        &self.entities[id.index()]
    }

    /// Resolved entities in model declaration order
    pub fn entities(&self) -> &[ResolvedEntity] {
        &self.entities
    }

    /// Qualified name of whatever a resolved type points at
    pub fn qualified_name_of(&self, ty: &ResolvedType) -> Option<QualifiedName> {
        match ty {
            ResolvedType::Builtin(_) => None,
            ResolvedType::DataType(id) => Some(self.model.datatype(*id).qualified_name()),
            ResolvedType::Entity(id) => Some(self.model.entity(*id).qualified_name()),
        }
    }
}

/// Resolves type references according to the configured policies
#[derive(Debug, Clone, Default)]
pub struct NameResolver {
    ambiguity: AmbiguityPolicy,
    builtins: BuiltinTypes,
}

impl NameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ambiguity(mut self, ambiguity: AmbiguityPolicy) -> Self {
        self.ambiguity = ambiguity;
        self
    }

    pub fn with_builtins(mut self, builtins: BuiltinTypes) -> Self {
        self.builtins = builtins;
        self
    }

    /// Resolve every reference of every entity
    ///
    /// Entities are visited in declaration order; for each, the superentity
    /// is resolved before the features. The first failure aborts the run.
    pub fn resolve<'m>(&self, model: &'m Model) -> CompileResult<ResolvedModel<'m>> {
        let index = TypeIndex::build(model);

        let entities = model
            .entities()
            .map(|(id, entity)| self.resolve_entity(&index, id, entity))
            .collect::<CompileResult<Vec<_>>>()?;

        Ok(ResolvedModel {
            model,
            index,
            entities,
        })
    }

    fn resolve_entity(
        &self,
        index: &TypeIndex,
        id: EntityId,
        entity: &Entity,
    ) -> CompileResult<ResolvedEntity> {
        let super_entity = match entity.super_type() {
            Some(reference) => match self.resolve_reference(index, entity, reference)? {
                ResolvedType::Entity(target) => Some(target),
                ResolvedType::Builtin(_) | ResolvedType::DataType(_) => {
                    return Err(CompileError::InvalidSuperType {
                        entity: entity.qualified_name(),
                        reference: reference.to_string(),
                    });
                }
            },
            None => None,
        };

        let feature_types = entity
            .features()
            .iter()
            .map(|feature| self.resolve_reference(index, entity, feature.type_ref()))
            .collect::<CompileResult<Vec<_>>>()?;

        Ok(ResolvedEntity {
            id,
            super_entity,
            feature_types,
        })
    }

    /// Resolve a single reference written inside `from`
    pub fn resolve_reference(
        &self,
        index: &TypeIndex,
        from: &Entity,
        reference: &TypeRef,
    ) -> CompileResult<ResolvedType> {
        let origin = from.package();
        let qualifier = reference.qualifier();
        let name = reference.simple_name();

        // Innermost scope first.
        let candidates: Vec<(QualifiedName, Declaration)> = origin
            .ancestors()
            .map(|scope| QualifiedName::new(scope.join(&qualifier), name))
            .filter_map(|qn| index.lookup(&qn).map(|decl| (qn, decl)))
            .collect();

        if !reference.is_qualified() {
            if let Some((qn, decl)) = candidates.first() {
                if qn.package() == origin {
                    return Ok(to_resolved(*decl));
                }
            }
            if self.builtins.contains(name) {
                return Ok(ResolvedType::Builtin(name.to_string()));
            }
        }

        if candidates.len() > 1 && self.ambiguity == AmbiguityPolicy::Strict {
            return Err(CompileError::AmbiguousType {
                entity: from.qualified_name(),
                reference: reference.to_string(),
                candidates: candidates.into_iter().map(|(qn, _)| qn).collect(),
            });
        }

        match candidates.first() {
            Some((_, decl)) => Ok(to_resolved(*decl)),
            None => Err(CompileError::UnknownType {
                entity: from.qualified_name(),
                reference: reference.to_string(),
            }),
        }
    }
}

fn to_resolved(decl: Declaration) -> ResolvedType {
    match decl {
        Declaration::Entity(id) => ResolvedType::Entity(id),
        Declaration::DataType(id) => ResolvedType::DataType(id),
    }
}
