//! Model entities - the immutable input of a compilation run
//!
//! A `Model` is a flat table of entities and datatypes, each tagged with the
//! package it lives in. Packages themselves are implicit: a package exists
//! when something is declared in it. Ids are indices into the tables and stay
//! valid for the lifetime of the model.

use std::collections::HashSet;

use crate::domain::error::{CompileError, CompileResult};
use crate::domain::value_objects::{Multiplicity, PackagePath, QualifiedName, TypeRef};

/// Index of an entity in `Model::entities`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub(crate) usize);

impl EntityId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Index of a datatype in `Model::datatypes`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DataTypeId(pub(crate) usize);

impl DataTypeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named, typed slot on an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    name: String,
    multiplicity: Multiplicity,
    type_ref: TypeRef,
}

impl Feature {
    pub fn new(name: impl Into<String>, type_ref: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            multiplicity: Multiplicity::Single,
            type_ref: type_ref.into(),
        }
    }

    /// A feature declared with `many`
    pub fn many(name: impl Into<String>, type_ref: impl Into<TypeRef>) -> Self {
        Self::new(name, type_ref).with_multiplicity(Multiplicity::Array)
    }

    pub fn with_multiplicity(mut self, multiplicity: Multiplicity) -> Self {
        self.multiplicity = multiplicity;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn multiplicity(&self) -> Multiplicity {
        self.multiplicity
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }
}

/// A declaration that compiles to one class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    package: PackagePath,
    name: String,
    super_type: Option<TypeRef>,
    features: Vec<Feature>,
}

impl Entity {
    pub fn new(package: PackagePath, name: impl Into<String>) -> Self {
        Self {
            package,
            name: name.into(),
            super_type: None,
            features: Vec::new(),
        }
    }

    pub fn extends(mut self, super_type: impl Into<TypeRef>) -> Self {
        self.super_type = Some(super_type.into());
        self
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    pub fn push_feature(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    pub fn package(&self) -> &PackagePath {
        &self.package
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn qualified_name(&self) -> QualifiedName {
        QualifiedName::new(self.package.clone(), self.name.clone())
    }

    pub fn super_type(&self) -> Option<&TypeRef> {
        self.super_type.as_ref()
    }

    /// Features in declaration order
    pub fn features(&self) -> &[Feature] {
        &self.features
    }
}

/// A declared value type (`datatype String`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataType {
    package: PackagePath,
    name: String,
}

impl DataType {
    pub fn new(package: PackagePath, name: impl Into<String>) -> Self {
        Self {
            package,
            name: name.into(),
        }
    }

    pub fn package(&self) -> &PackagePath {
        &self.package
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn qualified_name(&self) -> QualifiedName {
        QualifiedName::new(self.package.clone(), self.name.clone())
    }
}

/// Validated, read-only domain model
///
/// Built through [`ModelBuilder`], which guarantees that qualified names are
/// unique across entities and datatypes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    entities: Vec<Entity>,
    datatypes: Vec<DataType>,
}

impl Model {
    pub fn builder() -> ModelBuilder {
        ModelBuilder::default()
    }

    pub fn entity(&self, id: EntityId) -> &Entity {
        &self.entities[id.0]
    }

    pub fn datatype(&self, id: DataTypeId) -> &DataType {
        &self.datatypes[id.0]
    }

    /// Entities with their ids, in declaration order
    pub fn entities(&self) -> impl ExactSizeIterator<Item = (EntityId, &Entity)> + '_ {
        self.entities
            .iter()
            .enumerate()
            .map(|(i, e)| (EntityId(i), e))
    }

    pub fn datatypes(&self) -> impl ExactSizeIterator<Item = (DataTypeId, &DataType)> + '_ {
        self.datatypes
            .iter()
            .enumerate()
            .map(|(i, d)| (DataTypeId(i), d))
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.datatypes.is_empty()
    }
}

/// Collects declarations, possibly from several source documents
#[derive(Debug, Clone, Default)]
pub struct ModelBuilder {
    entities: Vec<Entity>,
    datatypes: Vec<DataType>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    pub fn datatype(mut self, datatype: DataType) -> Self {
        self.datatypes.push(datatype);
        self
    }

    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn add_datatype(&mut self, datatype: DataType) {
        self.datatypes.push(datatype);
    }

    /// Validate uniqueness of qualified names and freeze the model
    ///
    /// Datatypes are checked first, then entities, each in declaration order;
    /// the first clash is reported.
    pub fn build(self) -> CompileResult<Model> {
        let mut seen = HashSet::new();
        let names = self
            .datatypes
            .iter()
            .map(DataType::qualified_name)
            .chain(self.entities.iter().map(Entity::qualified_name));

        for name in names {
            if !seen.insert(name.clone()) {
                return Err(CompileError::DuplicateEntityName { name });
            }
        }

        Ok(Model {
            entities: self.entities,
            datatypes: self.datatypes,
        })
    }
}
