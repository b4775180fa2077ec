//! CompilationUnit entity - one generated class, before text serialization
//!
//! Units are language-agnostic: they carry names, types and visibility, and
//! leave syntax to a `UnitRenderer`.

use serde::Serialize;

use crate::domain::policies::Visibility;
use crate::domain::value_objects::{Multiplicity, PackagePath};

/// Emitted type of a field, parameter or return value
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FieldType {
    /// Type name as it should appear in the generated source (`String`, `baz.E3`)
    pub name: String,
    pub multiplicity: Multiplicity,
}

impl FieldType {
    pub fn new(name: impl Into<String>, multiplicity: Multiplicity) -> Self {
        Self {
            name: name.into(),
            multiplicity,
        }
    }

    pub fn is_array(&self) -> bool {
        self.multiplicity.is_array()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDecl {
    pub visibility: Visibility,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: FieldType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessorKind {
    /// Takes one parameter, stores it in the field, returns nothing
    Setter,
    /// Takes no parameters, returns the field
    Getter,
}

/// A generated getter or setter bound to one field
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Accessor {
    pub kind: AccessorKind,
    pub visibility: Visibility,
    pub name: String,
    /// Field this accessor reads or writes
    pub field: String,
    #[serde(rename = "type")]
    pub ty: FieldType,
}

impl Accessor {
    /// Parameter `(name, type)` for setters
    pub fn parameter(&self) -> Option<(&str, &FieldType)> {
        match self.kind {
            AccessorKind::Setter => Some((self.field.as_str(), &self.ty)),
            AccessorKind::Getter => None,
        }
    }

    /// Return type for getters; setters return nothing
    pub fn return_type(&self) -> Option<&FieldType> {
        match self.kind {
            AccessorKind::Setter => None,
            AccessorKind::Getter => Some(&self.ty),
        }
    }
}

/// In-memory description of one generated class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilationUnit {
    /// Package header; the root package means no header
    pub package: PackagePath,
    pub name: String,
    /// Direct superentity as it should be written in the extends clause
    pub extends: Option<String>,
    /// One per feature, declaration order
    pub fields: Vec<FieldDecl>,
    pub accessors: Vec<Accessor>,
}

impl CompilationUnit {
    pub fn has_package_header(&self) -> bool {
        !self.package.is_root()
    }

    /// Dotted class name, used for diagnostics and output ordering
    pub fn qualified_name(&self) -> String {
        if self.package.is_root() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package.dotted(), self.name)
        }
    }

    pub fn accessor(&self, name: &str) -> Option<&Accessor> {
        self.accessors.iter().find(|a| a.name == name)
    }

    /// Structural equality that ignores the order of accessor declarations
    ///
    /// Field order stays significant: it mirrors feature declaration order.
    pub fn is_equivalent(&self, other: &CompilationUnit) -> bool {
        if self.package != other.package
            || self.name != other.name
            || self.extends != other.extends
            || self.fields != other.fields
            || self.accessors.len() != other.accessors.len()
        {
            return false;
        }

        let mut ours: Vec<&Accessor> = self.accessors.iter().collect();
        let mut theirs: Vec<&Accessor> = other.accessors.iter().collect();
        ours.sort();
        theirs.sort();
        ours == theirs
    }
}
