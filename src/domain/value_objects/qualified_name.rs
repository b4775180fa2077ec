//! Qualified names and raw type references

use std::fmt;

use serde::{Serialize, Serializer};

use super::PackagePath;

/// Globally unique identity of a declaration: package path + simple name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QualifiedName {
    package: PackagePath,
    name: String,
}

impl QualifiedName {
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
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_root() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.package.dotted(), self.name)
        }
    }
}

impl Serialize for QualifiedName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A type reference exactly as written in the model (`String`, `baz.E3`)
///
/// The last segment is the simple name; any leading segments form the
/// qualifier, interpreted as a package path during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef(String);

impl TypeRef {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_qualified(&self) -> bool {
        self.0.contains('.')
    }

    /// Leading package segments (root path when unqualified)
    pub fn qualifier(&self) -> PackagePath {
        match self.0.rsplit_once('.') {
            Some((qualifier, _)) => PackagePath::parse(qualifier),
            None => PackagePath::root(),
        }
    }

    pub fn simple_name(&self) -> &str {
        match self.0.rsplit_once('.') {
            Some((_, name)) => name,
            None => &self.0,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
