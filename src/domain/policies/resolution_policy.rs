//! Resolution Policies
//!
//! Knobs that decide between equally defensible readings of a model:
//! how to treat shadowed type names, which names count as built-in value
//! types, and whether subclasses may redeclare inherited features.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// What to do when a reference matches declarations at several nesting levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AmbiguityPolicy {
    /// Any second candidate is an `AmbiguousType` error.
    #[default]
    Strict,
    /// The innermost candidate wins (lexical scoping).
    Nearest,
}

/// Whether an entity may declare a feature already declared by an ancestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeatureRedeclaration {
    #[default]
    Allow,
    Deny,
}

/// Names recognized as value types without any `datatype` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinTypes(BTreeSet<String>);

impl BuiltinTypes {
    pub const DEFAULT: &'static [&'static str] = &["Boolean", "Date", "Decimal", "Int", "String"];

    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// No built-ins: every value type must be declared in the model.
    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for BuiltinTypes {
    fn default() -> Self {
        Self::new(Self::DEFAULT.iter().copied())
    }
}
