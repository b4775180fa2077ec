//! Structural errors detected by the compiler core
//!
//! Every variant is a deterministic property of the model: nothing here is
//! transient or retried. Each carries enough context (offending entity, raw
//! reference text, candidates or cycle path) for an actionable diagnostic.

use thiserror::Error;

use crate::domain::value_objects::QualifiedName;

/// Result type alias for compiler core operations
pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// Reference matches no declared type and no built-in
    #[error("unknown type '{reference}' referenced from {entity}")]
    UnknownType {
        entity: QualifiedName,
        reference: String,
    },

    /// Reference matches more than one declaration
    #[error(
        "ambiguous type '{reference}' referenced from {entity}: candidates are {}",
        join_names(.candidates)
    )]
    AmbiguousType {
        entity: QualifiedName,
        reference: String,
        candidates: Vec<QualifiedName>,
    },

    /// Superentity reference resolved to something that is not an entity
    #[error("{entity} cannot extend '{reference}': not an entity")]
    InvalidSuperType {
        entity: QualifiedName,
        reference: String,
    },

    /// Entity transitively extends itself; `chain` starts and ends with the same entity
    #[error("inheritance cycle: {}", join_chain(.chain))]
    InheritanceCycle { chain: Vec<QualifiedName> },

    /// Two declarations share a qualified identity
    #[error("duplicate declaration '{name}'")]
    DuplicateEntityName { name: QualifiedName },

    /// Feature declared twice on one entity, or redeclared from an ancestor
    #[error("{}", describe_duplicate_feature(.entity, .feature, .ancestor.as_ref()))]
    DuplicateFeature {
        entity: QualifiedName,
        feature: String,
        ancestor: Option<QualifiedName>,
    },
}

fn join_names(names: &[QualifiedName]) -> String {
    names
        .iter()
        .map(|n| format!("'{}'", n))
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_chain(chain: &[QualifiedName]) -> String {
    chain
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn describe_duplicate_feature(
    entity: &QualifiedName,
    feature: &str,
    ancestor: Option<&QualifiedName>,
) -> String {
    match ancestor {
        Some(ancestor) => format!(
            "feature '{}' of {} redeclares a feature inherited from {}",
            feature, entity, ancestor
        ),
        None => format!("feature '{}' is declared more than once in {}", feature, entity),
    }
}
