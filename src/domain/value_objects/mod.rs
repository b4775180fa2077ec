//! Domain Value Objects
//!
//! Immutable value types shared by the model, the resolver and the emitter.

mod hash;
mod multiplicity;
mod package_path;
mod qualified_name;

pub use hash::ContentHash;
pub use multiplicity::Multiplicity;
pub use package_path::PackagePath;
pub use qualified_name::{QualifiedName, TypeRef};
