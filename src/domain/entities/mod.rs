//! Domain Entities
//!
//! - `Model` - the immutable input: entities, features and datatypes
//! - `CompilationUnit` - one emitted class, before serialization
//! - `OutputFile` - a rendered unit ready to be written

mod compilation_unit;
mod model;
mod output_file;

pub use compilation_unit::{Accessor, AccessorKind, CompilationUnit, FieldDecl, FieldType};
pub use model::{DataType, DataTypeId, Entity, EntityId, Feature, Model, ModelBuilder};
pub use output_file::OutputFile;
