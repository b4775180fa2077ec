//! Domain Services
//!
//! The compiler core. Pure functions over an immutable `Model`; no I/O, no
//! logging.
//!
//! - `name_resolver` - raw type references -> declarations
//! - `linearizer` - superentity edges -> ancestor chains, cycle detection
//! - `emitter` - resolved entity -> `CompilationUnit`
//! - `pipeline` - the three stages over a whole model

mod emitter;
mod linearizer;
mod name_resolver;
mod pipeline;

pub use emitter::{type_name_for, Emitter};
pub use linearizer::{Linearization, Linearizer};
pub use name_resolver::{
    Declaration, NameResolver, ResolvedEntity, ResolvedModel, ResolvedType, TypeIndex,
};
pub use pipeline::{compile, CompileOptions, CompileOutput, Compiler, EmittedUnit};
