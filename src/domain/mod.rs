//! Domain Layer
//!
//! The compiler core: pure functions from a `Model` to `CompilationUnit`s,
//! with no I/O and no logging.
//!
//! ## Structure
//!
//! - `entities/` - Model, compilation units, rendered output files
//! - `value_objects/` - Package paths, qualified names, multiplicity, hashes
//! - `services/` - Name resolver, inheritance linearizer, emitter, pipeline
//! - `policies/` - Ambiguity, redeclaration and accessor naming rules
//! - `ports/` - Interface definitions for infrastructure
//! - `error` - `CompileError`

pub mod entities;
pub mod error;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
