//! dmodel - domain model compiler
//!
//! dmodel reads `.dmodel` sources (packages, datatypes and entities with
//! typed features and single inheritance), resolves every type reference
//! against the package hierarchy, rejects inheritance cycles, and emits one
//! Java class per entity with private fields and public accessors.
//!
//! ```
//! use std::path::Path;
//!
//! let model = dmodel::parse_model(
//!     "package blog { entity Post { title: String } }",
//!     Path::new("blog.dmodel"),
//! )
//! .unwrap();
//! let units = dmodel::compile(&model).unwrap();
//! assert_eq!(units[0].qualified_name(), "blog.Post");
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod parser;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{CompilationUnit, Entity, Feature, Model};
pub use domain::error::CompileError;
pub use domain::ports::UnitRenderer;
pub use domain::services::{compile, CompileOptions, Compiler};
pub use error::{DmodelError, DmodelResult};
pub use infrastructure::JavaRenderer;
pub use parser::{load_model, parse_model};
