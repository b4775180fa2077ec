//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GenerateUseCase` - load, compile, render and write class files
//! - `CheckUseCase` - validate a model, or dump its compiled units

pub mod check;
pub mod generate;
mod source;

#[cfg(test)]
mod testing;

pub use check::{CheckReport, CheckUseCase};
pub use generate::{output_dir_name, GenerateOptions, GenerateResult, GenerateUseCase};
pub use source::load_sources;
