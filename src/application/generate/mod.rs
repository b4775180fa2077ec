//! Generate Use Case
//!
//! Orchestrates code generation:
//! - Reading and parsing the `.dmodel` sources
//! - Compiling the model into units
//! - Rendering each unit and writing it below the output directory,
//!   skipping files whose content is already current

mod options;
mod result;
mod use_case;


pub use options::GenerateOptions;
pub use result::GenerateResult;
pub use use_case::{output_dir_name, GenerateUseCase};
