//! Use case factory
//!
//! Wires use cases to the local file system and the configured renderer.

use crate::application::{CheckUseCase, GenerateUseCase};
use crate::error::{DmodelError, DmodelResult};
use crate::infrastructure::{renderer_for, LocalFs};

pub fn create_generate_use_case(language: &str) -> DmodelResult<GenerateUseCase<LocalFs>> {
    let renderer =
        renderer_for(language).ok_or_else(|| DmodelError::UnsupportedLanguage(language.to_string()))?;
    Ok(GenerateUseCase::new(LocalFs::new(), renderer))
}

pub fn create_check_use_case() -> CheckUseCase<LocalFs> {
    CheckUseCase::new(LocalFs::new())
}
