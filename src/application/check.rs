//! Check and inspect use cases
//!
//! Both run the full front end (parse, resolve, linearize, emit) without
//! rendering or writing anything.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::application::source::load_sources;
use crate::domain::ports::FileSystem;
use crate::domain::services::{CompileOptions, CompileOutput, Compiler};
use crate::error::DmodelResult;

/// Summary of a successful check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub files: usize,
    pub entities: usize,
    pub datatypes: usize,
    /// Longest inheritance chain, in ancestors
    pub max_depth: usize,
}

pub struct CheckUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> CheckUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Validate the model; any structural error is returned as-is
    pub fn execute(&self, files: &[PathBuf], options: &CompileOptions) -> DmodelResult<CheckReport> {
        let model = load_sources(&self.fs, files)?;
        let output = Compiler::new(options.clone()).compile_with_ancestry(&model)?;

        let report = CheckReport {
            files: files.len(),
            entities: model.entity_count(),
            datatypes: model.datatypes().len(),
            max_depth: output
                .units
                .iter()
                .map(|u| u.ancestry.len())
                .max()
                .unwrap_or(0),
        };
        debug!(?report, "check passed");
        Ok(report)
    }

    /// Compile and return every unit with its ancestry
    pub fn inspect(&self, files: &[PathBuf], options: &CompileOptions) -> DmodelResult<CompileOutput> {
        let model = load_sources(&self.fs, files)?;
        Ok(Compiler::new(options.clone()).compile_with_ancestry(&model)?)
    }
}
