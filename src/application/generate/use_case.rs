//! Generate Use Case
//!
//! Load, compile, render, write.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::application::source::load_sources;
use crate::domain::entities::CompilationUnit;
use crate::domain::ports::{FileSystem, UnitRenderer};
use crate::domain::services::{CompileOptions, Compiler};
use crate::domain::value_objects::ContentHash;
use crate::error::{DmodelError, DmodelResult};

use super::options::GenerateOptions;
use super::result::GenerateResult;

/// Fallback when the source file name has no usable characters
const DEFAULT_OUTPUT_NAME: &str = "model";

/// Generate use case - turns `.dmodel` sources into class files
pub struct GenerateUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
    renderer: Box<dyn UnitRenderer>,
}

impl<FS> GenerateUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS, renderer: Box<dyn UnitRenderer>) -> Self {
        Self { fs, renderer }
    }

    fn compile(
        &self,
        files: &[PathBuf],
        options: &CompileOptions,
    ) -> DmodelResult<Vec<CompilationUnit>> {
        let model = load_sources(&self.fs, files)?;

        let units = Compiler::new(options.clone()).compile(&model)?;
        debug!(units = units.len(), "model compiled");
        Ok(units)
    }

    pub fn execute(&self, options: &GenerateOptions) -> DmodelResult<GenerateResult> {
        let units = self.compile(&options.files, &options.compile)?;

        let name = options
            .files
            .first()
            .map(|file| output_dir_name(file))
            .unwrap_or_else(|| DEFAULT_OUTPUT_NAME.to_string());
        let output_dir = options.destination.join(name);
        self.fs
            .create_dir_all(&output_dir)
            .map_err(|source| DmodelError::Write {
                path: output_dir.clone(),
                source,
            })?;

        let mut result = GenerateResult::new(output_dir.clone());
        for unit in &units {
            let file = self.renderer.output_file(unit);
            let path = output_dir.join(file.path());

            if self.is_current(&path, &file.hash()) {
                debug!(path = %path.display(), "unchanged");
                result.unchanged.push(path);
                continue;
            }

            self.fs
                .write(&path, file.content())
                .map_err(|source| DmodelError::Write {
                    path: path.clone(),
                    source,
                })?;
            info!(path = %path.display(), unit = file.unit(), "wrote");
            result.written.push(path);
        }

        Ok(result)
    }

    fn is_current(&self, path: &Path, hash: &ContentHash) -> bool {
        self.fs.exists(path) && self.fs.hash(path).is_ok_and(|existing| &existing == hash)
    }
}

/// Output directory name for a source file: the stem without `.` and `-`
///
/// `qualified-names.dmodel` -> `qualifiednames`
pub fn output_dir_name(file: &Path) -> String {
    let name: String = file
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default()
        .chars()
        .filter(|c| *c != '.' && *c != '-')
        .collect();

    if name.is_empty() {
        DEFAULT_OUTPUT_NAME.to_string()
    } else {
        name
    }
}
