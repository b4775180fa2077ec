//! Generate options

use std::path::PathBuf;

use crate::domain::services::CompileOptions;

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Source files; the first one names the output directory
    pub files: Vec<PathBuf>,
    /// Root under which the output directory is created
    pub destination: PathBuf,
    pub compile: CompileOptions,
}

impl GenerateOptions {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self {
            files,
            destination: PathBuf::from("generated"),
            compile: CompileOptions::default(),
        }
    }

    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn with_compile_options(mut self, compile: CompileOptions) -> Self {
        self.compile = compile;
        self
    }
}
