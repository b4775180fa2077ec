//! Generate result types

use std::path::PathBuf;

use serde::Serialize;

/// Result of a generate run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerateResult {
    /// Directory the classes were written to
    pub output_dir: PathBuf,
    /// Files created or replaced
    pub written: Vec<PathBuf>,
    /// Files whose content on disk already matched
    pub unchanged: Vec<PathBuf>,
}

impl GenerateResult {
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            ..Self::default()
        }
    }

    pub fn total_count(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}
