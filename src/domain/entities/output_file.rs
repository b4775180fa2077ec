//! OutputFile entity - a rendered compilation unit
//!
//! OutputFiles are what a `UnitRenderer` produces from a `CompilationUnit`.
//! They represent what will be written below the destination directory.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ContentHash;

/// A rendered source file ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct OutputFile {
    /// Path relative to the destination directory
    path: PathBuf,
    content: String,
    /// Qualified name of the class this file holds
    unit: String,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            unit: unit.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// SHA-256 of the content
    pub fn hash(&self) -> ContentHash {
        ContentHash::from_content(&self.content)
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
