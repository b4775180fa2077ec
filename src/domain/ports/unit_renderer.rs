//! UnitRenderer port - serializes compilation units into target source text
//!
//! The emitter produces language-neutral `CompilationUnit`s. A renderer turns
//! each one into the text and relative path of a single source file.

use std::path::PathBuf;

use crate::domain::entities::{CompilationUnit, OutputFile};

pub trait UnitRenderer: Send + Sync {
    /// Short language identifier (e.g. "java")
    fn language(&self) -> &'static str;

    /// Source text of one unit
    fn render(&self, unit: &CompilationUnit) -> String;

    /// Path of the unit's file, relative to the output directory
    fn relative_path(&self, unit: &CompilationUnit) -> PathBuf;

    /// Render and locate a unit in one step
    fn output_file(&self, unit: &CompilationUnit) -> OutputFile {
        OutputFile::new(
            self.relative_path(unit),
            self.render(unit),
            unit.qualified_name(),
        )
    }
}
