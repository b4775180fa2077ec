//! Error types for dmodel
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::error::CompileError;
use crate::domain::ports::FsError;

/// Result type alias for dmodel operations
pub type DmodelResult<T> = Result<T, DmodelError>;

/// Main error type for dmodel operations
#[derive(Error, Debug)]
pub enum DmodelError {
    /// Syntax error in a `.dmodel` source
    #[error("{file}:{line}:{column}: {message}")]
    Parse {
        file: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Structural error found while compiling the model
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// Source file missing or unreadable
    #[error("cannot read {file}: {source}")]
    Read {
        file: PathBuf,
        #[source]
        source: FsError,
    },

    /// Rendered file could not be written
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Invalid configuration file or value
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Source file without the `.dmodel` extension
    #[error("{file}: expected a file with extension .{expected}")]
    WrongExtension { file: PathBuf, expected: &'static str },

    /// No renderer for the requested language
    #[error("unsupported target language '{0}'")]
    UnsupportedLanguage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
