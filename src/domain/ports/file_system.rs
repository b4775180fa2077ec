//! FileSystem port - abstraction over file I/O
//!
//! The writer goes through this trait so tests can substitute an in-memory
//! implementation and the domain never touches `std::fs` directly.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ContentHash;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classify an I/O error raised while touching `path`
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound(path) | FsError::PermissionDenied(path) => path,
            FsError::Io { path, .. } => path,
        }
    }
}

/// Abstract file system interface
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content atomically, creating parent directories
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    fn exists(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// SHA-256 of the file content
    fn hash(&self, path: &Path) -> FsResult<ContentHash> {
        self.read(path).map(|content| ContentHash::from_content(&content))
    }
}
