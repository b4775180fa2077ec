//! In-memory file system for use case tests

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::ports::{FileSystem, FsError, FsResult};

#[derive(Debug, Default)]
pub struct MockFileSystem {
    files: RefCell<BTreeMap<PathBuf, String>>,
    pub writes: RefCell<usize>,
}

impl MockFileSystem {
    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.borrow_mut().insert(path.into(), content.to_string());
        self
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl FileSystem for &MockFileSystem {
    fn read(&self, path: &Path) -> FsResult<String> {
        self.content(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        *self.writes.borrow_mut() += 1;
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn create_dir_all(&self, _path: &Path) -> FsResult<()> {
        Ok(())
    }
}
