//! In-memory filesystem for use case tests

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::domain::ports::{FileSystem, FsError, FsResult};
use crate::domain::value_objects::ContentHash;

#[derive(Debug, Default)]
pub struct MockFileSystem {
    pub files: RefCell<BTreeMap<PathBuf, String>>,
    pub dirs: RefCell<BTreeSet<PathBuf>>,
    pub writes: RefCell<Vec<PathBuf>>,
    /// Paths whose writes and removals fail with a permission error
    pub read_only: RefCell<BTreeSet<PathBuf>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files<'a>(files: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let fs = Self::new();
        for (path, content) in files {
            fs.insert(path, content);
        }
        fs
    }

    /// Add a file, registering its ancestor directories
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            let _ = self.create_dir_all(parent);
        }
        self.files.borrow_mut().insert(path, content.into());
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }

    fn dir_exists(&self, dir: &Path) -> bool {
        self.dirs.borrow().contains(dir) || self.files.borrow().keys().any(|p| p.starts_with(dir))
    }
}

impl FileSystem for MockFileSystem {
    fn read(&self, path: &Path) -> FsResult<String> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        if self.read_only.borrow().contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_string());
        self.writes.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        if self.read_only.borrow().contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        self.files
            .borrow_mut()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors().filter(|a| !a.as_os_str().is_empty()) {
            dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn hash(&self, path: &Path) -> FsResult<String> {
        self.read(path)
            .map(|content| ContentHash::from_content(&content).as_str().to_string())
    }

    fn list_dir(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        if !self.dir_exists(dir) {
            return Err(FsError::NotFound(dir.to_path_buf()));
        }
        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect())
    }

    fn remove_dir_if_empty(&self, dir: &Path) -> FsResult<bool> {
        let has_children = self.files.borrow().keys().any(|p| p.starts_with(dir))
            || self.dirs.borrow().iter().any(|d| d != dir && d.starts_with(dir));
        if has_children {
            return Ok(false);
        }
        let removed = self.dirs.borrow_mut().remove(dir);
        Ok(removed)
    }
}
