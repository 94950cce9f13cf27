//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go to a temporary file in the destination directory and are
/// renamed into place, so a reader never sees a half-written artifact.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        fs::read_to_string(path).map_err(|e| FsError::from(e).with_path(path))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        self.create_dir_all(parent)?;

        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| FsError::from(e).with_path(path))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| FsError::from(e).with_path(path))?;
        tmp.persist(path)
            .map_err(|e| FsError::from(e.error).with_path(path))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        fs::remove_file(path).map_err(|e| FsError::from(e).with_path(path))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::create_dir_all(path).map_err(|e| FsError::from(e).with_path(path))
    }

    fn hash(&self, path: &Path) -> FsResult<String> {
        let bytes = fs::read(path).map_err(|e| FsError::from(e).with_path(path))?;
        Ok(format!("sha256:{:x}", Sha256::digest(&bytes)))
    }

    fn list_dir(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| FsError::from(e).with_path(dir))? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();
        Ok(files)
    }

    fn remove_dir_if_empty(&self, dir: &Path) -> FsResult<bool> {
        let mut entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(FsError::from(e).with_path(dir)),
        };
        if entries.next().is_some() {
            return Ok(false);
        }
        fs::remove_dir(dir).map_err(|e| FsError::from(e).with_path(dir))?;
        Ok(true)
    }
}
