//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the use cases read sources and write artifacts without depending on
//! a concrete implementation (local disk, in-memory mock).

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Attach the path an error refers to when the conversion from `io::Error` lost it
    pub fn with_path(self, path: &Path) -> Self {
        match self {
            FsError::NotFound(p) if p.as_os_str().is_empty() => FsError::NotFound(path.into()),
            FsError::PermissionDenied(p) if p.as_os_str().is_empty() => {
                FsError::PermissionDenied(path.into())
            }
            other => other,
        }
    }

    /// Short description without the path, for messages that already name it
    pub fn reason(&self) -> String {
        match self {
            FsError::NotFound(_) => "file not found".to_string(),
            FsError::PermissionDenied(_) => "permission denied".to_string(),
            FsError::Io(err) => err.to_string(),
            FsError::Other(msg) => msg.clone(),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(PathBuf::new()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(PathBuf::new()),
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - `MockFileSystem` - in-memory, in the use case tests
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file atomically, creating parent directories
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;

    /// Remove a file
    fn remove(&self, path: &Path) -> FsResult<()>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Compute content hash (`sha256:<hex>`)
    fn hash(&self, path: &Path) -> FsResult<String>;

    /// Files directly inside `dir`, sorted by path
    fn list_dir(&self, dir: &Path) -> FsResult<Vec<PathBuf>>;

    /// Remove `dir` if it exists and is empty; returns whether it was removed
    fn remove_dir_if_empty(&self, dir: &Path) -> FsResult<bool>;
}
