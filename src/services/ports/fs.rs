//! Filesystem probe port: trait + data contracts.
//!
//! The tree never touches `std::fs` directly; it talks to an `FsProbe` so
//! tests can substitute failing or synthetic filesystems.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub type Result<T> = std::result::Result<T, FsError>;

#[derive(Debug)]
pub enum FsError {
    Io(io::Error),
    NotFound(PathBuf),
    PermissionDenied(PathBuf),
    NotADirectory(PathBuf),
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::Io(e) => write!(f, "IO error: {}", e),
            FsError::NotFound(p) => write!(f, "Not found: {}", p.display()),
            FsError::PermissionDenied(p) => write!(f, "Permission denied: {}", p.display()),
            FsError::NotADirectory(p) => write!(f, "Not a directory: {}", p.display()),
        }
    }
}

impl std::error::Error for FsError {}

impl FsError {
    /// Classify an `io::Error` against the path that produced it.
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

/// One directory entry as returned by `list_children`: name plus the
/// absolute path it resolves to. Metadata is a separate `stat` call so a
/// single inaccessible entry cannot poison the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildEntry {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct EntryMetadata {
    pub is_dir: bool,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

/// Capability interface over the host filesystem.
///
/// `list_children` returns a finite, materialized sequence (directory
/// fan-out is bounded); its order must be stable for a given directory
/// snapshot. `stat` fails per entry (permissions, race-deleted entries,
/// symlink loops) without retrying.
pub trait FsProbe: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn list_children(&self, path: &Path) -> Result<Vec<ChildEntry>>;

    fn stat(&self, path: &Path) -> Result<EntryMetadata>;
}
