//! Local filesystem probe.
//!
//! Implements `FsProbe` against `std::fs`.

use crate::services::ports::fs::{ChildEntry, EntryMetadata, FsError, FsProbe, Result};
use std::fs;
use std::path::Path;

pub struct LocalFsProbe;

impl LocalFsProbe {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFsProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl FsProbe for LocalFsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_children(&self, path: &Path) -> Result<Vec<ChildEntry>> {
        let read = fs::read_dir(path).map_err(|e| FsError::from_io(e, path))?;

        // (is_dir, entry) pairs; is_dir only drives the sort below and is
        // best-effort, full metadata stays a separate stat call.
        let mut entries = Vec::new();
        for entry in read {
            let entry = entry.map_err(|e| FsError::from_io(e, path))?;
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            entries.push((
                is_dir,
                ChildEntry {
                    name: entry.file_name().to_string_lossy().to_string(),
                    path: entry.path(),
                },
            ));
        }

        entries.sort_by(|(a_dir, a), (b_dir, b)| match (a_dir, b_dir) {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        });

        Ok(entries.into_iter().map(|(_, entry)| entry).collect())
    }

    fn stat(&self, path: &Path) -> Result<EntryMetadata> {
        // fs::metadata follows symlinks; a symlink loop surfaces as an
        // io::Error here, which is exactly the per-entry failure contract.
        let meta = fs::metadata(path).map_err(|e| FsError::from_io(e, path))?;
        Ok(EntryMetadata {
            is_dir: meta.is_dir(),
            size: meta.len(),
            modified: meta.modified().ok(),
        })
    }
}
