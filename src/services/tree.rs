//! Lazy tree materialization.
//!
//! `TreeBuilder` turns one directory's immediate children into `TreeNode`s
//! on demand. It holds no cache and no root of its own: the root path is
//! passed in per call so the refresh controller stays the single source of
//! truth. Failures degrade the affected output and are reported as a
//! `TreeNotice` instead of unwinding to the caller.

use crate::models::tree_node::TreeNode;
use crate::services::ports::fs::FsProbe;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Non-fatal signal attached to a listing. At most one per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNotice {
    NoRootConfigured,
    DirectoryUnreadable(PathBuf),
}

/// Result of one expansion request: the nodes plus an optional notice.
#[derive(Debug)]
pub struct Listing {
    pub nodes: Vec<TreeNode>,
    pub notice: Option<TreeNotice>,
}

impl Listing {
    fn empty(notice: Option<TreeNotice>) -> Self {
        Self {
            nodes: Vec::new(),
            notice,
        }
    }
}

pub struct TreeBuilder {
    probe: Arc<dyn FsProbe>,
}

impl TreeBuilder {
    pub fn new(probe: Arc<dyn FsProbe>) -> Self {
        Self { probe }
    }

    /// Materialize the children of `parent`, or of `root` when `parent` is
    /// `None`. Every listed entry yields exactly one node: entries whose
    /// stat fails become degraded placeholders rather than being omitted.
    /// Expansion is strictly on demand; nothing below the requested
    /// directory is touched.
    pub fn children_of(&self, root: Option<&Path>, parent: Option<&TreeNode>) -> Listing {
        let dir: &Path = match parent {
            Some(node) => {
                if !node.expandable {
                    // The host is expected to honor `expandable`; a stray
                    // request for a leaf yields nothing.
                    tracing::debug!(path = %node.path.display(), "children requested for non-expandable node");
                    return Listing::empty(None);
                }
                &node.path
            }
            None => match root {
                Some(root) => root,
                None => return Listing::empty(Some(TreeNotice::NoRootConfigured)),
            },
        };

        let entries = match self.probe.list_children(dir) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(dir = %dir.display(), error = %err, "directory unreadable");
                return Listing::empty(Some(TreeNotice::DirectoryUnreadable(dir.to_path_buf())));
            }
        };

        let mut nodes = Vec::with_capacity(entries.len());
        for entry in entries {
            let node = match self.probe.stat(&entry.path) {
                Ok(meta) => TreeNode::from_metadata(entry.name, entry.path, &meta),
                Err(err) => {
                    tracing::warn!(path = %entry.path.display(), error = %err, "stat failed, degrading entry");
                    TreeNode::degraded(entry.name, entry.path)
                }
            };
            nodes.push(node);
        }

        Listing {
            nodes,
            notice: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tree_node::NodeKind;
    use crate::services::ports::fs::{ChildEntry, EntryMetadata, FsError, Result as FsResult};
    use rustc_hash::FxHashSet;
    use std::time::SystemTime;

    /// Synthetic probe: a fixed listing per directory and a set of paths
    /// whose stat fails.
    struct FakeProbe {
        listings: Vec<(PathBuf, Vec<ChildEntry>)>,
        dirs: FxHashSet<PathBuf>,
        stat_denied: FxHashSet<PathBuf>,
        unreadable: FxHashSet<PathBuf>,
    }

    impl FakeProbe {
        fn new() -> Self {
            Self {
                listings: Vec::new(),
                dirs: FxHashSet::default(),
                stat_denied: FxHashSet::default(),
                unreadable: FxHashSet::default(),
            }
        }

        fn with_dir(mut self, dir: &str, children: &[(&str, bool)]) -> Self {
            let dir_path = PathBuf::from(dir);
            let entries = children
                .iter()
                .map(|(name, is_dir)| {
                    let path = dir_path.join(name);
                    if *is_dir {
                        self.dirs.insert(path.clone());
                    }
                    ChildEntry {
                        name: name.to_string(),
                        path,
                    }
                })
                .collect();
            self.dirs.insert(dir_path.clone());
            self.listings.push((dir_path, entries));
            self
        }

        fn deny_stat(mut self, path: &str) -> Self {
            self.stat_denied.insert(PathBuf::from(path));
            self
        }

        fn deny_listing(mut self, path: &str) -> Self {
            self.unreadable.insert(PathBuf::from(path));
            self
        }
    }

    impl FsProbe for FakeProbe {
        fn exists(&self, path: &Path) -> bool {
            self.listings.iter().any(|(dir, _)| dir == path)
        }

        fn list_children(&self, path: &Path) -> FsResult<Vec<ChildEntry>> {
            if self.unreadable.contains(path) {
                return Err(FsError::PermissionDenied(path.to_path_buf()));
            }
            self.listings
                .iter()
                .find(|(dir, _)| dir == path)
                .map(|(_, entries)| entries.clone())
                .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
        }

        fn stat(&self, path: &Path) -> FsResult<EntryMetadata> {
            if self.stat_denied.contains(path) {
                return Err(FsError::PermissionDenied(path.to_path_buf()));
            }
            Ok(EntryMetadata {
                is_dir: self.dirs.contains(path),
                size: if self.dirs.contains(path) { 0 } else { 100 },
                modified: Some(SystemTime::UNIX_EPOCH),
            })
        }
    }

    fn builder(probe: FakeProbe) -> TreeBuilder {
        TreeBuilder::new(Arc::new(probe))
    }

    #[test]
    fn test_no_root_configured() {
        let tree = builder(FakeProbe::new());

        // Idempotent: each call returns empty and signals exactly once.
        for _ in 0..3 {
            let listing = tree.children_of(None, None);
            assert!(listing.nodes.is_empty());
            assert_eq!(listing.notice, Some(TreeNotice::NoRootConfigured));
        }
    }

    #[test]
    fn test_root_listing_scenario() {
        // /proj: a.txt (100 bytes), sub/ (dir), b.bin (inaccessible).
        let probe = FakeProbe::new()
            .with_dir("/proj", &[("a.txt", false), ("sub", true), ("b.bin", false)])
            .deny_stat("/proj/b.bin");
        let tree = builder(probe);

        let listing = tree.children_of(Some(Path::new("/proj")), None);
        assert!(listing.notice.is_none());
        assert_eq!(listing.nodes.len(), 3);

        let a = &listing.nodes[0];
        assert_eq!(a.label, "a.txt");
        assert_eq!(a.kind, NodeKind::File);
        assert_eq!(a.size, 100);
        assert!(!a.expandable);

        let sub = &listing.nodes[1];
        assert_eq!(sub.label, "sub");
        assert_eq!(sub.kind, NodeKind::Folder);
        assert!(sub.expandable);

        let b = &listing.nodes[2];
        assert_eq!(b.label, "b.bin (access denied)");
        assert_eq!(b.kind, NodeKind::File);
        assert_eq!(b.size, 0);
        assert!(!b.expandable);
    }

    #[test]
    fn test_cardinality_preserved_under_stat_failures() {
        let probe = FakeProbe::new()
            .with_dir(
                "/r",
                &[("a", false), ("b", false), ("c", true), ("d", false)],
            )
            .deny_stat("/r/a")
            .deny_stat("/r/b")
            .deny_stat("/r/d");
        let tree = builder(probe);

        let listing = tree.children_of(Some(Path::new("/r")), None);
        assert_eq!(listing.nodes.len(), 4);

        // The one healthy entry is untouched by its siblings' failures.
        let c = &listing.nodes[2];
        assert_eq!(c.label, "c");
        assert!(c.expandable);
    }

    #[test]
    fn test_directory_unreadable() {
        let probe = FakeProbe::new().deny_listing("/locked");
        let tree = builder(probe);

        let listing = tree.children_of(Some(Path::new("/locked")), None);
        assert!(listing.nodes.is_empty());
        assert_eq!(
            listing.notice,
            Some(TreeNotice::DirectoryUnreadable(PathBuf::from("/locked")))
        );
    }

    #[test]
    fn test_lazy_expansion_through_folder_node() {
        let probe = FakeProbe::new()
            .with_dir("/r", &[("sub", true)])
            .with_dir("/r/sub", &[("inner.txt", false)]);
        let tree = builder(probe);

        let root = tree.children_of(Some(Path::new("/r")), None);
        let sub = &root.nodes[0];
        assert!(sub.expandable);

        let children = tree.children_of(Some(Path::new("/r")), Some(sub));
        assert_eq!(children.nodes.len(), 1);
        assert_eq!(children.nodes[0].label, "inner.txt");
    }

    #[test]
    fn test_non_expandable_parent_yields_empty() {
        let probe = FakeProbe::new().with_dir("/r", &[("f.txt", false)]);
        let tree = builder(probe);

        let root = tree.children_of(Some(Path::new("/r")), None);
        let leaf = root.nodes[0].clone();

        let listing = tree.children_of(Some(Path::new("/r")), Some(&leaf));
        assert!(listing.nodes.is_empty());
        assert!(listing.notice.is_none());
    }

    #[test]
    fn test_listing_order_preserved() {
        let probe = FakeProbe::new().with_dir("/r", &[("z", false), ("a", false), ("m", true)]);
        let tree = builder(probe);

        // The builder publishes exactly the probe's order.
        let listing = tree.children_of(Some(Path::new("/r")), None);
        let labels: Vec<&str> = listing.nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["z", "a", "m"]);
    }
}
