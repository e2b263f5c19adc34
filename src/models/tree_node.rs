//! Tree node data model.
//!
//! `TreeNode` is a plain value: one materialized filesystem entry, created
//! on demand when the host expands a folder and discarded wholesale on
//! refresh. Presentation data (icon, tooltip, description) is derived by
//! `display_hints`, keeping the node itself free of host vocabulary.

use crate::services::ports::fs::EntryMetadata;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

pub const ACCESS_DENIED_SUFFIX: &str = " (access denied)";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Folder,
    File,
}

#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Entry name; degraded entries carry the access-denied suffix.
    pub label: String,
    /// Absolute path, unique among siblings.
    pub path: PathBuf,
    pub kind: NodeKind,
    /// 0 when unknown or inaccessible.
    pub size: u64,
    /// Best effort; falls back to the materialization time when unknown.
    pub modified: SystemTime,
    /// The only authority the presentation layer may use to offer
    /// expansion. True iff `kind == Folder`.
    pub expandable: bool,
}

impl TreeNode {
    /// Node for an entry whose metadata was readable.
    pub fn from_metadata(name: String, path: PathBuf, meta: &EntryMetadata) -> Self {
        let kind = if meta.is_dir {
            NodeKind::Folder
        } else {
            NodeKind::File
        };
        Self {
            label: name,
            path,
            kind,
            size: meta.size,
            modified: meta.modified.unwrap_or_else(SystemTime::now),
            expandable: kind == NodeKind::Folder,
        }
    }

    /// Placeholder for an entry whose stat failed. Forced to a
    /// non-expandable file so the host never asks for its children.
    pub fn degraded(name: String, path: PathBuf) -> Self {
        Self {
            label: format!("{}{}", name, ACCESS_DENIED_SUFFIX),
            path,
            kind: NodeKind::File,
            size: 0,
            modified: SystemTime::now(),
            expandable: false,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }
}

/// Display data the tree widget needs per node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayHints {
    pub icon: &'static str,
    pub tooltip: String,
    /// Inline secondary text: human-readable file size, empty for folders.
    pub description: String,
    /// Activation the host should wire on click, if any.
    pub activation: Option<&'static str>,
}

pub fn display_hints(node: &TreeNode) -> DisplayHints {
    display_hints_at(node, SystemTime::now())
}

/// `now` is injected so the mapping stays a pure function.
pub fn display_hints_at(node: &TreeNode, now: SystemTime) -> DisplayHints {
    let size_text = match node.kind {
        NodeKind::Folder => "Directory".to_string(),
        NodeKind::File => format!("{} bytes", node.size),
    };
    let tooltip = format!(
        "{}\nSize: {}\nModified: {}",
        node.label,
        size_text,
        format_age(node.modified, now)
    );

    DisplayHints {
        icon: match node.kind {
            NodeKind::Folder => "folder",
            NodeKind::File => "file",
        },
        tooltip,
        description: match node.kind {
            NodeKind::Folder => String::new(),
            NodeKind::File => format_size(node.size),
        },
        activation: match node.kind {
            NodeKind::Folder => None,
            NodeKind::File => Some("open"),
        },
    }
}

fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    if size < KB {
        format!("{} B", size)
    } else if size < MB {
        format!("{:.1} KB", size as f64 / KB as f64)
    } else {
        format!("{:.1} MB", size as f64 / MB as f64)
    }
}

fn format_age(modified: SystemTime, now: SystemTime) -> String {
    let elapsed = now
        .duration_since(modified)
        .unwrap_or(Duration::ZERO)
        .as_secs();
    if elapsed < 60 {
        "just now".to_string()
    } else if elapsed < 3600 {
        format!("{}m ago", elapsed / 60)
    } else if elapsed < 86_400 {
        format!("{}h ago", elapsed / 3600)
    } else {
        format!("{}d ago", elapsed / 86_400)
    }
}
