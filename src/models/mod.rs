//! Data models: tree nodes and the navigation menu.

pub mod navigation;
pub mod tree_node;

pub use navigation::{ActionId, NavigationEntry, NavigationRegistry};
pub use tree_node::{display_hints, DisplayHints, NodeKind, TreeNode};
