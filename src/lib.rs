//! bluemesh - host-editor side panel core
//!
//! Module structure:
//! - core: framework pieces (Command, Notice)
//! - models: data models (TreeNode, NavigationRegistry)
//! - services: filesystem probe port/adapter, TreeBuilder, RefreshController
//! - panel: panel sessions, channels and wire messages
//! - app: application layer (Shell, ShellConfig)

pub mod app;
pub mod core;
pub mod logging;
pub mod models;
pub mod panel;
pub mod services;

pub use app::{HostEndpoints, Shell, ShellConfig};
pub use core::{Command, Notice};
pub use models::{NavigationRegistry, TreeNode};
