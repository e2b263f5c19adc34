//! Service layer: filesystem probing, tree materialization, refresh.

pub mod adapters;
pub mod ports;
pub mod refresh;
pub mod tree;

pub use refresh::{InvalidationReceiver, RefreshController, TreeInvalidated};
pub use tree::{Listing, TreeBuilder, TreeNotice};
