//! Service ports: traits + data contracts.

pub mod fs;

pub use fs::{ChildEntry, EntryMetadata, FsError, FsProbe, Result as FsResult};
