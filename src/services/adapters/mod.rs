//! Service adapters: concrete capability implementations.

pub mod local_fs;

pub use local_fs::LocalFsProbe;
