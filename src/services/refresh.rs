//! Refresh controller: root path + tree invalidation signal.
//!
//! Consumers hold the single `InvalidationReceiver`; every `TreeInvalidated`
//! they drain means "discard all materialized nodes and re-request from the
//! root". The controller owns the authoritative root path; nothing else in
//! the subsystem caches it.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeInvalidated;

pub struct RefreshController {
    root: Option<PathBuf>,
    tx: Sender<TreeInvalidated>,
}

pub struct InvalidationReceiver {
    rx: Receiver<TreeInvalidated>,
}

impl RefreshController {
    /// Returns the controller plus the one consumer endpoint. Construction
    /// does not emit: nothing is materialized yet.
    pub fn new(root: Option<PathBuf>) -> (Self, InvalidationReceiver) {
        let (tx, rx) = mpsc::channel();
        (Self { root, tx }, InvalidationReceiver { rx })
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Replace the watched root, then invalidate. `None` means no
    /// workspace context.
    pub fn set_root(&mut self, root: Option<PathBuf>) {
        tracing::info!(root = ?root, "workspace root changed");
        self.root = root;
        self.emit();
    }

    /// Invalidate without changing the root.
    pub fn refresh(&self) {
        self.emit();
    }

    fn emit(&self) {
        // One event per triggering call; an absent consumer is not an error.
        if self.tx.send(TreeInvalidated).is_err() {
            tracing::debug!("tree invalidation dropped: no consumer");
        }
    }
}

impl InvalidationReceiver {
    pub fn try_recv(&mut self) -> Result<TreeInvalidated, TryRecvError> {
        self.rx.try_recv()
    }

    pub fn pending(&mut self) -> usize {
        let mut count = 0;
        while self.rx.try_recv().is_ok() {
            count += 1;
        }
        count
    }
}
