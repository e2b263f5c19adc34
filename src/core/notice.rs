//! User-visible notifications.
//!
//! Components never surface errors to the host directly; they post a
//! `Notice` on the bus and degrade their own output. The host drains the
//! single receiver and renders each notice at its severity.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
    /// No workspace/root path known; the tree degrades to empty.
    NoRootConfigured,
    /// A directory could not be listed; its children degrade to empty.
    DirectoryUnreadable { path: PathBuf },
    /// A gated panel open was aborted because a companion file is absent.
    MissingPrecondition { file: PathBuf },
}

impl Notice {
    pub fn severity(&self) -> Severity {
        match self {
            Notice::Info(_) | Notice::NoRootConfigured => Severity::Info,
            Notice::Error(_)
            | Notice::DirectoryUnreadable { .. }
            | Notice::MissingPrecondition { .. } => Severity::Error,
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::Info(text) | Notice::Error(text) => write!(f, "{}", text),
            Notice::NoRootConfigured => write!(f, "No workspace folder open"),
            Notice::DirectoryUnreadable { path } => {
                write!(f, "Failed to read directory: {}", path.display())
            }
            Notice::MissingPrecondition { file } => {
                write!(f, "Required file is missing: {}", file.display())
            }
        }
    }
}

#[derive(Clone)]
pub struct NoticeSender {
    tx: Sender<Notice>,
}

pub struct NoticeReceiver {
    rx: Receiver<Notice>,
}

pub fn notice_bus() -> (NoticeSender, NoticeReceiver) {
    let (tx, rx) = mpsc::channel();
    (NoticeSender { tx }, NoticeReceiver { rx })
}

impl NoticeSender {
    pub fn send(&self, notice: Notice) {
        // The host dropping its receiver only means nobody is listening.
        let _ = self.tx.send(notice);
    }
}

impl NoticeReceiver {
    pub fn try_recv(&mut self) -> Result<Notice, TryRecvError> {
        self.rx.try_recv()
    }

    pub fn drain(&mut self) -> Vec<Notice> {
        let mut out = Vec::new();
        while let Ok(notice) = self.rx.try_recv() {
            out.push(notice);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bus_delivery_in_order() {
        let (tx, mut rx) = notice_bus();
        tx.send(Notice::Info("first".to_string()));
        tx.send(Notice::NoRootConfigured);

        let drained = rx.drain();
        assert_eq!(
            drained,
            vec![Notice::Info("first".to_string()), Notice::NoRootConfigured]
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_severity() {
        assert_eq!(Notice::NoRootConfigured.severity(), Severity::Info);
        assert_eq!(
            Notice::DirectoryUnreadable {
                path: PathBuf::from("/p")
            }
            .severity(),
            Severity::Error
        );
        assert_eq!(
            Notice::MissingPrecondition {
                file: PathBuf::from("/p/services.json")
            }
            .severity(),
            Severity::Error
        );
    }

    #[test]
    fn test_display() {
        let notice = Notice::DirectoryUnreadable {
            path: PathBuf::from("/locked"),
        };
        assert_eq!(notice.to_string(), "Failed to read directory: /locked");
        assert_eq!(Notice::NoRootConfigured.to_string(), "No workspace folder open");
    }

    #[test]
    fn test_send_without_receiver_is_silent() {
        let (tx, rx) = notice_bus();
        drop(rx);
        tx.send(Notice::Info("nobody listening".to_string()));
    }
}
