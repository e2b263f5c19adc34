//! Core framework: commands and notices.

pub mod command;
pub mod notice;

pub use command::Command;
pub use notice::{notice_bus, Notice, NoticeReceiver, NoticeSender, Severity};
