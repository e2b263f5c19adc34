//! Built-in panel content and handlers.
//!
//! Each logical panel is a content descriptor (template id + initial data)
//! plus one handler implementing that panel's fixed action vocabulary.
//! Markup is owned by the presentation layer; nothing here renders.

use crate::core::notice::{Notice, NoticeSender};
use crate::logging::LogBuffer;
use crate::panel::session::{Handled, PanelContent, PanelHandler};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Home,
    Console,
    Architecture,
    Widget,
}

impl PanelKind {
    pub fn name(&self) -> &'static str {
        match self {
            PanelKind::Home => "home",
            PanelKind::Console => "console",
            PanelKind::Architecture => "architecture",
            PanelKind::Widget => "widget",
        }
    }
}

pub fn home_content() -> PanelContent {
    PanelContent {
        template: PanelKind::Home.name().to_string(),
        initial: json!({
            "title": "Bluemesh",
            "body": "Browse the workspace tree in the side panel. Use the navigation menu to open the console or the architecture view.",
        }),
    }
}

pub fn architecture_content() -> PanelContent {
    PanelContent {
        template: PanelKind::Architecture.name().to_string(),
        initial: json!({
            "title": "Architecture",
            "sections": [
                "Directory tree (lazy, per-folder expansion)",
                "Navigation menu (Home, Console, Architecture View)",
                "Embedded widget surface (message-driven)",
            ],
        }),
    }
}

pub fn console_content(logs: &Rc<RefCell<LogBuffer>>) -> PanelContent {
    PanelContent {
        template: PanelKind::Console.name().to_string(),
        initial: json!({
            "title": "Console",
            "lines": logs.borrow().lines(),
        }),
    }
}

pub fn widget_content() -> PanelContent {
    PanelContent {
        template: PanelKind::Widget.name().to_string(),
        initial: json!({ "title": "Widget" }),
    }
}

/// Static informational panels (home, architecture): replays the initial
/// payload when the surface reports ready.
pub struct InfoHandler {
    initial: Value,
}

impl InfoHandler {
    pub fn new(content: &PanelContent) -> Self {
        Self {
            initial: content.initial.clone(),
        }
    }
}

impl PanelHandler for InfoHandler {
    fn on_action(&mut self, action: &str, _payload: Option<&Value>) -> Handled {
        match action {
            "ready" => Handled::Reply {
                action: "init".to_string(),
                payload: Some(self.initial.clone()),
            },
            _ => Handled::Unrecognized,
        }
    }
}

/// Console panel: serves the shared in-process log buffer.
pub struct ConsoleHandler {
    logs: Rc<RefCell<LogBuffer>>,
}

impl ConsoleHandler {
    pub fn new(logs: Rc<RefCell<LogBuffer>>) -> Self {
        Self { logs }
    }

    fn lines_payload(&self) -> Value {
        json!({ "lines": self.logs.borrow().lines() })
    }
}

impl PanelHandler for ConsoleHandler {
    fn on_action(&mut self, action: &str, _payload: Option<&Value>) -> Handled {
        match action {
            "ready" => Handled::Reply {
                action: "init".to_string(),
                payload: Some(self.lines_payload()),
            },
            "refresh" => Handled::Reply {
                action: "logs".to_string(),
                payload: Some(self.lines_payload()),
            },
            _ => Handled::Unrecognized,
        }
    }
}

/// Interactive widget: relays surface-side `notify` actions to the notice
/// bus so they become host-visible notifications.
pub struct WidgetHandler {
    notices: NoticeSender,
}

impl WidgetHandler {
    pub fn new(notices: NoticeSender) -> Self {
        Self { notices }
    }
}

impl PanelHandler for WidgetHandler {
    fn on_action(&mut self, action: &str, payload: Option<&Value>) -> Handled {
        match action {
            "ready" => Handled::Reply {
                action: "init".to_string(),
                payload: Some(widget_content().initial),
            },
            "notify" => {
                let text = payload
                    .and_then(|p| p.get("text"))
                    .and_then(|t| t.as_str())
                    .unwrap_or("Widget notification");
                self.notices.send(Notice::Info(text.to_string()));
                Handled::Reply {
                    action: "ack".to_string(),
                    payload: None,
                }
            }
            _ => Handled::Unrecognized,
        }
    }
}
