//! Panel session state machine.
//!
//! `Created → Open → Closed`, `Closed` terminal. A session owns the session
//! end of one channel and at most one handler. Inbound handling is strictly
//! reactive: each user action dispatches to the handler, which may produce
//! zero or one update synchronously and never blocks on further input.

use crate::panel::channel::{panel_channel, SessionEnd, SurfaceEnd};
use crate::panel::message::{self, PanelMessage};
use serde_json::Value;

/// What a handler did with an action.
pub enum Handled {
    /// Enqueue exactly one update back to the surface.
    Reply { action: String, payload: Option<Value> },
    /// Recognized, nothing to send.
    Silent,
    /// Not in this panel's vocabulary; ignored after a debug log.
    Unrecognized,
}

/// The one message handler bound to a session. Implementations map each
/// `action` value of their fixed vocabulary to exactly one behavior.
pub trait PanelHandler {
    fn on_action(&mut self, action: &str, payload: Option<&Value>) -> Handled;
}

/// Opaque content descriptor attached at open: which template the host
/// should render plus the initial data for it. The markup itself lives
/// with the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelContent {
    pub template: String,
    pub initial: Value,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Created,
    Open,
    Closed,
}

pub struct PanelSession {
    kind: String,
    state: SessionState,
    content: Option<PanelContent>,
    handler: Option<Box<dyn PanelHandler>>,
    channel: Option<SessionEnd>,
}

impl PanelSession {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            state: SessionState::Created,
            content: None,
            handler: None,
            channel: None,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn content(&self) -> Option<&PanelContent> {
        self.content.as_ref()
    }

    /// `Created → Open`: attach content, bind the one handler, establish
    /// the channel. Returns the surface end for the host to hand to the
    /// embedded surface. Opening twice is a host bug; the second call is
    /// ignored and returns `None`.
    pub fn open(
        &mut self,
        content: PanelContent,
        handler: Box<dyn PanelHandler>,
    ) -> Option<SurfaceEnd> {
        if self.state != SessionState::Created {
            tracing::warn!(kind = %self.kind, state = ?self.state, "open on non-created session ignored");
            return None;
        }
        let (session_end, surface_end) = panel_channel();
        self.content = Some(content);
        self.handler = Some(handler);
        self.channel = Some(session_end);
        self.state = SessionState::Open;
        tracing::debug!(kind = %self.kind, "panel session opened");
        Some(surface_end)
    }

    /// Drain and handle all pending inbound messages in arrival order.
    /// On a closed session this still drains, silently dropping everything.
    pub fn pump(&mut self) {
        let Some(mut channel) = self.channel.take() else {
            return;
        };

        while let Ok(raw) = channel.try_recv() {
            if self.state == SessionState::Closed {
                tracing::debug!(kind = %self.kind, "message after close dropped");
                continue;
            }
            self.handle_raw(&channel, raw);
        }

        self.channel = Some(channel);
    }

    fn handle_raw(&mut self, channel: &SessionEnd, raw: Value) {
        let msg = match message::decode(raw) {
            Ok(msg) => msg,
            Err(err) => {
                tracing::debug!(kind = %self.kind, error = %err, "dropping malformed message");
                return;
            }
        };

        let (action, payload) = match msg {
            PanelMessage::UserAction { action, payload } => (action, payload),
            PanelMessage::Update { action, .. } => {
                // Updates only flow session → surface.
                tracing::debug!(kind = %self.kind, action = %action, "unexpected update from surface dropped");
                return;
            }
        };

        let Some(handler) = self.handler.as_mut() else {
            return;
        };

        match handler.on_action(&action, payload.as_ref()) {
            Handled::Reply { action, payload } => {
                channel.send(PanelMessage::update(&action, payload).to_wire());
            }
            Handled::Silent => {}
            Handled::Unrecognized => {
                tracing::debug!(kind = %self.kind, action = %action, "unrecognized panel action ignored");
            }
        }
    }

    /// `Open → Closed` (also collapses `Created` sessions that never
    /// opened). Host-driven; terminal.
    pub fn close(&mut self) {
        if self.state != SessionState::Closed {
            tracing::debug!(kind = %self.kind, "panel session closed");
        }
        self.state = SessionState::Closed;
    }
}
