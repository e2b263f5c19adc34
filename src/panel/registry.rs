//! Panel session registry.
//!
//! Sessions live in a slotmap arena; a secondary map enforces at most one
//! live surface per logical panel kind. Closing is host-driven; closed
//! sessions stay in the arena (still draining and dropping late messages)
//! until their kind is reopened.

use crate::panel::channel::SurfaceEnd;
use crate::panel::content::PanelKind;
use crate::panel::session::{PanelContent, PanelHandler, PanelSession, SessionState};
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

new_key_type! { pub struct SessionId; }

pub struct PanelRegistry {
    sessions: SlotMap<SessionId, PanelSession>,
    by_kind: FxHashMap<PanelKind, SessionId>,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self {
            sessions: SlotMap::with_key(),
            by_kind: FxHashMap::default(),
        }
    }

    /// Open a panel of `kind`. An existing session of the same kind is
    /// closed and replaced; its arena slot is reclaimed.
    pub fn open(
        &mut self,
        kind: PanelKind,
        content: PanelContent,
        handler: Box<dyn PanelHandler>,
    ) -> (SessionId, SurfaceEnd) {
        if let Some(old) = self.by_kind.remove(&kind) {
            if let Some(session) = self.sessions.get_mut(old) {
                session.close();
            }
            self.sessions.remove(old);
        }

        let mut session = PanelSession::new(kind.name());
        // A freshly created session always accepts open.
        let surface = session
            .open(content, handler)
            .unwrap_or_else(|| unreachable!("created session rejected open"));

        let id = self.sessions.insert(session);
        self.by_kind.insert(kind, id);
        tracing::info!(kind = kind.name(), "panel opened");
        (id, surface)
    }

    /// Host notification that a surface was closed. Unknown ids are stale
    /// and ignored.
    pub fn close(&mut self, id: SessionId) {
        if let Some(session) = self.sessions.get_mut(id) {
            session.close();
        }
    }

    pub fn state(&self, id: SessionId) -> Option<SessionState> {
        self.sessions.get(id).map(|s| s.state())
    }

    pub fn session_for(&self, kind: PanelKind) -> Option<SessionId> {
        self.by_kind.get(&kind).copied()
    }

    pub fn open_count(&self) -> usize {
        self.sessions
            .values()
            .filter(|s| s.state() == SessionState::Open)
            .count()
    }

    /// Pump every session's inbound queue, FIFO within each channel.
    pub fn pump(&mut self) {
        for (_, session) in self.sessions.iter_mut() {
            session.pump();
        }
    }
}

impl Default for PanelRegistry {
    fn default() -> Self {
        Self::new()
    }
}
