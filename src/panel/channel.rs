//! Bidirectional panel channel.
//!
//! One FIFO queue per direction, raw JSON values on the wire. Each panel
//! session gets its own pair; there is no ordering across channels.

use serde_json::Value;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// The session's side: drains inbound surface messages, pushes updates.
pub struct SessionEnd {
    inbound: Receiver<Value>,
    outbound: Sender<Value>,
}

/// The embedded surface's side: pushes user actions, drains updates.
pub struct SurfaceEnd {
    outbound: Sender<Value>,
    inbound: Receiver<Value>,
}

pub fn panel_channel() -> (SessionEnd, SurfaceEnd) {
    let (to_session, from_surface) = mpsc::channel();
    let (to_surface, from_session) = mpsc::channel();
    (
        SessionEnd {
            inbound: from_surface,
            outbound: to_surface,
        },
        SurfaceEnd {
            outbound: to_session,
            inbound: from_session,
        },
    )
}

impl SessionEnd {
    pub fn try_recv(&mut self) -> Result<Value, TryRecvError> {
        self.inbound.try_recv()
    }

    pub fn send(&self, value: Value) {
        // A gone surface just means the update has no audience.
        let _ = self.outbound.send(value);
    }
}

impl SurfaceEnd {
    pub fn post(&self, value: Value) {
        let _ = self.outbound.send(value);
    }

    pub fn try_recv(&mut self) -> Result<Value, TryRecvError> {
        self.inbound.try_recv()
    }

    pub fn drain(&mut self) -> Vec<Value> {
        let mut out = Vec::new();
        while let Ok(value) = self.inbound.try_recv() {
            out.push(value);
        }
        out
    }
}
