//! Panel subsystem: sessions, channels, wire messages, content.

pub mod channel;
pub mod content;
pub mod message;
pub mod registry;
pub mod session;

pub use channel::{panel_channel, SessionEnd, SurfaceEnd};
pub use content::PanelKind;
pub use message::PanelMessage;
pub use registry::{PanelRegistry, SessionId};
pub use session::{Handled, PanelContent, PanelHandler, PanelSession, SessionState};
