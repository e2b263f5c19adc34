//! Panel wire messages.
//!
//! Exactly two kinds flow over a panel channel: `userAction` (surface to
//! session) and `update` (session to surface). The wire format is JSON;
//! the surface is a controlled same-process peer, so malformed values are
//! dropped silently rather than surfaced to the user.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PanelMessage {
    UserAction {
        action: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<Value>,
    },
    Update {
        action: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<Value>,
    },
}

impl PanelMessage {
    pub fn user_action(action: &str, payload: Option<Value>) -> Self {
        PanelMessage::UserAction {
            action: action.to_string(),
            payload,
        }
    }

    pub fn update(action: &str, payload: Option<Value>) -> Self {
        PanelMessage::Update {
            action: action.to_string(),
            payload,
        }
    }

    pub fn action(&self) -> &str {
        match self {
            PanelMessage::UserAction { action, .. } | PanelMessage::Update { action, .. } => action,
        }
    }

    pub fn to_wire(&self) -> Value {
        // Both variants serialize to plain maps; this cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[derive(Debug)]
pub struct MalformedMessage(pub String);

impl std::fmt::Display for MalformedMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "malformed panel message: {}", self.0)
    }
}

impl std::error::Error for MalformedMessage {}

/// Decode a raw inbound value. Anything without the required `kind` and
/// `action` fields is malformed.
pub fn decode(raw: Value) -> Result<PanelMessage, MalformedMessage> {
    serde_json::from_value(raw).map_err(|e| MalformedMessage(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_user_action() {
        let raw = json!({"kind": "userAction", "action": "ready"});
        let msg = decode(raw).unwrap();
        assert_eq!(msg, PanelMessage::user_action("ready", None));
    }

    #[test]
    fn test_decode_with_payload() {
        let raw = json!({"kind": "userAction", "action": "notify", "payload": {"text": "hi"}});
        let msg = decode(raw).unwrap();
        assert_eq!(msg.action(), "notify");
        match msg {
            PanelMessage::UserAction { payload, .. } => {
                assert_eq!(payload, Some(json!({"text": "hi"})));
            }
            _ => panic!("expected user action"),
        }
    }

    #[test]
    fn test_decode_missing_action_is_malformed() {
        assert!(decode(json!({"kind": "userAction"})).is_err());
    }

    #[test]
    fn test_decode_missing_kind_is_malformed() {
        assert!(decode(json!({"action": "ready"})).is_err());
        assert!(decode(json!("just a string")).is_err());
        assert!(decode(Value::Null).is_err());
    }

    #[test]
    fn test_update_wire_shape() {
        let wire = PanelMessage::update("init", Some(json!({"v": 1}))).to_wire();
        assert_eq!(wire, json!({"kind": "update", "action": "init", "payload": {"v": 1}}));

        // Absent payload stays absent on the wire.
        let wire = PanelMessage::update("ack", None).to_wire();
        assert_eq!(wire, json!({"kind": "update", "action": "ack"}));
    }
}
