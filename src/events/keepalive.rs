//! Packet keep-alive status events.

use serde::Serialize;
use serde_json::Value;

use crate::types::Result;

/// One keep-alive status notification.
///
/// Serializes to `{"id": .., "packet_keepalive_event": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeepaliveEvent {
    id: String,
    #[serde(rename = "packet_keepalive_event")]
    event: String,
}

impl KeepaliveEvent {
    pub fn new(id: impl Into<String>, event: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            event: event.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
