//! Event translation: connectivity events → harness topic + JSON payload.
//!
//! Pure deterministic mapping:
//!   Keepalive       → PacketKeepaliveCallback
//!   NetworkCallback → NetworkCallback
//!
//! An encoding failure drops the whole event; no partial payload is returned.

use serde_json::Value;

use super::callback::NetworkCallbackEvent;
use super::keepalive::KeepaliveEvent;
use super::keys::topics;
use crate::types::Result;

/// Any event the connectivity layer can hand to the harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectivityEvent {
    Keepalive(KeepaliveEvent),
    NetworkCallback(NetworkCallbackEvent),
}

impl ConnectivityEvent {
    /// Topic the payload is posted under.
    pub fn topic(&self) -> &'static str {
        match self {
            ConnectivityEvent::Keepalive(_) => topics::PACKET_KEEPALIVE_CALLBACK,
            ConnectivityEvent::NetworkCallback(_) => topics::NETWORK_CALLBACK,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ConnectivityEvent::Keepalive(event) => event.id(),
            ConnectivityEvent::NetworkCallback(event) => event.id(),
        }
    }

    pub fn event_name(&self) -> &str {
        match self {
            ConnectivityEvent::Keepalive(event) => event.event(),
            ConnectivityEvent::NetworkCallback(event) => event.event(),
        }
    }

    pub fn to_json(&self) -> Result<Value> {
        match self {
            ConnectivityEvent::Keepalive(event) => event.to_json(),
            ConnectivityEvent::NetworkCallback(event) => event.to_json(),
        }
    }
}

impl From<KeepaliveEvent> for ConnectivityEvent {
    fn from(event: KeepaliveEvent) -> Self {
        ConnectivityEvent::Keepalive(event)
    }
}

impl From<NetworkCallbackEvent> for ConnectivityEvent {
    fn from(event: NetworkCallbackEvent) -> Self {
        ConnectivityEvent::NetworkCallback(event)
    }
}

/// Translate a connectivity event into `(topic, payload)` for the harness.
pub fn translate_connectivity_event(event: &ConnectivityEvent) -> Result<(String, Value)> {
    let topic = event.topic();
    match event.to_json() {
        Ok(payload) => {
            tracing::debug!(
                topic,
                id = event.id(),
                event = event.event_name(),
                "translated connectivity event"
            );
            Ok((topic.to_string(), payload))
        }
        Err(err) => {
            tracing::warn!(
                topic,
                id = event.id(),
                event = event.event_name(),
                error = %err,
                "dropping connectivity event"
            );
            Err(err)
        }
    }
}
