//! Network callback events.
//!
//! Every callback payload starts with the same four header fields; the
//! callback-specific detail only ever adds keys after them:
//!
//! ```text
//! Plain                 → header
//! Losing                → header + max_ms_to_live
//! CapabilitiesChanged   → header + rssi [+ aware_ipv6, aware_port, aware_transport_protocol]
//! LinkPropertiesChanged → header + interface_name
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use super::keys::network_callback as keys;
use super::transport::TransportInfo;
use crate::types::Result;

/// Milliseconds since the Unix epoch, wall clock.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Callback-specific part of a [`NetworkCallbackEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackDetail {
    /// No fields beyond the header (onAvailable, onLost, ...).
    Plain,
    Losing {
        max_ms_to_live: i32,
    },
    CapabilitiesChanged {
        rssi: i32,
        transport_info: Option<TransportInfo>,
    },
    LinkPropertiesChanged {
        interface_name: String,
    },
}

/// An immutable network callback notification.
///
/// `current_timestamp` is captured when the event is built and never
/// refreshed, so serializing the same event twice yields identical output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkCallbackEvent {
    id: String,
    event: String,
    create_timestamp: i64,
    current_timestamp: i64,
    detail: CallbackDetail,
}

impl NetworkCallbackEvent {
    /// Build an event, capturing the current wall-clock time.
    pub fn new(
        id: impl Into<String>,
        event: impl Into<String>,
        create_timestamp: i64,
        detail: CallbackDetail,
    ) -> Self {
        Self::new_at(id, event, create_timestamp, now_millis(), detail)
    }

    /// Build an event with an explicit capture time.
    pub fn new_at(
        id: impl Into<String>,
        event: impl Into<String>,
        create_timestamp: i64,
        current_timestamp: i64,
        detail: CallbackDetail,
    ) -> Self {
        Self {
            id: id.into(),
            event: event.into(),
            create_timestamp,
            current_timestamp,
            detail,
        }
    }

    pub fn plain(id: impl Into<String>, event: impl Into<String>, create_timestamp: i64) -> Self {
        Self::new(id, event, create_timestamp, CallbackDetail::Plain)
    }

    pub fn on_losing(
        id: impl Into<String>,
        event: impl Into<String>,
        create_timestamp: i64,
        max_ms_to_live: i32,
    ) -> Self {
        Self::new(
            id,
            event,
            create_timestamp,
            CallbackDetail::Losing { max_ms_to_live },
        )
    }

    pub fn on_capabilities_changed(
        id: impl Into<String>,
        event: impl Into<String>,
        create_timestamp: i64,
        rssi: i32,
        transport_info: Option<TransportInfo>,
    ) -> Self {
        Self::new(
            id,
            event,
            create_timestamp,
            CallbackDetail::CapabilitiesChanged {
                rssi,
                transport_info,
            },
        )
    }

    pub fn on_link_properties_changed(
        id: impl Into<String>,
        event: impl Into<String>,
        create_timestamp: i64,
        interface_name: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            event,
            create_timestamp,
            CallbackDetail::LinkPropertiesChanged {
                interface_name: interface_name.into(),
            },
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn create_timestamp(&self) -> i64 {
        self.create_timestamp
    }

    pub fn current_timestamp(&self) -> i64 {
        self.current_timestamp
    }

    pub fn detail(&self) -> &CallbackDetail {
        &self.detail
    }

    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for NetworkCallbackEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(keys::ID, &self.id)?;
        map.serialize_entry(keys::NETWORK_CALLBACK_EVENT, &self.event)?;
        map.serialize_entry(keys::CREATE_TIMESTAMP, &self.create_timestamp)?;
        map.serialize_entry(keys::CURRENT_TIMESTAMP, &self.current_timestamp)?;

        match &self.detail {
            CallbackDetail::Plain => {}
            CallbackDetail::Losing { max_ms_to_live } => {
                map.serialize_entry(keys::MAX_MS_TO_LIVE, max_ms_to_live)?;
            }
            CallbackDetail::CapabilitiesChanged {
                rssi,
                transport_info,
            } => {
                map.serialize_entry(keys::RSSI, rssi)?;
                if let Some(info) = transport_info {
                    info.serialize_entries(&mut map)?;
                }
            }
            CallbackDetail::LinkPropertiesChanged { interface_name } => {
                map.serialize_entry(keys::INTERFACE_NAME, interface_name)?;
            }
        }

        map.end()
    }
}
