//! Wire key names consumed by the test harness.
//!
//! These strings are the payload schema. Renaming any of them breaks remote
//! clients.

/// Keys of a packet keep-alive payload.
pub mod keepalive {
    pub const ID: &str = "id";
    pub const PACKET_KEEPALIVE_EVENT: &str = "packet_keepalive_event";
}

/// Keys of a network callback payload.
pub mod network_callback {
    pub const ID: &str = "id";
    pub const NETWORK_CALLBACK_EVENT: &str = "network_callback_event";
    pub const CREATE_TIMESTAMP: &str = "create_timestamp";
    pub const CURRENT_TIMESTAMP: &str = "current_timestamp";
    pub const MAX_MS_TO_LIVE: &str = "max_ms_to_live";
    pub const RSSI: &str = "rssi";
    pub const INTERFACE_NAME: &str = "interface_name";
    pub const AWARE_IPV6: &str = "aware_ipv6";
    pub const AWARE_PORT: &str = "aware_port";
    pub const AWARE_TRANSPORT_PROTOCOL: &str = "aware_transport_protocol";
}

/// Topic a payload is posted under.
pub mod topics {
    pub const PACKET_KEEPALIVE_CALLBACK: &str = "PacketKeepaliveCallback";
    pub const NETWORK_CALLBACK: &str = "NetworkCallback";
}
