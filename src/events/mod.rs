//! Event infrastructure: connectivity callback events as harness payloads.
//!
//! Each record is built once from the values a callback delivered, then
//! serialized to the fixed key schema in [`keys`].

pub mod callback;
pub mod keepalive;
pub mod keys;
pub mod names;
pub mod transport;
pub mod translation;

pub use callback::{CallbackDetail, NetworkCallbackEvent};
pub use keepalive::KeepaliveEvent;
pub use names::{NetworkCallbackKind, PacketKeepaliveKind};
pub use transport::{TransportInfo, WifiAwareNetworkInfo, NO_PORT, NO_TRANSPORT_PROTOCOL};
pub use translation::{translate_connectivity_event, ConnectivityEvent};
