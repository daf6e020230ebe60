//! Per-transport metadata attached to capability updates.
//!
//! Only the wifi-aware kind contributes fields to the payload. Every other
//! kind is carried so callers can pass what the platform reported, and is
//! skipped at serialization time.

use serde::ser::SerializeMap;
use std::net::Ipv6Addr;

use super::keys::network_callback as keys;

/// Port value meaning "no port assigned".
pub const NO_PORT: i32 = 0;

/// Transport protocol value meaning "unspecified".
pub const NO_TRANSPORT_PROTOCOL: i32 = -1;

/// Transport-specific capability payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportInfo {
    /// Wifi-aware (NAN) data-path information.
    WifiAware(WifiAwareNetworkInfo),
    /// A transport that reports no structured data.
    Generic,
    /// Any other capability kind. `kind` is diagnostic only.
    Unknown { kind: String },
}

impl TransportInfo {
    pub fn unknown(kind: impl Into<String>) -> Self {
        Self::Unknown { kind: kind.into() }
    }

    /// Label used in logs.
    pub fn kind(&self) -> &str {
        match self {
            TransportInfo::WifiAware(_) => "wifi_aware",
            TransportInfo::Generic => "generic",
            TransportInfo::Unknown { kind } => kind,
        }
    }

    /// Write this transport's entries into an open payload map.
    pub(crate) fn serialize_entries<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        match self {
            TransportInfo::WifiAware(info) => info.serialize_entries(map),
            TransportInfo::Generic | TransportInfo::Unknown { .. } => {
                tracing::trace!(kind = self.kind(), "transport info contributes no fields");
                Ok(())
            }
        }
    }
}

impl From<WifiAwareNetworkInfo> for TransportInfo {
    fn from(info: WifiAwareNetworkInfo) -> Self {
        TransportInfo::WifiAware(info)
    }
}

/// Peer endpoint of a wifi-aware data path.
///
/// `peer_ipv6` holds the address as the platform formats it, which may carry
/// a leading `/` when no host name is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiAwareNetworkInfo {
    pub peer_ipv6: String,
    pub port: i32,
    pub transport_protocol: i32,
}

impl WifiAwareNetworkInfo {
    pub fn new(peer_ipv6: impl Into<String>, port: i32, transport_protocol: i32) -> Self {
        Self {
            peer_ipv6: peer_ipv6.into(),
            port,
            transport_protocol,
        }
    }

    /// Build from a parsed address, formatted as the platform does (`/<addr>`).
    pub fn from_addr(addr: Ipv6Addr, port: i32, transport_protocol: i32) -> Self {
        Self::new(format!("/{}", addr), port, transport_protocol)
    }

    /// Peer address with at most one leading `/` removed.
    pub fn peer_address(&self) -> &str {
        self.peer_ipv6
            .strip_prefix('/')
            .unwrap_or(&self.peer_ipv6)
    }

    pub fn port(&self) -> Option<i32> {
        (self.port != NO_PORT).then_some(self.port)
    }

    pub fn transport_protocol(&self) -> Option<i32> {
        (self.transport_protocol != NO_TRANSPORT_PROTOCOL).then_some(self.transport_protocol)
    }

    fn serialize_entries<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry(keys::AWARE_IPV6, self.peer_address())?;
        if let Some(port) = self.port() {
            map.serialize_entry(keys::AWARE_PORT, &port)?;
        }
        if let Some(protocol) = self.transport_protocol() {
            map.serialize_entry(keys::AWARE_TRANSPORT_PROTOCOL, &protocol)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_slash_stripped_once() {
        let info = WifiAwareNetworkInfo::new("/2001:db8::1", NO_PORT, NO_TRANSPORT_PROTOCOL);
        assert_eq!(info.peer_address(), "2001:db8::1");

        let info = WifiAwareNetworkInfo::new("//fe80::1", NO_PORT, NO_TRANSPORT_PROTOCOL);
        assert_eq!(info.peer_address(), "/fe80::1");
    }

    #[test]
    fn test_address_without_slash_unchanged() {
        let info = WifiAwareNetworkInfo::new("2001:db8::1", NO_PORT, NO_TRANSPORT_PROTOCOL);
        assert_eq!(info.peer_address(), "2001:db8::1");

        let info = WifiAwareNetworkInfo::new("peer.local/fe80::1", NO_PORT, NO_TRANSPORT_PROTOCOL);
        assert_eq!(info.peer_address(), "peer.local/fe80::1");
    }

    #[test]
    fn test_empty_address() {
        let info = WifiAwareNetworkInfo::new("", NO_PORT, NO_TRANSPORT_PROTOCOL);
        assert_eq!(info.peer_address(), "");
    }

    #[test]
    fn test_from_addr_uses_platform_form() {
        let addr: Ipv6Addr = "fe80::1".parse().unwrap();
        let info = WifiAwareNetworkInfo::from_addr(addr, 5353, 6);
        assert_eq!(info.peer_ipv6, "/fe80::1");
        assert_eq!(info.peer_address(), "fe80::1");
    }

    #[test]
    fn test_sentinels() {
        let info = WifiAwareNetworkInfo::new("/fe80::1", NO_PORT, NO_TRANSPORT_PROTOCOL);
        assert_eq!(info.port(), None);
        assert_eq!(info.transport_protocol(), None);

        let info = WifiAwareNetworkInfo::new("/fe80::1", 5353, 6);
        assert_eq!(info.port(), Some(5353));
        assert_eq!(info.transport_protocol(), Some(6));
    }

    #[test]
    fn test_kind_labels() {
        let aware: TransportInfo = WifiAwareNetworkInfo::new("/fe80::1", 0, -1).into();
        assert_eq!(aware.kind(), "wifi_aware");
        assert_eq!(TransportInfo::Generic.kind(), "generic");
        assert_eq!(TransportInfo::unknown("vcn").kind(), "vcn");
    }
}
