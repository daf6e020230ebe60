//! Known event names.
//!
//! Records carry the event name as a plain string so that names added by newer
//! platforms pass through untouched. These enums cover the names the harness
//! scripts match on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::Error;

macro_rules! define_event_names {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(Error::unknown_event_name(other)),
                }
            }
        }

        impl From<$name> for String {
            fn from(kind: $name) -> Self {
                kind.as_str().to_string()
            }
        }
    };
}

define_event_names!(
    /// Network callback notifications.
    NetworkCallbackKind {
        PreCheck => "onPreCheck",
        Available => "onAvailable",
        Losing => "onLosing",
        Lost => "onLost",
        Unavailable => "onUnavailable",
        CapabilitiesChanged => "onCapabilitiesChanged",
        BlockedStatusChanged => "onBlockedStatusChanged",
        Suspended => "onSuspended",
        Resumed => "onResumed",
        LinkPropertiesChanged => "onLinkPropertiesChanged",
        Invalid => "onInvalid",
    }
);

define_event_names!(
    /// Packet keep-alive status transitions.
    PacketKeepaliveKind {
        Started => "Started",
        Stopped => "Stopped",
        Error => "Error",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_parse_back() {
        for kind in NetworkCallbackKind::ALL {
            assert_eq!(kind.as_str().parse::<NetworkCallbackKind>().unwrap(), *kind);
        }
        for kind in PacketKeepaliveKind::ALL {
            assert_eq!(kind.to_string().parse::<PacketKeepaliveKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&NetworkCallbackKind::LinkPropertiesChanged).unwrap();
        assert_eq!(json, "\"onLinkPropertiesChanged\"");

        let kind: PacketKeepaliveKind = serde_json::from_str("\"Stopped\"").unwrap();
        assert_eq!(kind, PacketKeepaliveKind::Stopped);
    }

    #[test]
    fn test_unknown_name_rejected() {
        let err = "onSomethingNew".parse::<NetworkCallbackKind>().unwrap_err();
        assert!(err.to_string().contains("onSomethingNew"));
        assert!("started".parse::<PacketKeepaliveKind>().is_err());
    }

    #[test]
    fn test_into_string() {
        let name: String = NetworkCallbackKind::Losing.into();
        assert_eq!(name, "onLosing");
    }
}
