//! # Connectivity Events - connectivity callbacks as JSON payloads
//!
//! Translates connectivity-manager callback events into the JSON payloads a
//! remote test-automation harness consumes:
//! - Packet keep-alive status notifications
//! - Network callbacks (availability, losing, capability and link-property updates)
//! - Wifi-aware peer details carried by capability updates
//!
//! ## Architecture
//!
//! Records are immutable values; translation is a single exhaustive match:
//! ```text
//!   callback thread →  KeepaliveEvent ───────┐
//!                      NetworkCallbackEvent ─┤→ translate_connectivity_event → (topic, JSON)
//!                        header + CallbackDetail
//!                                 └ TransportInfo (WifiAware | Generic | Unknown)
//! ```

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod events;
pub mod types;

// Internal utilities
pub mod observability;

pub use events::{
    translate_connectivity_event, CallbackDetail, ConnectivityEvent, KeepaliveEvent,
    NetworkCallbackEvent, TransportInfo, WifiAwareNetworkInfo,
};
pub use types::{Config, Error, Result};
