//! Core types shared across the crate.
//!
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Configuration structures for logging

mod config;
mod errors;

pub use config::{Config, ObservabilityConfig};
pub use errors::{Error, Result};
