//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for connectivity event translation.
#[derive(Error, Debug)]
pub enum Error {
    /// The JSON encoder rejected a value. The whole payload is discarded.
    #[error("encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// Invalid configuration value.
    #[error("config error: {0}")]
    Config(String),

    /// Event name outside the known set.
    #[error("unknown event name: {0}")]
    UnknownEventName(String),
}

// Convenience constructors
impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn unknown_event_name(name: impl Into<String>) -> Self {
        Self::UnknownEventName(name.into())
    }

    /// True when the error came from the JSON encoder.
    pub fn is_encoding(&self) -> bool {
        matches!(self, Error::Encoding(_))
    }
}
