//! Errors reported to the host
//!
//! Window operations on stale ids are silent no-ops. These errors only
//! surface where the host asks for something by name or hands us data.

use std::fmt;

use crate::window::WindowId;

/// Errors returned across the host boundary
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Launcher name that maps to no app
    UnknownApp(String),

    /// Configuration JSON that failed to parse
    InvalidConfig(String),

    /// Window id that is not open (or has no content of the requested kind)
    UnknownWindow(WindowId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownApp(name) => write!(f, "Unknown app: {}", name),
            Error::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            Error::UnknownWindow(id) => write!(f, "Unknown window: {}", id),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::InvalidConfig(e.to_string())
    }
}
