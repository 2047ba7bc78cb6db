//! Error types shared across the workspace.
//!
//! The `PriceError` enum covers the three failure classes of a price lookup
//! (bad HTTP status, no pair record, anything else) plus the plumbing errors
//! of the front end, so every crate propagates a single error type.
use std::io;

use thiserror::Error;

/// Message shown when a failure carries no description of its own.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Unified error type for price lookups and the code around them.
#[derive(Error, Debug)]
pub enum PriceError {
    /// The service answered with a non-success HTTP status code.
    #[error("HTTP error! status: {0}")]
    Http(u16),

    /// The decoded response contained no pair record.
    #[error("Pair not found")]
    PairNotFound,

    /// Transport failure: connection, TLS, timeout or body read.
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not the expected JSON document.
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// Any other lookup failure described by free text.
    #[error("{0}")]
    Other(String),

    /// I/O error originating from the standard library (stdin, terminal).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Crossbeam/channel receive failed (e.g., sender closed); contains a short context string.
    #[error("Channel receive failed: {0}")]
    ChannelRecv(String),
}

impl PriceError {
    /// User-facing text for this failure, falling back to [`UNKNOWN_ERROR`]
    /// when the underlying error describes itself as an empty string.
    pub fn display_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            String::from(UNKNOWN_ERROR)
        } else {
            message
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_failures_use_fixed_messages() {
        assert_eq!(PriceError::Http(500).to_string(), "HTTP error! status: 500");
        assert_eq!(PriceError::Http(404).to_string(), "HTTP error! status: 404");
        assert_eq!(PriceError::PairNotFound.to_string(), "Pair not found");
    }

    #[test]
    fn decode_failure_keeps_its_own_description() {
        let err: PriceError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        let message = err.display_message();
        assert!(message.contains("EOF"), "unexpected message: {message}");
    }

    #[test]
    fn empty_description_falls_back() {
        assert_eq!(PriceError::Other(String::new()).display_message(), UNKNOWN_ERROR);
        assert_eq!(PriceError::Other("  ".into()).display_message(), UNKNOWN_ERROR);
        assert_eq!(PriceError::Other("socket closed".into()).display_message(), "socket closed");
    }
}
