//! Error types for location fetching.

use thiserror::Error;

/// Errors that can occur while fetching a config source location.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The location does not exist (missing file, HTTP 404, absent entry).
    #[error("config source '{location}' doesn't exist")]
    NotFound { location: String },

    /// No fetcher is registered for the location's scheme.
    #[error("no fetcher registered for scheme '{scheme}' (location '{location}')")]
    UnsupportedScheme { scheme: String, location: String },

    /// Reading from the filesystem failed for a reason other than absence.
    #[error("failed to read '{location}': {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// An HTTP request failed before a response was received.
    #[error("request for '{location}' failed: {source}")]
    Http {
        location: String,
        #[source]
        source: reqwest::Error,
    },

    /// An HTTP request completed with a non-success status.
    #[error("request for '{location}' returned status {status}")]
    HttpStatus { location: String, status: u16 },
}
