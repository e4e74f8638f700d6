//! Filesystem fetcher.
//!
//! Handles bare paths and `file://` locations. A missing file is reported as
//! [`TransportError::NotFound`] so the loader can log it and fall through to
//! the next candidate source; every other I/O failure is surfaced as-is.

use std::io::ErrorKind;

use crate::{Fetch, Result, TransportError};

/// Reads config sources from the local filesystem.
pub struct FilesystemFetcher;

impl FilesystemFetcher {
    fn strip_scheme(location: &str) -> &str {
        location.strip_prefix("file://").unwrap_or(location)
    }
}

impl Fetch for FilesystemFetcher {
    fn fetch(&self, location: &str) -> Result<Vec<u8>> {
        let path = Self::strip_scheme(location);
        std::fs::read(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => TransportError::NotFound {
                location: location.to_string(),
            },
            _ => TransportError::Io {
                location: location.to_string(),
                source,
            },
        })
    }
}
