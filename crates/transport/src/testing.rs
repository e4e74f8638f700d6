//! Test doubles for the transport layer.
//!
//! These are exported so downstream crates can exercise source-fallback
//! behavior without touching the filesystem or the network.

use std::collections::HashMap;

use crate::{Fetch, Result, TransportError};

/// A fetcher backed by an in-memory map of location to bytes.
#[derive(Default)]
pub struct MemoryFetcher {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `bytes` under `location`.
    pub fn insert(&mut self, location: impl Into<String>, bytes: Vec<u8>) {
        self.entries.insert(location.into(), bytes);
    }

    /// Builder-style [`MemoryFetcher::insert`].
    pub fn with_entry(mut self, location: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.insert(location, bytes);
        self
    }
}

impl Fetch for MemoryFetcher {
    fn fetch(&self, location: &str) -> Result<Vec<u8>> {
        self.entries
            .get(location)
            .cloned()
            .ok_or_else(|| TransportError::NotFound {
                location: location.to_string(),
            })
    }
}

/// A fetcher that fails every request, for exercising exhausted-source paths.
pub struct FailingFetcher;

impl Fetch for FailingFetcher {
    fn fetch(&self, location: &str) -> Result<Vec<u8>> {
        Err(TransportError::NotFound {
            location: location.to_string(),
        })
    }
}
