//! Location fetching for tote config sources.
//!
//! This crate resolves a source location string (a bare path, `file://...`,
//! `http(s)://...`, or any registered scheme) to the raw bytes stored there.
//! It is the transport collaborator consumed by `tote-config`: the loader
//! hands it one location at a time and decides what to do with the bytes.

mod error;
mod fs;
mod http;
pub mod testing;

use std::collections::HashMap;

pub use error::TransportError;
pub use fs::FilesystemFetcher;
pub use http::HttpFetcher;

/// Result type alias for transport operations.
pub type Result<T> = std::result::Result<T, TransportError>;

/// A fetcher for one location scheme.
///
/// Implementations read the full contents at `location` and return them as
/// bytes. `location` is passed verbatim, scheme prefix included.
pub trait Fetch {
    fn fetch(&self, location: &str) -> Result<Vec<u8>>;
}

/// Scheme-dispatching registry of [`Fetch`] implementations.
///
/// Locations of the form `scheme://rest` dispatch on `scheme`; locations
/// without a scheme separator are treated as filesystem paths. The default
/// registry handles the filesystem only; remote schemes are attached with
/// [`Transport::register`] or the builder-style [`Transport::with_fetcher`].
pub struct Transport {
    schemes: HashMap<String, Box<dyn Fetch>>,
}

impl Transport {
    /// Create a transport with the built-in filesystem fetcher, registered
    /// for the `file` scheme and for schemeless paths.
    pub fn new() -> Self {
        let mut schemes: HashMap<String, Box<dyn Fetch>> = HashMap::new();
        schemes.insert("file".to_string(), Box::new(FilesystemFetcher));
        Self { schemes }
    }

    /// Create a transport with no fetchers at all.
    ///
    /// Useful when every scheme, including `file`, should be supplied by the
    /// caller.
    pub fn empty() -> Self {
        Self {
            schemes: HashMap::new(),
        }
    }

    /// Register a fetcher for a scheme, replacing any previous registration.
    pub fn register(&mut self, scheme: impl Into<String>, fetcher: Box<dyn Fetch>) {
        self.schemes.insert(scheme.into(), fetcher);
    }

    /// Builder-style [`Transport::register`].
    pub fn with_fetcher(mut self, scheme: impl Into<String>, fetcher: Box<dyn Fetch>) -> Self {
        self.register(scheme, fetcher);
        self
    }

    /// Register an [`HttpFetcher`] for the `http` and `https` schemes.
    pub fn with_http(self) -> Self {
        let fetcher = HttpFetcher::new();
        self.with_fetcher("http", Box::new(fetcher.clone()))
            .with_fetcher("https", Box::new(fetcher))
    }

    /// Fetch the bytes at `location`, dispatching on its scheme.
    pub fn fetch(&self, location: &str) -> Result<Vec<u8>> {
        let scheme = location
            .split_once("://")
            .map(|(scheme, _)| scheme)
            .unwrap_or("file");
        let fetcher = self
            .schemes
            .get(scheme)
            .ok_or_else(|| TransportError::UnsupportedScheme {
                scheme: scheme.to_string(),
                location: location.to_string(),
            })?;
        fetcher.fetch(location)
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}
