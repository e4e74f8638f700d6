//! HTTP(S) fetcher.
//!
//! The remote-scheme counterpart to the filesystem fetcher. Requests are
//! blocking; the loader tries sources sequentially and imposes no deadline of
//! its own, so callers who need one should configure it on the client.

use crate::{Fetch, Result, TransportError};

/// Fetches config sources over HTTP or HTTPS.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Create a fetcher with a default client.
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Create a fetcher around a preconfigured client (custom TLS, proxies,
    /// timeouts).
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, location: &str) -> Result<Vec<u8>> {
        let response =
            self.client
                .get(location)
                .send()
                .map_err(|source| TransportError::Http {
                    location: location.to_string(),
                    source,
                })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(TransportError::NotFound {
                location: location.to_string(),
            });
        }
        if !status.is_success() {
            return Err(TransportError::HttpStatus {
                location: location.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().map_err(|source| TransportError::Http {
            location: location.to_string(),
            source,
        })?;
        Ok(bytes.to_vec())
    }
}
