//! Options for a single `read_config` call.

use serde::de::DeserializeOwned;
use tote_transport::{Fetch, Transport};

use crate::constants::DEFAULT_ENV_PREFIX;
use crate::env::{Environment, ProcessEnv};
use crate::visit::Visitable;

/// An embedded registration's target, type-erased for storage in the option
/// set.
///
/// The two operations are the two things the orchestrator does with an
/// embedded target: assign its document section, and walk it for the
/// environment overlay.
pub(crate) trait EmbeddedTarget {
    fn assign_section(&mut self, value: serde_yaml::Value) -> Result<(), serde_yaml::Error>;
    fn as_visitable(&mut self) -> &mut dyn Visitable;
}

impl<T: Visitable + DeserializeOwned> EmbeddedTarget for T {
    fn assign_section(&mut self, value: serde_yaml::Value) -> Result<(), serde_yaml::Error> {
        *self = serde_yaml::from_value(value)?;
        Ok(())
    }

    fn as_visitable(&mut self) -> &mut dyn Visitable {
        self
    }
}

/// Builder-pattern option set for [`read_config`](crate::read_config).
///
/// Owns the candidate source list, embedded registrations, environment
/// prefix, transport, and environment snapshot for the duration of one call.
pub struct ReadOptions<'t> {
    pub(crate) sources: Vec<String>,
    pub(crate) embedded: Vec<(String, &'t mut dyn EmbeddedTarget)>,
    pub(crate) env_prefix: String,
    pub(crate) transport: Transport,
    pub(crate) environment: Box<dyn Environment>,
    pub(crate) load_dotenv: bool,
}

impl<'t> ReadOptions<'t> {
    /// Empty source list, `TOTE` prefix, filesystem-only transport, process
    /// environment.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            embedded: Vec::new(),
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
            transport: Transport::new(),
            environment: Box::new(ProcessEnv),
            load_dotenv: false,
        }
    }

    /// Append one candidate source location.
    pub fn add_source(mut self, location: impl Into<String>) -> Self {
        self.sources.push(location.into());
        self
    }

    /// Append candidate source locations, preserving their order.
    pub fn add_sources<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sources.extend(locations.into_iter().map(Into::into));
        self
    }

    /// Register `target` to receive the top-level section under `key`.
    ///
    /// Key matching against the document is case-insensitive; the key also
    /// becomes an uppercased segment of the section's environment prefix.
    pub fn with_embedded<T>(mut self, key: impl Into<String>, target: &'t mut T) -> Self
    where
        T: Visitable + DeserializeOwned,
    {
        self.embedded.push((key.into(), target));
        self
    }

    /// Override the default environment variable prefix. Stored uppercased.
    pub fn with_env_prefix(mut self, prefix: impl AsRef<str>) -> Self {
        self.env_prefix = prefix.as_ref().to_uppercase();
        self
    }

    /// Replace the transport collaborator entirely.
    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    /// Register an additional fetcher scheme on the current transport, e.g.
    /// an object-storage or HTTP client.
    pub fn with_fetcher(mut self, scheme: impl Into<String>, fetcher: Box<dyn Fetch>) -> Self {
        self.transport.register(scheme, fetcher);
        self
    }

    /// Inject an environment snapshot in place of the process environment.
    pub fn with_environment<E: Environment + 'static>(mut self, environment: E) -> Self {
        self.environment = Box::new(environment);
        self
    }

    /// Load a `.env` file (if present) before reading, unless disabled by
    /// the `DOTENV_DISABLED` variable.
    pub fn load_dotenv(mut self) -> Self {
        self.load_dotenv = true;
        self
    }
}

impl Default for ReadOptions<'_> {
    fn default() -> Self {
        Self::new()
    }
}
