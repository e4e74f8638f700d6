//! Error types for configuration loading.

use thiserror::Error;

use crate::coerce::CoerceError;

/// Result type alias for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur during a [`read_config`](crate::read_config) call.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Every candidate source location failed to fetch.
    #[error("couldn't load any of the provided config sources: {}", attempted.join(", "))]
    ExhaustedSources { attempted: Vec<String> },

    /// The loaded document did not parse into the target structure.
    #[error("error while reading data from config source '{location}'")]
    Parse {
        location: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// An embedded section's value did not parse into its target structure.
    #[error("error while reading embedded config '{key}'")]
    Section {
        key: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// An environment variable's literal did not coerce to its field's kind.
    #[error("error while reading environment variable '{variable}' into field '{field}'")]
    EnvValue {
        variable: String,
        field: String,
        #[source]
        source: CoerceError,
    },
}
