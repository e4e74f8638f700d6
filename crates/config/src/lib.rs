//! Typed YAML configuration loading with environment variable overlay.
//!
//! `tote-config` reads a YAML document from the first available of an
//! ordered list of source locations into a caller-supplied struct, extracts
//! named top-level sections into their own structs, and then overlays values
//! from environment variables named `{PREFIX}_{FIELD}[_{FIELD}...]`.
//!
//! Config structs derive `serde::Deserialize` for the document side and
//! declare their overridable fields with the [`visitable!`] macro for the
//! environment side:
//!
//! ```no_run
//! use serde::Deserialize;
//! use tote_config::{ReadOptions, read_config, visitable};
//!
//! #[derive(Default, Deserialize)]
//! #[serde(default)]
//! struct Database {
//!     host: String,
//!     port: i64,
//! }
//! visitable!(Database { host, port });
//!
//! #[derive(Default, Deserialize)]
//! #[serde(default)]
//! struct AppConfig {
//!     database: Database,
//!     debug: bool,
//! }
//! visitable!(AppConfig { database, debug });
//!
//! // TOTE_DATABASE_PORT=5433 overrides whichever value the document had.
//! let mut config = AppConfig::default();
//! read_config(
//!     &mut config,
//!     ReadOptions::new().add_sources(["/etc/app.yaml", "./app.yaml"]),
//! )?;
//! # Ok::<(), tote_config::ConfigError>(())
//! ```

pub mod coerce;
pub mod constants;
pub mod env;
mod error;
mod reader;
mod section;
pub mod visit;

pub use coerce::{CoerceError, FieldKind};
pub use env::{Environment, ProcessEnv, apply_environment};
pub use error::{ConfigError, Result};
pub use reader::{ReadOptions, read_config};
pub use section::extract_section;
pub use visit::{Field, FieldRef, FieldWalker, IntoFieldRef, LeafField, ScalarField, Visitable};

// Re-exported so callers can configure transports without naming the
// transport crate directly.
pub use tote_transport::{Fetch, Transport, TransportError};
