//! Config reading orchestration.
//!
//! Responsibilities:
//! - Resolve the effective source list and load the first available source.
//! - Deserialize the document into the primary target, extract each
//!   registered embedded section, then apply the environment overlay to the
//!   primary and to every embedded target.
//!
//! Does NOT handle:
//! - Fetching bytes for a location (see `tote-transport`).
//! - Field traversal or coercion details (see `visit.rs`, `coerce.rs`).
//!
//! Invariants:
//! - Every step is fatal on error; the first error is returned and no
//!   partial-success continuation happens.
//! - The raw document bytes live only for the duration of one call.

mod options;
mod sources;

use serde::de::DeserializeOwned;

use crate::constants::DOTENV_DISABLED_VAR;
use crate::env::{self, Environment};
use crate::error::ConfigError;
use crate::section;
use crate::visit::Visitable;

pub use options::ReadOptions;

/// Load configuration into `target` according to `options`.
///
/// Sequence: load the first available source, deserialize it into `target`,
/// extract each embedded registration's section from the same raw bytes,
/// overlay environment variables onto `target` under the configured prefix,
/// then overlay each embedded target under prefix + uppercased key.
///
/// ```no_run
/// use serde::Deserialize;
/// use tote_config::{ReadOptions, read_config, visitable};
///
/// #[derive(Default, Deserialize)]
/// #[serde(default)]
/// struct AppConfig {
///     host: String,
///     port: i64,
/// }
/// visitable!(AppConfig { host, port });
///
/// let mut config = AppConfig::default();
/// read_config(
///     &mut config,
///     ReadOptions::new().add_sources(["/etc/app.yaml", "./app.yaml"]),
/// )?;
/// # Ok::<(), tote_config::ConfigError>(())
/// ```
pub fn read_config<T>(target: &mut T, options: ReadOptions<'_>) -> Result<(), ConfigError>
where
    T: Visitable + DeserializeOwned,
{
    let ReadOptions {
        sources,
        mut embedded,
        env_prefix,
        transport,
        environment,
        load_dotenv,
    } = options;

    if load_dotenv {
        maybe_load_dotenv(environment.as_ref());
    }

    let candidates = sources::effective_sources(&sources, environment.as_ref(), &env_prefix);
    let (location, bytes) = sources::load_first_available(&transport, &candidates)?;

    *target = serde_yaml::from_slice(&bytes).map_err(|source| ConfigError::Parse {
        location: location.clone(),
        source,
    })?;

    for (key, registration) in &mut embedded {
        let section_value =
            section::find_section(&bytes, key).map_err(|source| ConfigError::Section {
                key: key.clone(),
                source,
            })?;
        if let Some(value) = section_value {
            registration
                .assign_section(value)
                .map_err(|source| ConfigError::Section {
                    key: key.clone(),
                    source,
                })?;
        }
    }

    env::apply_environment(target, environment.as_ref(), &[&env_prefix])?;

    for (key, registration) in &mut embedded {
        let key_segment = key.to_uppercase();
        env::apply_environment(
            registration.as_visitable(),
            environment.as_ref(),
            &[&env_prefix, &key_segment],
        )?;
    }

    Ok(())
}

/// Best-effort `.env` loading, gated off when `DOTENV_DISABLED` is set to
/// `true` or `1`.
fn maybe_load_dotenv(env: &dyn Environment) {
    let disabled = matches!(
        env.lookup(DOTENV_DISABLED_VAR).as_deref(),
        Some("true") | Some("1")
    );
    if !disabled {
        dotenvy::dotenv().ok();
    }
}
