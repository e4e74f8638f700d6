//! Source list resolution and ordered fallback fetching.

use tote_transport::Transport;

use crate::constants::{CONFIG_FILE_SUFFIX, ENV_SEPARATOR};
use crate::env::Environment;
use crate::error::ConfigError;

/// Build the effective source list: the `{PREFIX}_CONFIG_FILE` location (if
/// that variable is set) followed by the registered sources.
pub(crate) fn effective_sources(
    registered: &[String],
    env: &dyn Environment,
    prefix: &str,
) -> Vec<String> {
    let override_var = format!("{prefix}{ENV_SEPARATOR}{CONFIG_FILE_SUFFIX}");
    let mut sources = Vec::with_capacity(registered.len() + 1);
    if let Some(location) = env.lookup(&override_var) {
        sources.push(location);
    }
    sources.extend(registered.iter().cloned());
    sources
}

/// Try each source in order and return the first successful fetch.
///
/// A failed fetch is recoverable: it is logged and the next source is tried.
/// A successful fetch short-circuits the rest of the list. Exhausting the
/// list is fatal and names every attempted location.
pub(crate) fn load_first_available(
    transport: &Transport,
    sources: &[String],
) -> Result<(String, Vec<u8>), ConfigError> {
    for location in sources {
        match transport.fetch(location) {
            Ok(bytes) => {
                tracing::debug!(location = %location, "loaded config source");
                return Ok((location.clone(), bytes));
            }
            Err(error) => {
                tracing::warn!(
                    %error,
                    location = %location,
                    "failed to load config data from source"
                );
            }
        }
    }
    Err(ConfigError::ExhaustedSources {
        attempted: sources.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tote_transport::testing::MemoryFetcher;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_override_variable_is_prepended() {
        let registered = vec!["./app.yaml".to_string()];
        let env = env(&[("TOTE_CONFIG_FILE", "/override.yaml")]);

        let sources = effective_sources(&registered, &env, "TOTE");
        assert_eq!(sources, vec!["/override.yaml", "./app.yaml"]);
    }

    #[test]
    fn test_override_variable_respects_prefix() {
        let registered = vec![];
        let env = env(&[
            ("TOTE_CONFIG_FILE", "/wrong.yaml"),
            ("SECRET_CONFIG_FILE", "/right.yaml"),
        ]);

        let sources = effective_sources(&registered, &env, "SECRET");
        assert_eq!(sources, vec!["/right.yaml"]);
    }

    #[test]
    fn test_unset_override_leaves_list_unchanged() {
        let registered = vec!["a.yaml".to_string(), "b.yaml".to_string()];
        let env = env(&[]);

        let sources = effective_sources(&registered, &env, "TOTE");
        assert_eq!(sources, registered);
    }

    #[test]
    fn test_first_successful_fetch_short_circuits() {
        let fetcher = MemoryFetcher::new()
            .with_entry("mem://b.yaml", b"from-b".to_vec())
            .with_entry("mem://c.yaml", b"from-c".to_vec());
        let transport = Transport::new().with_fetcher("mem", Box::new(fetcher));

        let sources = vec![
            "mem://a.yaml".to_string(),
            "mem://b.yaml".to_string(),
            "mem://c.yaml".to_string(),
        ];
        let (location, bytes) = load_first_available(&transport, &sources).unwrap();

        assert_eq!(location, "mem://b.yaml");
        assert_eq!(bytes, b"from-b");
    }

    #[test]
    fn test_exhausted_sources_names_all_attempted() {
        let transport = Transport::new();
        let sources = vec!["/missing/a.yaml".to_string(), "/missing/b.yaml".to_string()];

        let err = load_first_available(&transport, &sources).unwrap_err();
        match err {
            ConfigError::ExhaustedSources { attempted } => {
                assert_eq!(attempted, sources);
            }
            other => panic!("expected ExhaustedSources, got {other:?}"),
        }
    }
}
