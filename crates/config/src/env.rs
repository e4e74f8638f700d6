//! Environment variable overlay.
//!
//! Responsibilities:
//! - Walk a config record and, for each scalar leaf whose computed variable
//!   name is present in the environment, coerce and assign the value in
//!   place.
//! - Abstract environment lookup behind [`Environment`] so tests inject a
//!   deterministic snapshot instead of mutating process state.
//!
//! Does NOT handle:
//! - Document loading or section extraction (see `reader/` and
//!   `section.rs`).
//!
//! Invariants:
//! - The overlay is sparse: a variable that is unset leaves the field's
//!   current value untouched.
//! - A coercion failure aborts immediately; fields already visited keep
//!   their assigned values (no rollback).
//! - Variables set to an empty string are present and are applied, matching
//!   lookup semantics rather than filtering.

use std::collections::HashMap;

use crate::constants::ENV_SEPARATOR;
use crate::error::ConfigError;
use crate::visit::{FieldWalker, Visitable};

/// Read-only environment variable lookup.
pub trait Environment {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The process environment.
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// A fixed snapshot, for tests and dependency injection.
impl Environment for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Apply environment variables to every scalar leaf of `root`.
///
/// `prefixes` are joined with underscores to form the root of each computed
/// variable name. The error from a failed coercion names the variable and
/// the field's declared name.
pub fn apply_environment(
    root: &mut dyn Visitable,
    env: &dyn Environment,
    prefixes: &[&str],
) -> Result<(), ConfigError> {
    let prefix = prefixes.join(ENV_SEPARATOR);
    for leaf in FieldWalker::new(root, prefix) {
        let Some(literal) = env.lookup(&leaf.path) else {
            continue;
        };
        leaf.scalar
            .set_from_literal(&literal)
            .map_err(|source| ConfigError::EnvValue {
                variable: leaf.path.clone(),
                field: leaf.name.to_string(),
                source,
            })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visitable;

    #[derive(Default)]
    struct Section {
        foo: i64,
        bar: String,
    }
    visitable!(Section { foo, bar });

    #[derive(Default)]
    struct Config {
        test: Section,
        enabled: bool,
    }
    visitable!(Config { test, enabled });

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_overlay_assigns_matching_variables() {
        let mut config = Config::default();
        let env = env(&[("TOTE_TEST_FOO", "15"), ("TOTE_ENABLED", "true")]);

        apply_environment(&mut config, &env, &["TOTE"]).unwrap();

        assert_eq!(config.test.foo, 15);
        assert!(config.enabled);
    }

    #[test]
    fn test_overlay_is_sparse() {
        let mut config = Config {
            test: Section {
                foo: 1,
                bar: "baz".to_string(),
            },
            enabled: false,
        };
        let env = env(&[("TOTE_TEST_FOO", "15")]);

        apply_environment(&mut config, &env, &["TOTE"]).unwrap();

        assert_eq!(config.test.foo, 15);
        assert_eq!(config.test.bar, "baz");
        assert!(!config.enabled);
    }

    #[test]
    fn test_multiple_prefix_segments_are_joined() {
        let mut section = Section::default();
        let env = env(&[("TOTE_EMBEDDED_BAR", "Steve")]);

        apply_environment(&mut section, &env, &["TOTE", "EMBEDDED"]).unwrap();

        assert_eq!(section.bar, "Steve");
    }

    #[test]
    fn test_coercion_failure_names_variable_and_field() {
        let mut config = Config::default();
        let env = env(&[("TOTE_TEST_FOO", "not-a-number")]);

        let err = apply_environment(&mut config, &env, &["TOTE"]).unwrap_err();
        match err {
            ConfigError::EnvValue {
                variable, field, ..
            } => {
                assert_eq!(variable, "TOTE_TEST_FOO");
                assert_eq!(field, "foo");
            }
            other => panic!("expected EnvValue, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_value_fails_non_string_coercion() {
        let mut config = Config::default();
        let env = env(&[("TOTE_ENABLED", "")]);

        assert!(apply_environment(&mut config, &env, &["TOTE"]).is_err());
    }

    #[test]
    fn test_process_env_reads_real_variables() {
        temp_env::with_var("TOTE_PROCESS_ENV_PROBE", Some("present"), || {
            assert_eq!(
                ProcessEnv.lookup("TOTE_PROCESS_ENV_PROBE"),
                Some("present".to_string())
            );
        });
        assert_eq!(ProcessEnv.lookup("TOTE_PROCESS_ENV_PROBE"), None);
    }
}
