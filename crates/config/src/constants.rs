//! Centralized constants for tote configuration loading.

/// Default prefix for environment variables that override config values.
pub const DEFAULT_ENV_PREFIX: &str = "TOTE";

/// Separator between path segments in computed environment variable names.
pub const ENV_SEPARATOR: &str = "_";

/// Suffix of the per-call variable naming an extra config source location.
///
/// The full variable is `{PREFIX}_CONFIG_FILE`; when set, its value is tried
/// before every registered source.
pub const CONFIG_FILE_SUFFIX: &str = "CONFIG_FILE";

/// Variable that disables `.env` loading when set to `true` or `1`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";
