//! Embedded section extraction.
//!
//! A section is a top-level key's value within the loaded document, decoded
//! into its own typed structure independently of the primary target. Key
//! matching is case-insensitive; the scan preserves document order so the
//! first matching entry wins.

use serde::de::DeserializeOwned;

use crate::error::ConfigError;

/// Locate the value of the first top-level entry whose string key matches
/// `key` case-insensitively. `None` when the document has no such entry or
/// its top level is not a mapping.
pub(crate) fn find_section(
    bytes: &[u8],
    key: &str,
) -> Result<Option<serde_yaml::Value>, serde_yaml::Error> {
    let document: serde_yaml::Value = serde_yaml::from_slice(bytes)?;
    let serde_yaml::Value::Mapping(entries) = document else {
        return Ok(None);
    };

    let wanted = key.to_lowercase();
    for (entry_key, value) in entries {
        let serde_yaml::Value::String(name) = entry_key else {
            continue;
        };
        if name.to_lowercase() == wanted {
            return Ok(Some(value));
        }
    }
    Ok(None)
}

/// Decode the section under `key` into `target`.
///
/// Absence of the section is not an error: `target` is left untouched and
/// the environment overlay may still populate it later.
pub fn extract_section<T: DeserializeOwned>(
    bytes: &[u8],
    key: &str,
    target: &mut T,
) -> Result<(), ConfigError> {
    let section = find_section(bytes, key).map_err(|source| ConfigError::Section {
        key: key.to_string(),
        source,
    })?;
    if let Some(value) = section {
        *target = serde_yaml::from_value(value).map_err(|source| ConfigError::Section {
            key: key.to_string(),
            source,
        })?;
    }
    Ok(())
}
