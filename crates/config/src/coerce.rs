//! Scalar coercion from environment variable literals.
//!
//! Responsibilities:
//! - Convert a string literal to a typed scalar (integer, float, string,
//!   boolean).
//! - Report a mismatch naming the expected kind and the offending literal.
//!
//! Does NOT handle:
//! - Deciding which field a literal targets (see `visit.rs` / `env.rs`).
//!
//! Invariants:
//! - Integers parse as `i64` and are narrowed by the field that stores them.
//! - Floats parse as `f64`.
//! - Booleans accept exactly `1, t, T, TRUE, true, True` and
//!   `0, f, F, FALSE, false, False`.

use std::fmt;

use thiserror::Error;

/// The scalar kinds a config field can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Float,
    Text,
    Boolean,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Integer => "int",
            FieldKind::Float => "float",
            FieldKind::Text => "string",
            FieldKind::Boolean => "bool",
        };
        f.write_str(name)
    }
}

/// A literal did not parse as the field's kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected {kind} value but found value '{literal}' instead")]
pub struct CoerceError {
    pub kind: FieldKind,
    pub literal: String,
}

impl CoerceError {
    fn new(kind: FieldKind, literal: &str) -> Self {
        Self {
            kind,
            literal: literal.to_string(),
        }
    }
}

/// Parse an integer literal as 64-bit; storing fields narrow as needed.
pub fn parse_integer(literal: &str) -> Result<i64, CoerceError> {
    literal
        .parse::<i64>()
        .map_err(|_| CoerceError::new(FieldKind::Integer, literal))
}

/// Parse a float literal as 64-bit.
pub fn parse_float(literal: &str) -> Result<f64, CoerceError> {
    literal
        .parse::<f64>()
        .map_err(|_| CoerceError::new(FieldKind::Float, literal))
}

/// Parse a boolean literal, accepting the conventional alias spellings.
pub fn parse_boolean(literal: &str) -> Result<bool, CoerceError> {
    match literal {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(CoerceError::new(FieldKind::Boolean, literal)),
    }
}
