//! JSON canonicalization for machine-readable output
//!
//! palcheck emits JSON in JCS (RFC 8785) canonical form so that output is
//! byte-for-byte stable across runs and platforms.

use anyhow::{Context, Result};
use serde::Serialize;

/// Emit `value` as a JCS canonical JSON string.
///
/// Keys are sorted and whitespace is removed.
pub fn emit_jcs<T: Serialize>(value: &T) -> Result<String> {
    let json_value =
        serde_json::to_value(value).with_context(|| "Failed to serialize value to JSON")?;
    let json_bytes = serde_json_canonicalizer::to_vec(&json_value)
        .with_context(|| "Failed to canonicalize JSON using JCS")?;
    String::from_utf8(json_bytes).with_context(|| "JCS output contained invalid UTF-8")
}
