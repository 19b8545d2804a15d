//! Shared value types for palcheck
//!
//! These enums are used by the configuration layer, the engine, and the CLI,
//! so their string forms (`i32`, `widen`, `cli`, ...) are shared between TOML
//! files, command-line flags, and JSON output.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

/// Width of the signed integer the input is parsed into and reversed in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum IntWidth {
    I16,
    #[default]
    I32,
    I64,
}

impl IntWidth {
    /// Smallest representable value, widened to `i128`.
    #[must_use]
    pub const fn min_value(self) -> i128 {
        match self {
            Self::I16 => i16::MIN as i128,
            Self::I32 => i32::MIN as i128,
            Self::I64 => i64::MIN as i128,
        }
    }

    /// Largest representable value, widened to `i128`.
    #[must_use]
    pub const fn max_value(self) -> i128 {
        match self {
            Self::I16 => i16::MAX as i128,
            Self::I32 => i32::MAX as i128,
            Self::I64 => i64::MAX as i128,
        }
    }

    /// Whether `value` fits in this width.
    #[must_use]
    pub const fn contains(self, value: i128) -> bool {
        value >= self.min_value() && value <= self.max_value()
    }
}

/// What to do when the digit reversal does not fit the selected width.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OverflowPolicy {
    /// Accumulate in `i128` so the reversal is always exact.
    #[default]
    Widen,
    /// Two's-complement wraparound in the selected width.
    Wrap,
    /// Report an `OverflowError`.
    Error,
}

/// Where an effective configuration value came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    /// Value provided via CLI argument (highest precedence).
    Cli,
    /// Value loaded from a configuration file.
    Config,
    /// Value read from an environment variable.
    Env,
    /// Built-in default value (lowest precedence).
    Default,
}

impl ConfigSource {
    /// Stable label used in `--print-config` output.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Cli => "cli",
            Self::Config => "config",
            Self::Env => "env",
            Self::Default => "default",
        }
    }
}

/// Error kinds reported in JSON error output
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    CliArgs,
    Parse,
    Overflow,
    Internal,
}
