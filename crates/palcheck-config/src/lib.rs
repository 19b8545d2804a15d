//! Configuration for palcheck
//!
//! Hierarchical configuration with discovery and precedence:
//! CLI > config file > defaults.

pub mod config;

pub use config::{
    CONFIG_ENV_VAR, CliArgs, Config, ConfigSource, Defaults, EffectiveValue, SettingValue,
};
pub use palcheck_utils::error;
pub use palcheck_utils::types;
