//! Configuration management for palcheck
//!
//! This module provides hierarchical configuration with discovery and precedence:
//! CLI > file > defaults. Configuration files are TOML with a single
//! `[defaults]` section.

mod cli_args;
mod discovery;
mod model;
mod sources;
mod validation;

pub use cli_args::CliArgs;
pub use discovery::CONFIG_ENV_VAR;
pub use model::*;
pub use sources::{EffectiveValue, SettingValue};
pub use palcheck_utils::types::ConfigSource;
