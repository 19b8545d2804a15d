use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use palcheck_utils::types::{ConfigSource, IntWidth, OverflowPolicy};

/// Effective configuration for a palcheck run.
///
/// Use [`Config::discover()`] for CLI behavior that:
/// - Honors an explicit `--config` path, then `PALCHECK_CONFIG`
/// - Otherwise searches for `.palcheck/config.toml` upward from the current directory
/// - Applies built-in defaults for unspecified values
///
/// Each value tracks its source (`cli`, `config`, `env` or `default`) in
/// `source_attribution`, keyed by the option name.
///
/// # Configuration File Format
///
/// ```toml
/// [defaults]
/// width = "i32"
/// overflow = "widen"
/// verbose = false
/// json = false
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Integer width input is parsed into.
    pub width: IntWidth,
    /// Behavior when the reversal overflows `width`.
    pub overflow: OverflowPolicy,
    /// Debug-level logging on stderr.
    pub verbose: bool,
    /// Emit a JCS JSON report instead of the prompt and message.
    pub json: bool,
    /// Configuration file that was loaded, if any.
    pub config_path: Option<PathBuf>,
    /// Source attribution for each setting.
    pub source_attribution: HashMap<String, ConfigSource>,
}

impl Default for Config {
    fn default() -> Self {
        let source_attribution = ["width", "overflow", "verbose", "json"]
            .into_iter()
            .map(|key| (key.to_string(), ConfigSource::Default))
            .collect();

        Self {
            width: IntWidth::default(),
            overflow: OverflowPolicy::default(),
            verbose: false,
            json: false,
            config_path: None,
            source_attribution,
        }
    }
}

/// The `[defaults]` table of a configuration file.
///
/// Enum-valued options stay as strings here so an unknown value is reported
/// as a `ConfigError::InvalidValue` naming the key, not a TOML parse failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    pub width: Option<String>,
    pub overflow: Option<String>,
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}
