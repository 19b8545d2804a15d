use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use palcheck_utils::error::{ConfigError, PalcheckError};

use super::validation::{parse_overflow, parse_width};
use super::{CliArgs, Config, ConfigSource, Defaults};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "PALCHECK_CONFIG";

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    defaults: Option<Defaults>,
}

impl Config {
    /// Discover and load configuration with precedence: CLI > file > defaults
    ///
    /// Uses `PALCHECK_CONFIG` and the current working directory for config
    /// file discovery when no explicit path is provided in `cli_args`.
    pub fn discover(cli_args: &CliArgs) -> Result<Self, PalcheckError> {
        let start_dir = std::env::current_dir().map_err(|e| ConfigError::DiscoveryFailed {
            reason: format!("cannot read current directory: {e}"),
        })?;
        let env_path = std::env::var_os(CONFIG_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self::discover_from(&start_dir, env_path.as_deref(), cli_args)
    }

    /// Discover and load configuration starting from a specific directory
    ///
    /// This is the path-driven variant used by tests to avoid process-global state.
    pub fn discover_from(
        start_dir: &Path,
        env_path: Option<&Path>,
        cli_args: &CliArgs,
    ) -> Result<Self, PalcheckError> {
        let mut config = Config::default();

        let located = match (&cli_args.config_path, env_path) {
            (Some(explicit), _) => Some((explicit.clone(), ConfigSource::Cli, true)),
            (None, Some(from_env)) => Some((from_env.to_path_buf(), ConfigSource::Env, true)),
            (None, None) => Self::discover_config_file_from(start_dir)
                .map(|found| (found, ConfigSource::Config, false)),
        };

        if let Some((path, path_source, required)) = located {
            if let Some(file_config) = Self::load_config_file(&path, required)? {
                if let Some(file_defaults) = file_config.defaults {
                    config.apply_file_defaults(file_defaults)?;
                }
                config.config_path = Some(path);
                config
                    .source_attribution
                    .insert("config_path".to_string(), path_source);
            }
        }

        config.apply_cli(cli_args)?;
        Ok(config)
    }

    fn apply_file_defaults(&mut self, file_defaults: Defaults) -> Result<(), ConfigError> {
        if let Some(raw) = file_defaults.width.as_deref() {
            self.width = parse_width(raw)?;
            self.attribute("width", ConfigSource::Config);
        }
        if let Some(raw) = file_defaults.overflow.as_deref() {
            self.overflow = parse_overflow(raw)?;
            self.attribute("overflow", ConfigSource::Config);
        }
        if let Some(verbose) = file_defaults.verbose {
            self.verbose = verbose;
            self.attribute("verbose", ConfigSource::Config);
        }
        if let Some(json) = file_defaults.json {
            self.json = json;
            self.attribute("json", ConfigSource::Config);
        }
        Ok(())
    }

    fn apply_cli(&mut self, cli_args: &CliArgs) -> Result<(), ConfigError> {
        if let Some(raw) = cli_args.width.as_deref() {
            self.width = parse_width(raw)?;
            self.attribute("width", ConfigSource::Cli);
        }
        if let Some(raw) = cli_args.overflow.as_deref() {
            self.overflow = parse_overflow(raw)?;
            self.attribute("overflow", ConfigSource::Cli);
        }
        // Boolean flags only override when set; an absent flag keeps the file value.
        if cli_args.verbose == Some(true) {
            self.verbose = true;
            self.attribute("verbose", ConfigSource::Cli);
        }
        if cli_args.json == Some(true) {
            self.json = true;
            self.attribute("json", ConfigSource::Cli);
        }
        Ok(())
    }

    fn attribute(&mut self, key: &str, source: ConfigSource) {
        self.source_attribution.insert(key.to_string(), source);
    }

    /// Discover config file by searching upward from a specific directory
    ///
    /// Walks up the directory tree looking for `.palcheck/config.toml`, stopping
    /// at the filesystem root or a repository root (`.git`, `.hg`, `.svn`).
    #[must_use]
    pub fn discover_config_file_from(start_dir: &Path) -> Option<PathBuf> {
        let mut current_dir = start_dir;

        loop {
            let config_path = current_dir.join(".palcheck").join("config.toml");
            if config_path.is_file() {
                return Some(config_path);
            }

            if current_dir.join(".git").exists()
                || current_dir.join(".hg").exists()
                || current_dir.join(".svn").exists()
            {
                return None;
            }

            current_dir = current_dir.parent()?;
        }
    }

    /// Load configuration from a TOML file.
    ///
    /// A missing file is an error only when the path was given explicitly.
    fn load_config_file(path: &Path, required: bool) -> Result<Option<TomlConfig>, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map(Some).map_err(|e| {
                ConfigError::InvalidFile(format!("{}: {}", path.display(), e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => Ok(None),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ConfigError::NotFound {
                path: path.display().to_string(),
            }),
            Err(e) => Err(ConfigError::InvalidFile(format!(
                "{}: {}",
                path.display(),
                e
            ))),
        }
    }
}
